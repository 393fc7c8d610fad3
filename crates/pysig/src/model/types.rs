use std::fmt;

/// A parsed Python type expression, e.g. `int` or `dict[str, list[int]]`.
///
/// `arguments` is empty for non-generic types; a non-empty list means a
/// generic instantiation. `name` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PythonTypeSpec {
    pub name: String,
    pub arguments: Vec<PythonTypeSpec>,
}

impl PythonTypeSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), arguments: Vec::new() }
    }

    pub fn generic(name: impl Into<String>, arguments: Vec<PythonTypeSpec>) -> Self {
        Self { name: name.into(), arguments }
    }

    pub fn is_generic(&self) -> bool {
        !self.arguments.is_empty()
    }

    /// `tuple[Any]`, what a `*args` parameter collects into
    pub fn var_positional() -> Self {
        Self::generic("tuple", vec![Self::new("Any")])
    }

    /// `dict[str, Any]`, what a `**kwargs` parameter collects into
    pub fn var_keyword() -> Self {
        Self::generic("dict", vec![Self::new("str"), Self::new("Any")])
    }
}

impl fmt::Display for PythonTypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;

        if let Some((first, rest)) = self.arguments.split_first() {
            write!(f, "[{}", first)?;
            for argument in rest {
                write!(f, ", {}", argument)?;
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}
