use super::constant::PythonConstant;
use super::types::PythonTypeSpec;

/// A single parameter of a parsed signature.
///
/// `is_star` and `is_double_star` are mutually exclusive; the parser sets
/// at most one of them.
#[derive(Debug, Clone, PartialEq)]
pub struct PythonFunctionParameter {
    pub name: String,
    pub ty: Option<PythonTypeSpec>,
    pub default: Option<PythonConstant>,
    pub is_star: bool,
    pub is_double_star: bool,
}

impl PythonFunctionParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            default: None,
            is_star: false,
            is_double_star: false,
        }
    }

    /// One-time normalization of variadic parameters: `*args` collects
    /// into `tuple[Any]` and `**kwargs` into `dict[str, Any]`, both with
    /// a `None` default. Overrides any annotation written in the source.
    pub fn normalize_variadic(&mut self) {
        if self.is_star {
            self.ty = Some(PythonTypeSpec::var_positional());
            self.default = Some(PythonConstant::None);
        } else if self.is_double_star {
            self.ty = Some(PythonTypeSpec::var_keyword());
            self.default = Some(PythonConstant::None);
        }
    }
}

/// A fully parsed `def` line. Either every part parsed or the line
/// produced an error; there is no partially filled signature.
#[derive(Debug, Clone, PartialEq)]
pub struct PythonFunctionSignature {
    pub name: String,
    pub parameters: Vec<PythonFunctionParameter>,
    pub return_type: Option<PythonTypeSpec>,
    pub is_async: bool,
}
