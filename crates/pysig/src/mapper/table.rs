use std::collections::HashMap;

use super::target::TargetType;
use crate::model::PythonTypeSpec;

/// How a registered Python type name turns into a target descriptor
#[derive(Debug, Clone)]
pub enum MapRule {
    /// A fixed descriptor; type arguments, if any, are ignored
    Scalar(TargetType),
    /// One mapped element type: `list[T]` becomes a sequence of T
    Sequence,
    /// Mapped key and value types: `dict[K, V]` becomes a map
    Mapping,
    /// Every argument mapped in order: `tuple[...]` becomes a fixed tuple
    Tuple,
}

/// Registry of Python type names and the shapes they map to.
///
/// Mapping is pure and total: unregistered names and missing type
/// arguments degrade to the fallback descriptor instead of failing, so an
/// exotic annotation never blocks an otherwise valid signature.
#[derive(Debug, Clone)]
pub struct TypeMap {
    rules: HashMap<String, MapRule>,
    fallback: TargetType,
}

impl TypeMap {
    /// An empty registry with an `any` fallback
    pub fn empty() -> Self {
        Self { rules: HashMap::new(), fallback: TargetType::Any }
    }

    pub fn with_fallback(mut self, fallback: TargetType) -> Self {
        self.fallback = fallback;
        self
    }

    /// Register or override the rule for a Python type name
    pub fn insert(&mut self, name: impl Into<String>, rule: MapRule) {
        self.rules.insert(name.into(), rule);
    }

    pub fn with_rule(mut self, name: impl Into<String>, rule: MapRule) -> Self {
        self.insert(name, rule);
        self
    }

    /// Map a parsed type expression to a target descriptor. Never fails.
    pub fn map(&self, spec: &PythonTypeSpec) -> TargetType {
        match self.rules.get(spec.name.as_str()) {
            Some(MapRule::Scalar(target)) => target.clone(),
            Some(MapRule::Sequence) => TargetType::Sequence(Box::new(self.map_argument(spec, 0))),
            Some(MapRule::Mapping) => TargetType::Map(
                Box::new(self.map_argument(spec, 0)),
                Box::new(self.map_argument(spec, 1)),
            ),
            Some(MapRule::Tuple) => {
                // A bare `tuple` still has to hold something
                if spec.arguments.is_empty() {
                    TargetType::Tuple(vec![self.fallback.clone()])
                } else {
                    TargetType::Tuple(
                        spec.arguments.iter().map(|argument| self.map(argument)).collect(),
                    )
                }
            }
            None => self.fallback.clone(),
        }
    }

    /// Map an optional annotation; an absent annotation is dynamic.
    pub fn map_optional(&self, spec: Option<&PythonTypeSpec>) -> TargetType {
        match spec {
            Some(spec) => self.map(spec),
            None => self.fallback.clone(),
        }
    }

    fn map_argument(&self, spec: &PythonTypeSpec, index: usize) -> TargetType {
        match spec.arguments.get(index) {
            Some(argument) => self.map(argument),
            None => self.fallback.clone(),
        }
    }
}

impl Default for TypeMap {
    /// The built-in Python registry
    fn default() -> Self {
        Self::empty()
            .with_rule("int", MapRule::Scalar(TargetType::Int64))
            .with_rule("float", MapRule::Scalar(TargetType::Float64))
            .with_rule("str", MapRule::Scalar(TargetType::Text))
            .with_rule("bool", MapRule::Scalar(TargetType::Bool))
            .with_rule("None", MapRule::Scalar(TargetType::Any))
            .with_rule("Any", MapRule::Scalar(TargetType::Any))
            .with_rule("list", MapRule::Sequence)
            .with_rule("dict", MapRule::Mapping)
            .with_rule("tuple", MapRule::Tuple)
    }
}
