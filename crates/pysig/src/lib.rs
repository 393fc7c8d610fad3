pub mod error;
pub mod mapper;
pub mod model;
pub mod sig;

// Re-export commonly used items
pub use error::{GrammarError, LexError, LiteralError, Position, Result, TypeSyntaxError};
pub use mapper::{MapRule, TargetType, TypeMap};
pub use model::{
    PythonConstant, PythonFunctionParameter, PythonFunctionSignature, PythonTypeSpec,
};
pub use sig::{find_signature, is_function_signature, parse_signatures, Parser};
