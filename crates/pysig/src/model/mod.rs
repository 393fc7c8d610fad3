pub mod constant;
pub mod function;
pub mod types;

pub use constant::PythonConstant;
pub use function::{PythonFunctionParameter, PythonFunctionSignature};
pub use types::PythonTypeSpec;
