pub mod table;
pub mod target;

pub use table::{MapRule, TypeMap};
pub use target::TargetType;
