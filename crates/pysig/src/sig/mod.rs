pub mod lexer;
pub mod parser;

pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{find_signature, is_function_signature, parse_signatures, Parser};
