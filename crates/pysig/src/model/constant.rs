use std::fmt;

use crate::error::LiteralError;
use crate::sig::lexer::{Token, TokenKind};

/// A default-value literal. Exactly one variant is active; there is no
/// "is integer and also string" state to rule out.
#[derive(Debug, Clone, PartialEq)]
pub enum PythonConstant {
    Integer(i64),
    Float(f64),
    String(String),
    Bool(bool),
    None,
}

impl PythonConstant {
    /// Build a constant from a single token.
    ///
    /// Integer versus float was decided by the tokenizer; here the text is
    /// only converted, and a value that does not fit the target width is
    /// an error rather than a truncation.
    pub fn from_token(token: &Token) -> Result<Self, LiteralError> {
        match &token.kind {
            TokenKind::Number { float: false } => {
                token.lexeme.parse::<i64>().map(PythonConstant::Integer).map_err(|_| {
                    LiteralError::IntegerOutOfRange { text: token.lexeme.clone(), pos: token.pos }
                })
            }
            TokenKind::Number { float: true } => {
                let value: f64 = token.lexeme.parse().map_err(|_| {
                    LiteralError::FloatOutOfRange { text: token.lexeme.clone(), pos: token.pos }
                })?;

                if value.is_finite() {
                    Ok(PythonConstant::Float(value))
                } else {
                    Err(LiteralError::FloatOutOfRange {
                        text: token.lexeme.clone(),
                        pos: token.pos,
                    })
                }
            }
            TokenKind::Str => Ok(PythonConstant::String(token.lexeme.clone())),
            TokenKind::True => Ok(PythonConstant::Bool(true)),
            TokenKind::False => Ok(PythonConstant::Bool(false)),
            TokenKind::NoneLiteral => Ok(PythonConstant::None),
            _ => Err(LiteralError::NotALiteral {
                found: token.kind.to_string(),
                pos: token.pos,
            }),
        }
    }
}

impl fmt::Display for PythonConstant {
    /// Python literal syntax
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PythonConstant::Integer(value) => write!(f, "{}", value),
            PythonConstant::Float(value) => {
                if value.fract() == 0.0 {
                    write!(f, "{:.1}", value)
                } else {
                    write!(f, "{}", value)
                }
            }
            PythonConstant::String(value) => write!(f, "'{}'", value),
            PythonConstant::Bool(true) => write!(f, "True"),
            PythonConstant::Bool(false) => write!(f, "False"),
            PythonConstant::None => write!(f, "None"),
        }
    }
}
