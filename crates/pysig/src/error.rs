use std::fmt;

/// Position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize, // Byte offset
    pub line: usize,   // Line number (1-based)
    pub column: usize, // Column number (1-based)
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self { offset, line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Lexer errors
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    #[error("Unexpected character '{ch}' at {pos}")]
    UnexpectedChar { ch: char, pos: Position },

    #[error("Unterminated string at {pos}")]
    UnterminatedString { pos: Position },
}

/// Default-value literal errors
#[derive(Debug, thiserror::Error)]
pub enum LiteralError {
    #[error("Expected a literal, found {found} at {pos}")]
    NotALiteral { found: String, pos: Position },

    #[error("Integer literal '{text}' out of range at {pos}")]
    IntegerOutOfRange { text: String, pos: Position },

    #[error("Float literal '{text}' out of range at {pos}")]
    FloatOutOfRange { text: String, pos: Position },
}

/// Type expression errors
#[derive(Debug, thiserror::Error)]
pub enum TypeSyntaxError {
    #[error("Expected a type name, found {found} at {pos}")]
    ExpectedTypeName { found: String, pos: Position },

    #[error("Unmatched '[' at {pos}")]
    UnmatchedBracket { pos: Position },

    #[error("Empty type argument list at {pos}")]
    EmptyArguments { pos: Position },
}

/// Signature grammar errors
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("Expected {expected}, found {found} at {pos}")]
    Expected { expected: String, found: String, pos: Position },

    #[error("Lexer error: {0}")]
    Lex(#[from] LexError),

    #[error("Literal error: {0}")]
    Literal(#[from] LiteralError),

    #[error("Type error: {0}")]
    Type(#[from] TypeSyntaxError),
}

pub type Result<T> = std::result::Result<T, GrammarError>;
