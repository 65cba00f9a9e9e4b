use super::Opcode;
use thiserror::Error;

/// ## Lexical errors
///
/// Positions are 1-based word indices into the source text.

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("UNKNOWN TOKEN {0} AT {1}")]
    UnknownToken(String, usize),
    #[error("MISSING BLOCK ID FOR {0} AT {1}")]
    MissingBlockId(Opcode, usize),
    #[error("INVALID TOKEN; {0} {1}")]
    InvalidToken(Opcode, &'static str),
}

#[doc(hidden)]
#[macro_export]
macro_rules! lex_error {
    ($err:ident, $($arg:expr),+) => {
        $crate::lang::LexError::$err($($arg),+)
    };
}
