/*!
# Rust Language Module

This Rust module provides the lexical analysis of raysCode
and the token model shared with the machine.

*/

#[macro_use]
mod error;
mod lex;
mod token;

pub use error::LexError;
pub use lex::lex;
pub use token::Opcode;
pub use token::Program;
pub use token::Token;
pub use token::UserFunction;
