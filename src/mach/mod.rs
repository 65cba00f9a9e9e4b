/*!
## Rust Machine Module

This Rust module is the cursor-driven stack machine for raysCode.

*/

mod cursor;
mod error;
mod evaluator;
mod function;
mod guard;
mod limits;
mod number;
mod operation;
mod stack;
mod trace;
mod var;

pub use cursor::Cursor;
pub use error::EvalError;
pub use error::Limit;
pub use evaluator::Evaluator;
pub use evaluator::RunResult;
pub use guard::work;
pub use limits::Limits;
pub use number::Number;
pub use operation::Operation;
pub use stack::Stack;
pub use trace::TRACE_CHUNK_LEN;
pub use var::Var;
