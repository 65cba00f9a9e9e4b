//! # raysCode
//!
//! A stack-based esoteric language. Programs are whitespace-separated
//! keywords; every number must be built from `TWO`, `THREE` and arithmetic.
//!
//! ```
//! use rayscode::lang::lex;
//! use rayscode::mach::{Evaluator, Number, RunResult};
//!
//! let program = lex("TWO TWO THREE ADD MULTIPLY").unwrap();
//! match Evaluator::new(program).run() {
//!     RunResult::Completed { stack, .. } => assert_eq!(stack, vec![Number::from(10i64)]),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! `INPUT` suspends the evaluator instead of blocking. The caller gets the
//! instance back in `RunResult::Paused`, supplies a line and runs it again:
//!
//! ```
//! use rayscode::lang::lex;
//! use rayscode::mach::{Evaluator, RunResult};
//!
//! let program = lex("INPUT OUTPUT OUTPUT").unwrap();
//! let paused = match Evaluator::new(program).run() {
//!     RunResult::Paused(evaluator) => evaluator,
//!     _ => unreachable!(),
//! };
//! match paused.supply_input("hi").run() {
//!     RunResult::Completed { output, .. } => assert_eq!(output, "ih"),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! The `rays` binary runs a source file, or reads programs line by line.

pub mod lang;
pub mod mach;
