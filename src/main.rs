//! # rays
//!
//! Command line runner for raysCode.
//!

mod term;

fn main() {
    term::main()
}
