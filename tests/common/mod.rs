#![allow(dead_code)]
use rayscode::lang::lex;
use rayscode::mach::{EvalError, Evaluator, Limits, Number, RunResult};
use std::collections::VecDeque;

pub fn numbers(values: &[i64]) -> Vec<Number> {
    values.iter().map(|v| Number::from(*v)).collect()
}

pub fn evaluator(source: &str) -> Evaluator {
    Evaluator::new(lex(source).unwrap())
}

pub fn eval(source: &str) -> RunResult {
    evaluator(source).run()
}

pub fn eval_with(source: &str, limits: Limits) -> RunResult {
    evaluator(source).with_limits(limits).run()
}

/// Final stack, panicking on anything but completion.
pub fn stack_of(source: &str) -> Vec<Number> {
    match eval(source) {
        RunResult::Completed { stack, .. } => stack,
        other => panic!("{:?}", other),
    }
}

pub fn output_of(source: &str) -> String {
    match eval(source) {
        RunResult::Completed { output, .. } => output,
        other => panic!("{:?}", other),
    }
}

pub fn error_of(source: &str) -> EvalError {
    match eval(source) {
        RunResult::Failed(error) => error,
        other => panic!("{:?}", other),
    }
}

/// Run to completion, resuming with queued lines each time the program
/// pauses. Panics if it pauses with the queue empty.
pub fn drive(source: &str, inputs: &[&str]) -> RunResult {
    let mut queue: VecDeque<&str> = inputs.iter().copied().collect();
    let mut result = eval(source);
    loop {
        match result {
            RunResult::Paused(evaluator) => match queue.pop_front() {
                Some(line) => result = evaluator.supply_input(line).run(),
                None => panic!("paused with no input left"),
            },
            done => return done,
        }
    }
}
