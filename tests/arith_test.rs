mod common;
use common::*;
use rayscode::lang::Opcode;
use rayscode::mach::EvalError;

#[test]
fn test_order_sensitive() {
    assert_eq!(stack_of("TWO TWO THREE ADD MULTIPLY"), numbers(&[10]));
    assert_eq!(stack_of("THREE TWO TWO ADD MULTIPLY"), numbers(&[12]));
}

#[test]
fn test_top_is_left_operand() {
    assert_eq!(stack_of("TWO THREE SUBTRACT"), numbers(&[1]));
    assert_eq!(stack_of("THREE TWO SUBTRACT"), numbers(&[-1]));
    assert_eq!(stack_of("TWO THREE THREE MULTIPLY DIVIDE"), numbers(&[4]));
}

#[test]
fn test_divide_truncates_toward_zero() {
    assert_eq!(stack_of("TWO THREE TWO SUBTRACT DIVIDE"), numbers(&[0]));
    assert_eq!(
        stack_of("TWO THREE THREE TWO SUBTRACT MULTIPLY DIVIDE"),
        numbers(&[-1])
    );
}

#[test]
fn test_arbitrary_precision() {
    let s = stack_of("THREE DUP * DUP * DUP * DUP * DUP * DUP *");
    assert_eq!(s.len(), 1);
    assert_eq!(s[0].to_string(), "3433683820292512484657849089281");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        error_of("TWO TWO SUBTRACT TWO DIVIDE"),
        EvalError::DivisionByZero(5)
    );
}

#[test]
fn test_infinity() {
    assert_eq!(
        error_of("TWO INFINITY ADD"),
        EvalError::ArithmeticOnInfinity(Opcode::Add, 3)
    );
    assert_eq!(
        error_of("INFINITY TWO DIVIDE"),
        EvalError::ArithmeticOnInfinity(Opcode::Divide, 3)
    );
}

#[test]
fn test_underflow() {
    assert_eq!(
        error_of("TWO ADD"),
        EvalError::StackUnderflow {
            opcode: Opcode::Add,
            position: 2,
            needed: 2,
            found: 1,
        }
    );
    assert_eq!(
        error_of("TWO ADD").to_string(),
        "STACK UNDERFLOW IN ADD AT 2; NEEDS 2, HAS 1"
    );
}
