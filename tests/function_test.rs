mod common;
use common::*;
use rayscode::lang::Opcode;
use rayscode::mach::{EvalError, RunResult};

#[test]
fn test_square() {
    assert_eq!(
        stack_of("STARTFUNC VARIABLE sq PARAM DUPLICATE MULTIPLY ENDFUNC THREE VARIABLE sq"),
        numbers(&[9])
    );
    assert_eq!(
        stack_of("FUNC VAR sq PARAM DUP * ENDFUNC THREE VAR sq VAR sq"),
        numbers(&[81])
    );
}

#[test]
fn test_arguments_keep_order() {
    assert_eq!(
        stack_of("FUNC VAR sub PARAM PARAM SUBTRACT ENDFUNC TWO THREE VAR sub"),
        stack_of("TWO THREE SUBTRACT")
    );
}

#[test]
fn test_only_parameters_are_passed() {
    assert_eq!(
        stack_of("FUNC VAR inc PARAM TWO ADD ENDFUNC THREE THREE VAR inc"),
        numbers(&[3, 5])
    );
    assert_eq!(
        stack_of("FUNC VAR depth SIZE ENDFUNC TWO TWO VAR depth"),
        numbers(&[2, 2, 0])
    );
}

#[test]
fn test_returns_whole_stack_in_order() {
    assert_eq!(
        stack_of("FUNC VAR pair TWO THREE ENDFUNC THREE VAR pair"),
        numbers(&[3, 2, 3])
    );
}

#[test]
fn test_declaration_alone_does_nothing() {
    assert_eq!(stack_of("FUNC VAR f TWO ENDFUNC THREE"), numbers(&[3]));
}

#[test]
fn test_redeclaration_replaces() {
    assert_eq!(
        stack_of("FUNC VAR f TWO ENDFUNC FUNC VAR f THREE ENDFUNC VAR f"),
        numbers(&[3])
    );
}

#[test]
fn test_variable_wins_over_function() {
    assert_eq!(
        stack_of("THREE VAR f = POP FUNC VAR f TWO ENDFUNC VAR f"),
        numbers(&[3])
    );
}

#[test]
fn test_call_underflow() {
    match error_of("FUNC VAR sq PARAM DUP * ENDFUNC VAR sq") {
        EvalError::StackUnderflow {
            opcode: Opcode::UserFunction(func),
            position: 7,
            needed: 1,
            found: 0,
        } => assert_eq!(func.name().as_ref(), "sq"),
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_error_in_body_propagates() {
    assert_eq!(
        error_of("FUNC VAR bad ADD ENDFUNC VAR bad"),
        EvalError::StackUnderflow {
            opcode: Opcode::Add,
            position: 3,
            needed: 2,
            found: 0,
        }
    );
}

#[test]
fn test_body_errors_name_program_positions() {
    let error = error_of("TWO TWO TWO FUNC VAR bad ADD ADD ADD ENDFUNC VAR bad");
    assert_eq!(
        error,
        EvalError::StackUnderflow {
            opcode: Opcode::Add,
            position: 6,
            needed: 2,
            found: 0,
        }
    );
    assert_eq!(error.to_string(), "STACK UNDERFLOW IN ADD AT 6; NEEDS 2, HAS 0");
    assert_eq!(
        error_of("TWO FUNC VAR f LOOP l TWO ENDLOOP l ENDFUNC VAR f"),
        EvalError::UnsafeLoop("l".to_string(), 6)
    );
    assert_eq!(
        error_of("FUNC VAR f PARAM TWO ADD VAR g ENDFUNC THREE VAR f"),
        EvalError::UndefinedVariable("g".to_string(), 6)
    );
}

#[test]
fn test_stray_markers() {
    assert_eq!(error_of("PARAM"), EvalError::UnexpectedMarker(Opcode::Param, 1));
    assert_eq!(
        error_of("TWO ENDFUNC"),
        EvalError::UnexpectedMarker(Opcode::EndFunc, 2)
    );
}

#[test]
fn test_malformed_declaration() {
    assert_eq!(
        error_of("TWO FUNC VAR f TWO"),
        EvalError::MalformedFunctionDeclaration(2, "MISSING ENDFUNC")
    );
    assert_eq!(
        error_of("FUNC VAR f FUNC VAR g ENDFUNC ENDFUNC"),
        EvalError::MalformedFunctionDeclaration(1, "NESTED STARTFUNC")
    );
}

#[test]
fn test_loop_inside_function() {
    let source = "FUNC VAR four STARTLOOP l TWO TWO TWO ADD SIZE SUBTRACT IF x POP \
                  ENDLOOP l ENDIF x POP ENDFUNC THREE VAR four SIZE";
    assert_eq!(stack_of(source), numbers(&[3, 2, 2, 2, 2, 5]));
}

#[test]
fn test_input_inside_function() {
    match drive("FUNC VAR read INPUT ENDFUNC TWO VAR read SIZE", &["ab"]) {
        RunResult::Completed { stack, .. } => assert_eq!(stack, numbers(&[2, 97, 98, 3])),
        other => panic!("{:?}", other),
    }
}
