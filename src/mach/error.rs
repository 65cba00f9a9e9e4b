use super::Number;
use crate::lang::Opcode;
use thiserror::Error;

/// ## Evaluation errors
///
/// Every error ends the evaluation. Positions are 1-based token indices
/// into the program (or function body) that was executing.

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("STACK UNDERFLOW IN {opcode} AT {position}; NEEDS {needed}, HAS {found}")]
    StackUnderflow {
        opcode: Opcode,
        position: usize,
        needed: usize,
        found: usize,
    },
    #[error("UNDEFINED VARIABLE {0} AT {1}")]
    UndefinedVariable(String, usize),
    #[error("{opcode} {id} WITHOUT {missing} AT {position}")]
    MalformedBlock {
        opcode: Opcode,
        id: String,
        missing: Opcode,
        position: usize,
    },
    #[error("UNSAFE LOOP {0} AT {1}")]
    UnsafeLoop(String, usize),
    #[error("MALFORMED FUNCTION DECLARATION AT {0}; {1}")]
    MalformedFunctionDeclaration(usize, &'static str),
    #[error("UNEXPECTED {0} AT {1}")]
    UnexpectedMarker(Opcode, usize),
    #[error("ARITHMETIC ON INFINITY IN {0} AT {1}")]
    ArithmeticOnInfinity(Opcode, usize),
    #[error("DIVISION BY ZERO AT {0}")]
    DivisionByZero(usize),
    #[error("INVALID CHARACTER {0} AT {1}")]
    InvalidCharacter(Number, usize),
    #[error("ASSIGNMENT WITHOUT VARIABLE AT {0}")]
    MissingAssignmentTarget(usize),
    #[error("{0} LIMIT EXCEEDED AT {1}")]
    ResourceLimitExceeded(Limit, usize),
}

/// The resource ceiling that was breached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Stack,
    Time,
    Calls,
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Limit::Stack => write!(f, "STACK"),
            Limit::Time => write!(f, "TIME"),
            Limit::Calls => write!(f, "CALL DEPTH"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = EvalError::StackUnderflow {
            opcode: Opcode::Add,
            position: 2,
            needed: 2,
            found: 1,
        };
        assert_eq!(e.to_string(), "STACK UNDERFLOW IN ADD AT 2; NEEDS 2, HAS 1");
        let e = EvalError::MalformedBlock {
            opcode: Opcode::Else,
            id: "a".into(),
            missing: Opcode::EndIf,
            position: 4,
        };
        assert_eq!(e.to_string(), "ELSE a WITHOUT ENDIF AT 4");
        let e = EvalError::ResourceLimitExceeded(Limit::Time, 9);
        assert_eq!(e.to_string(), "TIME LIMIT EXCEEDED AT 9");
    }
}
