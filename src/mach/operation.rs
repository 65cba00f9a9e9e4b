use super::{EvalError, Number};
use crate::lang::Opcode;
use num_bigint::BigInt;

type Result<T> = std::result::Result<T, EvalError>;

/// ## Binary arithmetic
///
/// `lhs` is the most recently pushed operand.

pub struct Operation {}

impl Operation {
    pub fn apply(opcode: &Opcode, lhs: Number, rhs: Number, position: usize) -> Result<Number> {
        let (l, r) = match (lhs, rhs) {
            (Number::Finite(l), Number::Finite(r)) => (l, r),
            _ => return Err(EvalError::ArithmeticOnInfinity(opcode.clone(), position)),
        };
        match opcode {
            Opcode::Add => Ok(Operation::add(l, r)),
            Opcode::Subtract => Ok(Operation::subtract(l, r)),
            Opcode::Multiply => Ok(Operation::multiply(l, r)),
            Opcode::Divide => Operation::divide(l, r, position),
            _ => unreachable!("{} is not arithmetic", opcode),
        }
    }

    pub fn add(lhs: BigInt, rhs: BigInt) -> Number {
        Number::Finite(lhs + rhs)
    }

    pub fn subtract(lhs: BigInt, rhs: BigInt) -> Number {
        Number::Finite(lhs - rhs)
    }

    pub fn multiply(lhs: BigInt, rhs: BigInt) -> Number {
        Number::Finite(lhs * rhs)
    }

    pub fn divide(lhs: BigInt, rhs: BigInt, position: usize) -> Result<Number> {
        if rhs == BigInt::from(0) {
            return Err(EvalError::DivisionByZero(position));
        }
        Ok(Number::Finite(lhs / rhs))
    }
}
