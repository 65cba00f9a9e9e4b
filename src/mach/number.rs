use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};
use std::cmp::Ordering;

/// ## Stack value
///
/// An arbitrary-precision integer, or the unbounded sentinel `Infinity`
/// which is greater than every finite value.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Number {
    Finite(BigInt),
    Unbounded,
}

impl Number {
    pub fn is_positive(&self) -> bool {
        match self {
            Number::Finite(n) => n.is_positive(),
            Number::Unbounded => true,
        }
    }

    pub fn finite(&self) -> Option<&BigInt> {
        match self {
            Number::Finite(n) => Some(n),
            Number::Unbounded => None,
        }
    }

    /// The Unicode scalar value this number names, if any.
    pub fn to_char(&self) -> Option<char> {
        self.finite()?.to_u32().and_then(char::from_u32)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Number {
        Number::Finite(BigInt::from(n))
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Number {
        Number::Finite(BigInt::from(n))
    }
}

impl From<char> for Number {
    fn from(ch: char) -> Number {
        Number::Finite(BigInt::from(ch as u32))
    }
}

impl From<BigInt> for Number {
    fn from(n: BigInt) -> Number {
        Number::Finite(n)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Number) -> Ordering {
        use Number::*;
        match (self, other) {
            (Finite(l), Finite(r)) => l.cmp(r),
            (Finite(_), Unbounded) => Ordering::Less,
            (Unbounded, Finite(_)) => Ordering::Greater,
            (Unbounded, Unbounded) => Ordering::Equal,
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Number::Finite(n) => write!(f, "{}", n),
            Number::Unbounded => write!(f, "Infinity"),
        }
    }
}
