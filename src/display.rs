use std::fmt;

use crate::{Expression, FloatExt};

/// Fully parenthesized infix form, e.g. `(x + (2 * x))`.
impl<Real: FloatExt> fmt::Display for Expression<Real> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(lhs, rhs) => write!(f, "({lhs} + {rhs})"),
            Self::Constant(value) => write!(f, "{value}"),
            Self::Multiply(lhs, rhs) => write!(f, "({lhs} * {rhs})"),
            Self::Variable => f.write_str("x"),
        }
    }
}
