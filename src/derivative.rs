use crate::{add, constant, multiply, Expression, FloatExt};

impl<Real: FloatExt> Expression<Real> {
    /// The derivative with respect to `x`.
    ///
    /// The result is not simplified; it keeps every `0 * _`, `_ * 1` and
    /// nested sum that the sum and product rules produce. Run
    /// [`Expression::simplify`] afterwards to reduce it.
    pub fn derivative(&self) -> Self {
        match self {
            Self::Add(lhs, rhs) => add(lhs.derivative(), rhs.derivative()),
            Self::Constant(_) => constant(Real::zero()),
            // Product rule: (fg)' = f'g + fg'
            Self::Multiply(lhs, rhs) => add(
                multiply(lhs.derivative(), rhs.as_ref().clone()),
                multiply(lhs.as_ref().clone(), rhs.derivative()),
            ),
            Self::Variable => constant(Real::one()),
        }
    }
}
