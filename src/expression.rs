use crate::{ExpressionError, FloatExt};

/// A single-variable arithmetic expression.
///
/// Trees are immutable: every operation builds a new tree and leaves its
/// input untouched. Each binary node owns its two children.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression<Real = f64> {
    // Leaves.
    Constant(Real),
    /// The free variable `x`.
    Variable,

    // Binary real ops.
    Add(Box<Expression<Real>>, Box<Expression<Real>>),
    Multiply(Box<Expression<Real>>, Box<Expression<Real>>),
}

pub fn constant<Real: FloatExt>(value: Real) -> Expression<Real> {
    Expression::Constant(value)
}

/// Like [`constant`], but rejects NaN and infinities.
pub fn try_constant<Real: FloatExt>(value: Real) -> Result<Expression<Real>, ExpressionError> {
    if !value.is_finite() {
        return Err(ExpressionError::NonFiniteConstant(value.to_string()));
    }
    Ok(Expression::Constant(value))
}

pub fn variable<Real: FloatExt>() -> Expression<Real> {
    Expression::Variable
}

pub fn add<Real: FloatExt>(lhs: Expression<Real>, rhs: Expression<Real>) -> Expression<Real> {
    Expression::Add(Box::new(lhs), Box::new(rhs))
}

pub fn multiply<Real: FloatExt>(lhs: Expression<Real>, rhs: Expression<Real>) -> Expression<Real> {
    Expression::Multiply(Box::new(lhs), Box::new(rhs))
}

impl<Real: FloatExt> Expression<Real> {
    /// The value if this is a [`Expression::Constant`].
    pub fn as_constant(&self) -> Option<Real> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable)
    }

    /// The coefficient `c` if this expression has the exact shape `c * x`.
    ///
    /// `x * c` does not match.
    pub(crate) fn variable_coefficient(&self) -> Option<Real> {
        match self {
            Self::Multiply(lhs, rhs) => match (lhs.as_ref(), rhs.as_ref()) {
                (Self::Constant(c), Self::Variable) => Some(*c),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_constructors_take_ownership() {
        let product = multiply(constant(2.0), variable());
        let sum = add(variable(), product);
        match sum {
            Expression::Add(lhs, rhs) => {
                assert_eq!(*lhs, Expression::Variable);
                assert_eq!(
                    *rhs,
                    Expression::Multiply(
                        Box::new(Expression::Constant(2.0)),
                        Box::new(Expression::Variable)
                    )
                );
            }
            other => panic!("Expected Add, got {other:?}"),
        }
    }

    #[test]
    fn try_constant_rejects_non_finite() {
        assert_eq!(try_constant(1.5).unwrap(), constant(1.5));
        assert!(matches!(
            try_constant(f64::NAN),
            Err(ExpressionError::NonFiniteConstant(_))
        ));
        assert!(try_constant(f64::INFINITY).is_err());
        assert!(try_constant(f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn constant_accepts_non_finite() {
        assert!(constant(f64::NAN).as_constant().unwrap().is_nan());
        assert_eq!(constant(f64::INFINITY).as_constant(), Some(f64::INFINITY));
    }

    #[test]
    fn variable_coefficient_requires_constant_on_left() {
        assert_eq!(
            multiply(constant(4.0), variable()).variable_coefficient(),
            Some(4.0)
        );
        assert_eq!(
            multiply(variable(), constant(4.0)).variable_coefficient(),
            None
        );
        assert_eq!(variable::<f64>().variable_coefficient(), None);
        assert!(variable::<f64>().is_variable());
    }
}
