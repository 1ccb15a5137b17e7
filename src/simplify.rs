use crate::{add, constant, multiply, variable, Expression, FloatExt};

use log::trace;

impl<Real: FloatExt> Expression<Real> {
    /// Rewrites the expression bottom-up: children are simplified first, then
    /// the first matching rule for the node is applied.
    ///
    /// This is not a normal form. Only these shapes are reduced:
    ///
    /// - constant folding of `a + b` and `a * b`
    /// - `e * 0`, `0 * e` to `0`, then `e * 1`, `1 * e` to `e`
    /// - `e + 0`, `0 + e` to `e`
    /// - `a*x + b*x`, `x + b*x` and `a*x + x` to a single `c * x`
    ///
    /// Like terms are only collected when the coefficient sits on the left of
    /// the product, so `x*2 + x*3` and `x + x` stay as they are.
    pub fn simplify(&self) -> Self {
        match self {
            Self::Add(lhs, rhs) => simplify_add(lhs.simplify(), rhs.simplify()),
            Self::Constant(value) => constant(*value),
            Self::Multiply(lhs, rhs) => simplify_multiply(lhs.simplify(), rhs.simplify()),
            Self::Variable => variable(),
        }
    }
}

fn simplify_multiply<Real: FloatExt>(
    lhs: Expression<Real>,
    rhs: Expression<Real>,
) -> Expression<Real> {
    use Expression::Constant;

    match (lhs, rhs) {
        (Constant(a), Constant(b)) => {
            trace!("fold {a} * {b}");
            constant(a * b)
        }
        (_, Constant(b)) if b.is_zero() => {
            trace!("e * 0 -> 0");
            constant(Real::zero())
        }
        (Constant(a), _) if a.is_zero() => {
            trace!("0 * e -> 0");
            constant(Real::zero())
        }
        (lhs, Constant(b)) if b.is_one() => {
            trace!("e * 1 -> e");
            lhs
        }
        (Constant(a), rhs) if a.is_one() => {
            trace!("1 * e -> e");
            rhs
        }
        (lhs, rhs) => multiply(lhs, rhs),
    }
}

fn simplify_add<Real: FloatExt>(
    lhs: Expression<Real>,
    rhs: Expression<Real>,
) -> Expression<Real> {
    use Expression::{Constant, Multiply, Variable};

    match (lhs, rhs) {
        (Constant(a), Constant(b)) => {
            trace!("fold {a} + {b}");
            constant(a + b)
        }
        (lhs, Constant(b)) if b.is_zero() => {
            trace!("e + 0 -> e");
            lhs
        }
        (Constant(a), rhs) if a.is_zero() => {
            trace!("0 + e -> e");
            rhs
        }
        (lhs, rhs) => {
            let collected = match (&lhs, &rhs) {
                (Multiply(..), Multiply(..)) => lhs
                    .variable_coefficient()
                    .zip(rhs.variable_coefficient())
                    .map(|(a, b)| a + b),
                (Variable, Multiply(..)) => rhs.variable_coefficient().map(|c| Real::one() + c),
                (Multiply(..), Variable) => lhs.variable_coefficient().map(|c| c + Real::one()),
                _ => None,
            };
            match collected {
                Some(coefficient) => {
                    trace!("collect like terms -> {coefficient} * x");
                    multiply(constant(coefficient), variable())
                }
                None => add(lhs, rhs),
            }
        }
    }
}
