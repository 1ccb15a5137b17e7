//! Single-variable symbolic expressions.
//!
//! An [`Expression`] is an immutable tree of constants, the variable `x`,
//! sums and products. Three transformations are provided: numeric evaluation
//! ([`Expression::evaluate`], or [`Expression::evaluate_many`] over a vector of
//! samples), symbolic differentiation ([`Expression::derivative`]) and a
//! rule-based simplification pass ([`Expression::simplify`]).
//!
//! Differentiation does not simplify its output; the two passes are
//! independent and are usually chained.
//!
//! # Example
//!
//! ```rust
//! use univar_expr::*;
//!
//! // f(x) = x + 2x
//! let f = add(variable(), multiply(constant(2.0), variable()));
//! assert_eq!(f.to_string(), "(x + (2 * x))");
//!
//! let df = f.derivative();
//! assert_eq!(df.to_string(), "(1 + ((0 * x) + (2 * 1)))");
//! assert_eq!(df.simplify().to_string(), "3");
//!
//! let xs = [1.0, 2.0, 3.0];
//! let mut registers = Registers::new(xs.len());
//! assert_eq!(&f.evaluate_many(&xs, &mut registers), &[3.0, 6.0, 9.0]);
//! ```

mod derivative;
mod display;
mod error;
mod evaluate;
mod expression;
mod simplify;

pub use error::ExpressionError;
pub use evaluate::*;
pub use expression::*;

pub trait FloatExt:
    num_traits::Float + std::fmt::Display + std::fmt::Debug + Send + Sync
{
}
impl FloatExt for f32 {}
impl FloatExt for f64 {}
