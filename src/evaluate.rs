use crate::{Expression, FloatExt};

#[cfg(feature = "rayon")]
use rayon::prelude::{
    IndexedParallelIterator, IntoParallelRefIterator, ParallelExtend, ParallelIterator,
};

impl<Real: FloatExt> Expression<Real> {
    /// Calculates the value of the expression at `x`.
    pub fn evaluate(&self, x: Real) -> Real {
        match self {
            Self::Add(lhs, rhs) => lhs.evaluate(x) + rhs.evaluate(x),
            Self::Constant(value) => *value,
            Self::Multiply(lhs, rhs) => lhs.evaluate(x) * rhs.evaluate(x),
            Self::Variable => x,
        }
    }

    /// Calculates the results of the expression component-wise over every
    /// sample in `xs`.
    pub fn evaluate_many(&self, xs: &[Real], registers: &mut Registers<Real>) -> Vec<Real> {
        assert_eq!(xs.len(), registers.register_length);
        self.evaluate_recursive(xs, registers)
    }

    fn evaluate_recursive(&self, xs: &[Real], registers: &mut Registers<Real>) -> Vec<Real> {
        match self {
            Self::Add(lhs, rhs) => {
                evaluate_binary_op(|lhs, rhs| lhs + rhs, lhs, rhs, xs, registers)
            }
            Self::Constant(value) => {
                let mut output = registers.allocate();
                output.extend(std::iter::repeat(*value).take(registers.register_length));
                output
            }
            Self::Multiply(lhs, rhs) => {
                evaluate_binary_op(|lhs, rhs| lhs * rhs, lhs, rhs, xs, registers)
            }
            // Only taken if the entire expression is the identity map.
            Self::Variable => {
                let mut output = registers.allocate();
                output.extend_from_slice(xs);
                output
            }
        }
    }
}

fn evaluate_binary_op<Real: FloatExt>(
    op: fn(Real, Real) -> Real,
    lhs: &Expression<Real>,
    rhs: &Expression<Real>,
    xs: &[Real],
    registers: &mut Registers<Real>,
) -> Vec<Real> {
    // A bare variable operand reads the samples directly instead of copying.
    let lhs_reg = (!lhs.is_variable()).then(|| lhs.evaluate_recursive(xs, registers));
    let lhs_values = lhs_reg.as_deref().unwrap_or(xs);
    let rhs_reg = (!rhs.is_variable()).then(|| rhs.evaluate_recursive(xs, registers));
    let rhs_values = rhs_reg.as_deref().unwrap_or(xs);

    // Allocate this output register as lazily as possible.
    let mut output = registers.allocate();

    #[cfg(feature = "rayon")]
    {
        output.par_extend(
            lhs_values
                .par_iter()
                .zip(rhs_values.par_iter())
                .map(|(lhs, rhs)| op(*lhs, *rhs)),
        );
    }
    #[cfg(not(feature = "rayon"))]
    {
        output.extend(
            lhs_values
                .iter()
                .zip(rhs_values.iter())
                .map(|(lhs, rhs)| op(*lhs, *rhs)),
        );
    }

    if let Some(r) = lhs_reg {
        registers.recycle(r);
    }
    if let Some(r) = rhs_reg {
        registers.recycle(r);
    }
    output
}

/// Scratch space for vectorized evaluation. Can be reused across evaluations
/// with the same number of samples.
///
/// Attempts to minimize allocations by recycling registers after intermediate
/// calculations have finished.
pub struct Registers<Real = f64> {
    num_allocations: usize,
    registers: Vec<Vec<Real>>,
    register_length: usize,
}

impl<Real: FloatExt> Registers<Real> {
    pub fn new(register_length: usize) -> Self {
        Self {
            num_allocations: 0,
            registers: vec![],
            register_length,
        }
    }

    fn recycle(&mut self, mut used: Vec<Real>) {
        used.clear();
        self.registers.push(used);
    }

    fn allocate(&mut self) -> Vec<Real> {
        self.registers.pop().unwrap_or_else(|| {
            self.num_allocations += 1;
            log::debug!(
                "allocating register #{} of length {}",
                self.num_allocations,
                self.register_length
            );
            Vec::with_capacity(self.register_length)
        })
    }

    pub fn num_allocations(&self) -> usize {
        self.num_allocations
    }

    pub fn register_length(&self) -> usize {
        self.register_length
    }
}
