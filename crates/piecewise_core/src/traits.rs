use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars by the function evaluator.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A real function of one real variable.
///
/// Every numerical routine in this crate (derivative, quadrature, root and
/// extremum scans) evaluates its target through this trait.
pub trait RealFunction<T: Scalar> {
    /// Evaluates the function at `x`.
    fn value(&self, x: T) -> T;

    /// Points where the definition switches branches.
    /// Difference stencils straddling one of these are unreliable.
    fn breakpoints(&self) -> Vec<T> {
        Vec::new()
    }
}

impl<T: Scalar, F: Fn(T) -> T> RealFunction<T> for F {
    fn value(&self, x: T) -> T {
        self(x)
    }
}

/// Converts an f64 literal into the scalar type.
pub(crate) fn lit<T: Scalar>(value: f64) -> T {
    T::from_f64(value).unwrap_or_else(T::nan)
}
