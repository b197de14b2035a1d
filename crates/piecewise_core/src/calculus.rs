//! Finite-difference derivative and composite trapezoidal quadrature.

use crate::traits::RealFunction;

/// Central difference `(f(x+h) - f(x-h)) / 2h`.
///
/// No validation is performed: `h` close to zero or a stencil straddling a
/// breakpoint gives a meaningless (possibly infinite) result. See
/// [`crate::validation::resolve_derivative_step`].
pub fn derivative(function: &impl RealFunction<f64>, x: f64, h: f64) -> f64 {
    (function.value(x + h) - function.value(x - h)) / (2.0 * h)
}

/// Composite trapezoidal rule over `[a, b]` with `n` equal subintervals.
/// Returns `0.0` when `n <= 0`.
pub fn integrate(function: &impl RealFunction<f64>, a: f64, b: f64, n: i64) -> f64 {
    if n <= 0 {
        return 0.0;
    }

    let h = (b - a) / n as f64;
    let mut sum = 0.5 * (function.value(a) + function.value(b));
    for i in 1..n {
        sum += function.value(a + i as f64 * h);
    }
    sum * h
}
