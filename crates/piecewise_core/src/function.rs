use crate::settings::NumericSettings;
use crate::traits::{lit, RealFunction, Scalar};

/// Number of terms kept from the series used on `x >= 0`.
const SERIES_TERMS: i32 = 5;

/// The toolkit's target function:
///
/// ```text
///         sin(2x) / x                          x < -0.5
/// f(x) =  exp(1 / x)                           -0.5 <= x < 0
///         sum_{n=0}^{4} (-1)^n x^(2n) / sqrt(n! + 1)   x >= 0
/// ```
///
/// The branches do not join continuously at `-0.5` or `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiecewiseFunction {
    epsilon: f64,
}

impl PiecewiseFunction {
    pub fn new(settings: &NumericSettings) -> Self {
        Self {
            epsilon: settings.epsilon,
        }
    }

    fn oscillating_branch<T: Scalar>(&self, x: T) -> T {
        // Unreachable below -0.5; kept as the removable-singularity value.
        if x.abs() < lit(self.epsilon) {
            return lit(2.0);
        }
        (lit::<T>(2.0) * x).sin() / x
    }

    fn exponential_branch<T: Scalar>(&self, x: T) -> T {
        if x.abs() < lit(self.epsilon) {
            return T::zero();
        }
        x.recip().exp()
    }

    fn series_branch<T: Scalar>(&self, x: T) -> T {
        let x_squared = x * x;
        let mut power = T::one();
        let mut factorial = 1.0_f64;
        let mut result = T::zero();
        for n in 0..SERIES_TERMS {
            if n > 0 {
                factorial *= f64::from(n);
                power = power * x_squared;
            }
            // +1 keeps the denominator away from zero.
            let denominator = lit::<T>(factorial + 1.0).sqrt();
            let term = power / denominator;
            result = if n % 2 == 0 { result + term } else { result - term };
        }
        result
    }
}

impl Default for PiecewiseFunction {
    fn default() -> Self {
        Self::new(&NumericSettings::default())
    }
}

impl<T: Scalar> RealFunction<T> for PiecewiseFunction {
    fn value(&self, x: T) -> T {
        let lower = lit::<T>(-0.5);
        if x < lower {
            self.oscillating_branch(x)
        } else if x < T::zero() {
            self.exponential_branch(x)
        } else {
            self.series_branch(x)
        }
    }

    fn breakpoints(&self) -> Vec<T> {
        vec![lit(-0.5), T::zero()]
    }
}

/// Evaluates the default [`PiecewiseFunction`] at `x`.
pub fn evaluate(x: f64) -> f64 {
    PiecewiseFunction::default().value(x)
}

#[cfg(test)]
mod tests {
    use super::{evaluate, PiecewiseFunction};
    use crate::settings::NumericSettings;
    use crate::traits::RealFunction;

    fn series_reference(x: f64) -> f64 {
        let factorials = [1.0_f64, 1.0, 2.0, 6.0, 24.0];
        factorials
            .iter()
            .enumerate()
            .map(|(n, f)| (-1.0_f64).powi(n as i32) * x.powi(2 * n as i32) / (f + 1.0).sqrt())
            .sum()
    }

    #[test]
    fn oscillating_branch_matches_sin_ratio() {
        let expected = (-2.0_f64).sin() / -1.0;
        assert!((evaluate(-1.0) - expected).abs() < 1e-15);
        let expected = (-6.0_f64).sin() / -3.0;
        assert!((evaluate(-3.0) - expected).abs() < 1e-15);
    }

    #[test]
    fn exponential_branch_matches_exp_of_reciprocal() {
        assert!((evaluate(-0.25) - (-4.0_f64).exp()).abs() < 1e-15);
        assert!((evaluate(-0.5) - (-2.0_f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn exponential_branch_guards_values_next_to_zero() {
        assert_eq!(evaluate(-1e-12), 0.0);
        // Just outside the guard the exponential underflows on its own.
        assert_eq!(evaluate(-1e-3), 0.0);
    }

    #[test]
    fn series_branch_at_zero_keeps_only_constant_term() {
        assert!((evaluate(0.0) - series_reference(0.0)).abs() < 1e-15);
        assert!((evaluate(0.0) - 0.5_f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn series_branch_alternates_signs() {
        for &x in &[0.3_f64, 0.7, 1.5] {
            assert!((evaluate(x) - series_reference(x)).abs() < 1e-12, "mismatch at {x}");
        }
    }

    #[test]
    fn branches_are_not_continuous_at_breakpoints() {
        let below_half = evaluate(-0.5 - 1e-9);
        let at_half = evaluate(-0.5);
        assert!((below_half - at_half).abs() > 1.0);

        let below_zero = evaluate(-1e-9);
        let at_zero = evaluate(0.0);
        assert!((below_zero - at_zero).abs() > 0.5);
    }

    #[test]
    fn evaluation_is_generic_over_scalar() {
        let function = PiecewiseFunction::default();
        for &x in &[-2.0_f64, -0.3, 0.0, 0.8] {
            let wide: f64 = function.value(x);
            let narrow: f32 = function.value(x as f32);
            assert!((wide - narrow as f64).abs() < 1e-5, "mismatch at {x}");
        }
    }

    #[test]
    fn breakpoints_are_branch_boundaries() {
        let function = PiecewiseFunction::new(&NumericSettings::default());
        let points: Vec<f64> = function.breakpoints();
        assert_eq!(points, vec![-0.5, 0.0]);
    }

    #[test]
    fn evaluation_is_repeatable() {
        for &x in &[-1.7, -0.5, -0.1, 0.0, 1.3] {
            assert_eq!(evaluate(x).to_bits(), evaluate(x).to_bits());
        }
    }
}
