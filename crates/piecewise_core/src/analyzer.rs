use crate::calculus::{derivative, integrate};
use crate::extrema::{find_extrema, ExtremumReport, Sample};
use crate::function::PiecewiseFunction;
use crate::roots::find_roots;
use crate::settings::NumericSettings;
use crate::tabulate::tabulate;
use crate::traits::RealFunction;

/// The toolkit's operations bound to one function and one set of tolerances.
///
/// Holds no mutable state: repeated calls with equal inputs give equal
/// outputs.
#[derive(Debug, Clone)]
pub struct Analyzer<F = PiecewiseFunction> {
    function: F,
    settings: NumericSettings,
}

impl Analyzer<PiecewiseFunction> {
    pub fn new(settings: NumericSettings) -> Self {
        Self {
            function: PiecewiseFunction::new(&settings),
            settings,
        }
    }
}

impl Default for Analyzer<PiecewiseFunction> {
    fn default() -> Self {
        Self::new(NumericSettings::default())
    }
}

impl<F: RealFunction<f64>> Analyzer<F> {
    pub fn with_function(function: F, settings: NumericSettings) -> Self {
        Self { function, settings }
    }

    pub fn function(&self) -> &F {
        &self.function
    }

    pub fn settings(&self) -> &NumericSettings {
        &self.settings
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.function.value(x)
    }

    pub fn differentiate(&self, x: f64, h: f64) -> f64 {
        derivative(&self.function, x, h)
    }

    pub fn integrate(&self, a: f64, b: f64, n: i64) -> f64 {
        integrate(&self.function, a, b, n)
    }

    pub fn find_roots(
        &self,
        y_target: f64,
        start: f64,
        end: f64,
        step: f64,
        max_roots: usize,
    ) -> Vec<f64> {
        find_roots(
            &self.function,
            y_target,
            start,
            end,
            step,
            max_roots,
            &self.settings,
        )
    }

    pub fn find_extrema(&self, start: f64, end: f64, step: f64) -> ExtremumReport {
        find_extrema(&self.function, start, end, step, &self.settings)
    }

    pub fn tabulate(&self, start: f64, end: f64, steps: usize) -> Vec<Sample> {
        tabulate(&self.function, start, end, steps)
    }
}
