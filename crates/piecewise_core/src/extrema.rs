use crate::calculus::derivative;
use crate::settings::NumericSettings;
use crate::traits::RealFunction;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A point of the function's graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub value: f64,
}

/// A sample where the derivative appears to change sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalCandidate {
    pub x: f64,
    pub value: f64,
    pub derivative: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremumReport {
    pub global_min: Sample,
    pub global_max: Sample,
    pub local_candidates: Vec<LocalCandidate>,
}

impl ExtremumReport {
    pub fn candidate_count(&self) -> usize {
        self.local_candidates.len()
    }
}

/// Brute-force scan of `[start, end]` for global and local extrema.
///
/// Samples `x = start, start + step, ...` while `x <= end` (the offsets
/// accumulate, so the last sample can land slightly past `end`). Global
/// extrema keep the first sample attaining them. An interior sample is a
/// local candidate when the slopes one `step` to either side have opposite
/// signs and the slope at the sample is below
/// `settings.extremum_slope_tolerance` in magnitude.
///
/// A non-positive or non-finite `step` samples `start` only.
pub fn find_extrema(
    function: &impl RealFunction<f64>,
    start: f64,
    end: f64,
    step: f64,
    settings: &NumericSettings,
) -> ExtremumReport {
    let mut global_min = Sample {
        x: start,
        value: f64::INFINITY,
    };
    let mut global_max = Sample {
        x: start,
        value: f64::NEG_INFINITY,
    };
    let mut local_candidates = Vec::new();

    let advances = step > 0.0 && step.is_finite();
    let probe = settings.extremum_probe_step;
    let interior_low = start + step;
    let interior_high = end - step;
    let mut samples = 0usize;
    let mut x = start;

    while x <= end {
        let value = function.value(x);
        samples += 1;

        if value < global_min.value {
            global_min = Sample { x, value };
        }
        if value > global_max.value {
            global_max = Sample { x, value };
        }

        if x > interior_low && x < interior_high {
            let left = derivative(function, x - step, probe);
            let center = derivative(function, x, probe);
            let right = derivative(function, x + step, probe);
            if left * right < 0.0 && center.abs() < settings.extremum_slope_tolerance {
                local_candidates.push(LocalCandidate {
                    x,
                    value,
                    derivative: center,
                });
            }
        }

        if !advances {
            break;
        }
        let next = x + step;
        if next <= x {
            break;
        }
        x = next;
    }

    debug!(
        start,
        end,
        step,
        samples,
        candidates = local_candidates.len(),
        "extremum scan finished"
    );

    ExtremumReport {
        global_min,
        global_max,
        local_candidates,
    }
}
