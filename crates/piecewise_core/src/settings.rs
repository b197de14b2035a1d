use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Root cap used by the front end when the caller does not pick one.
pub const DEFAULT_MAX_ROOTS: usize = 100;

/// Tolerances and iteration caps shared by the numerical routines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericSettings {
    /// "Close to zero" threshold: branch guards, bisection termination,
    /// minimum interval width.
    pub epsilon: f64,
    /// Bisection iterations allowed per bracket.
    pub max_root_iterations: usize,
    /// Step substituted when a derivative stencil touches a breakpoint.
    pub derivative_fallback_step: f64,
    /// Difference step used by the extremum scan's slope probes.
    pub extremum_probe_step: f64,
    /// Largest |f'(x)| still accepted for a local-extremum candidate.
    pub extremum_slope_tolerance: f64,
}

impl Default for NumericSettings {
    fn default() -> Self {
        Self {
            epsilon: 1e-10,
            max_root_iterations: 100,
            derivative_fallback_step: 1e-6,
            extremum_probe_step: 1e-5,
            extremum_slope_tolerance: 0.1,
        }
    }
}

impl NumericSettings {
    /// Rejects settings that would turn derivative or scan results into NaN.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("epsilon", self.epsilon),
            ("derivative_fallback_step", self.derivative_fallback_step),
            ("extremum_probe_step", self.extremum_probe_step),
            ("extremum_slope_tolerance", self.extremum_slope_tolerance),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                bail!("{name} must be finite and positive (got {value}).");
            }
        }
        if self.max_root_iterations == 0 {
            bail!("max_root_iterations must be at least 1.");
        }
        Ok(())
    }
}
