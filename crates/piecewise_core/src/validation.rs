//! Input checks a front end runs before handing user values to the
//! numerical routines. The routines themselves assume these hold.

use crate::settings::NumericSettings;
use crate::traits::RealFunction;
use anyhow::{anyhow, bail, Result};
use tracing::{info, warn};

pub fn require_finite(value: f64, name: &str) -> Result<f64> {
    if !value.is_finite() {
        bail!("{name} must be a finite number.");
    }
    Ok(value)
}

/// Orders the interval endpoints and rejects intervals narrower than
/// `settings.epsilon`.
pub fn normalize_interval(
    start: f64,
    end: f64,
    settings: &NumericSettings,
) -> Result<(f64, f64)> {
    require_finite(start, "Interval start")?;
    require_finite(end, "Interval end")?;

    let (start, end) = if start > end {
        info!(start, end, "interval endpoints swapped");
        (end, start)
    } else {
        (start, end)
    };

    if (end - start).abs() < settings.epsilon {
        bail!("Interval is too small: [{start}, {end}].");
    }
    Ok((start, end))
}

pub fn require_positive_count(value: i64, name: &str) -> Result<usize> {
    if value <= 0 {
        bail!("{name} must be a positive integer (got {value}).");
    }
    usize::try_from(value).map_err(|_| anyhow!("{name} is too large (got {value})."))
}

pub fn require_positive_step(step: f64, name: &str) -> Result<f64> {
    require_finite(step, name)?;
    if step <= 0.0 {
        bail!("{name} must be positive (got {step}).");
    }
    Ok(step)
}

/// Difference step chosen for a derivative estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivativeStep {
    pub step: f64,
    /// Set when the requested step was replaced, even if the fallback value
    /// happens to equal it.
    pub adjusted: bool,
}

/// Picks the difference step for a derivative at `x`.
///
/// Rejects `h` within `settings.epsilon` of zero. When either stencil point
/// `x ± h` falls within `settings.epsilon` of a breakpoint of `function`, the
/// step is replaced by `settings.derivative_fallback_step`.
pub fn resolve_derivative_step(
    function: &impl RealFunction<f64>,
    x: f64,
    h: f64,
    settings: &NumericSettings,
) -> Result<DerivativeStep> {
    require_finite(x, "Point x")?;
    require_finite(h, "Step h")?;
    if h.abs() < settings.epsilon {
        bail!("Step h is too small to estimate a derivative (got {h}).");
    }

    let touches_breakpoint = function.breakpoints().into_iter().any(|point| {
        (x + h - point).abs() < settings.epsilon || (x - h - point).abs() < settings.epsilon
    });
    if touches_breakpoint {
        let step = settings.derivative_fallback_step;
        warn!(x, requested = h, step, "derivative step adjusted away from breakpoint");
        return Ok(DerivativeStep {
            step,
            adjusted: true,
        });
    }
    Ok(DerivativeStep {
        step: h,
        adjusted: false,
    })
}
