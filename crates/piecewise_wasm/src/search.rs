//! Root and extremum searches.

use crate::toolkit::{serialize, to_js_error, WasmPiecewise};
use piecewise_core::extrema::{ExtremumReport, Sample};
use piecewise_core::validation::{normalize_interval, require_finite, require_positive_step};
use piecewise_core::DEFAULT_MAX_ROOTS;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Serialize)]
pub(crate) struct RootsPayload {
    pub y_target: f64,
    pub start: f64,
    pub end: f64,
    pub step: f64,
    pub roots: Vec<Sample>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExtremaPayload {
    pub start: f64,
    pub end: f64,
    pub step: f64,
    pub report: ExtremumReport,
}

impl WasmPiecewise {
    pub(crate) fn find_roots_payload(
        &self,
        y_target: f64,
        start: f64,
        end: f64,
        step: f64,
    ) -> anyhow::Result<RootsPayload> {
        let y_target = require_finite(y_target, "Target value")?;
        let (start, end) = normalize_interval(start, end, self.settings())?;
        let step = require_positive_step(step, "Search step")?;

        let roots = self
            .analyzer
            .find_roots(y_target, start, end, step, DEFAULT_MAX_ROOTS)
            .into_iter()
            .map(|x| Sample {
                x,
                value: self.analyzer.evaluate(x),
            })
            .collect();

        Ok(RootsPayload {
            y_target,
            start,
            end,
            step,
            roots,
        })
    }

    pub(crate) fn find_extrema_payload(
        &self,
        start: f64,
        end: f64,
        step: f64,
    ) -> anyhow::Result<ExtremaPayload> {
        let (start, end) = normalize_interval(start, end, self.settings())?;
        let step = require_positive_step(step, "Search step")?;
        Ok(ExtremaPayload {
            start,
            end,
            step,
            report: self.analyzer.find_extrema(start, end, step),
        })
    }
}

#[wasm_bindgen]
impl WasmPiecewise {
    /// Solves `f(x) = y_target` on `[start, end]`, keeping at most
    /// `DEFAULT_MAX_ROOTS` solutions.
    pub fn find_roots(
        &self,
        y_target: f64,
        start: f64,
        end: f64,
        step: f64,
    ) -> Result<JsValue, JsValue> {
        let payload = self
            .find_roots_payload(y_target, start, end, step)
            .map_err(to_js_error)?;
        serialize(&payload)
    }

    pub fn find_extrema(&self, start: f64, end: f64, step: f64) -> Result<JsValue, JsValue> {
        let payload = self
            .find_extrema_payload(start, end, step)
            .map_err(to_js_error)?;
        serialize(&payload)
    }
}

#[cfg(test)]
mod tests {
    use crate::toolkit::WasmPiecewise;
    use piecewise_core::{NumericSettings, DEFAULT_MAX_ROOTS};
    use std::f64::consts::FRAC_PI_2;

    fn toolkit() -> WasmPiecewise {
        WasmPiecewise::from_settings(NumericSettings::default())
    }

    #[test]
    fn roots_payload_reports_values_at_roots() {
        let payload = toolkit()
            .find_roots_payload(0.0, -1.0, -2.0, 0.1)
            .expect("roots");
        assert_eq!((payload.start, payload.end), (-2.0, -1.0));
        assert_eq!(payload.roots.len(), 1);
        assert!((payload.roots[0].x + FRAC_PI_2).abs() < 1e-9);
        assert!(payload.roots[0].value.abs() < 1e-9);
    }

    #[test]
    fn roots_payload_is_capped() {
        // sin(2x)/x crosses zero every pi/2 on the far left.
        let payload = toolkit()
            .find_roots_payload(0.0, -400.0, -1.0, 0.05)
            .expect("roots");
        assert_eq!(payload.roots.len(), DEFAULT_MAX_ROOTS);
    }

    #[test]
    fn roots_payload_rejects_bad_step() {
        let err = toolkit()
            .find_roots_payload(0.0, -1.0, 1.0, 0.0)
            .expect_err("zero step should fail");
        assert!(err.to_string().contains("Search step"));
    }

    #[test]
    fn extrema_payload_accepts_fractional_step() {
        let payload = toolkit()
            .find_extrema_payload(1.5, 0.5, 0.01)
            .expect("extrema");
        assert_eq!((payload.start, payload.end), (0.5, 1.5));
        assert!(payload.report.candidate_count() >= 1);
    }

    #[test]
    fn extrema_payload_rejects_degenerate_interval() {
        let err = toolkit()
            .find_extrema_payload(2.0, 2.0, 0.1)
            .expect_err("empty interval should fail");
        assert!(err.to_string().contains("too small"));
    }
}
