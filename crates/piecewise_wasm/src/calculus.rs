//! Integral and derivative entry points.

use crate::toolkit::{serialize, to_js_error, WasmPiecewise};
use piecewise_core::validation::{
    normalize_interval, require_positive_count, resolve_derivative_step,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Serialize)]
pub(crate) struct IntegralPayload {
    pub a: f64,
    pub b: f64,
    pub subintervals: usize,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct DerivativePayload {
    pub x: f64,
    pub step: f64,
    pub step_adjusted: bool,
    pub derivative: f64,
    pub value: f64,
}

impl WasmPiecewise {
    pub(crate) fn integrate_payload(
        &self,
        a: f64,
        b: f64,
        n: i64,
    ) -> anyhow::Result<IntegralPayload> {
        let (a, b) = normalize_interval(a, b, self.settings())?;
        let subintervals = require_positive_count(n, "Number of subintervals")?;
        Ok(IntegralPayload {
            a,
            b,
            subintervals,
            value: self.analyzer.integrate(a, b, n),
        })
    }

    pub(crate) fn differentiate_payload(
        &self,
        x: f64,
        h: f64,
    ) -> anyhow::Result<DerivativePayload> {
        let resolved = resolve_derivative_step(self.analyzer.function(), x, h, self.settings())?;
        Ok(DerivativePayload {
            x,
            step: resolved.step,
            step_adjusted: resolved.adjusted,
            derivative: self.analyzer.differentiate(x, resolved.step),
            value: self.analyzer.evaluate(x),
        })
    }
}

#[wasm_bindgen]
impl WasmPiecewise {
    pub fn integrate(&self, a: f64, b: f64, n: i32) -> Result<JsValue, JsValue> {
        let payload = self
            .integrate_payload(a, b, i64::from(n))
            .map_err(to_js_error)?;
        serialize(&payload)
    }

    pub fn differentiate(&self, x: f64, h: f64) -> Result<JsValue, JsValue> {
        let payload = self.differentiate_payload(x, h).map_err(to_js_error)?;
        serialize(&payload)
    }
}

#[cfg(test)]
mod tests {
    use crate::toolkit::WasmPiecewise;
    use piecewise_core::NumericSettings;

    fn toolkit() -> WasmPiecewise {
        WasmPiecewise::from_settings(NumericSettings::default())
    }

    #[test]
    fn integrate_payload_normalizes_interval() {
        let forward = toolkit().integrate_payload(-2.0, -1.0, 100).expect("integral");
        let reversed = toolkit().integrate_payload(-1.0, -2.0, 100).expect("integral");
        assert_eq!((reversed.a, reversed.b), (-2.0, -1.0));
        assert_eq!(forward.value, reversed.value);
        assert_eq!(forward.subintervals, 100);
    }

    #[test]
    fn integrate_payload_rejects_non_positive_counts() {
        let err = toolkit()
            .integrate_payload(0.0, 1.0, -4)
            .expect_err("negative count should fail");
        assert!(err.to_string().contains("subintervals"));
    }

    #[test]
    fn differentiate_payload_keeps_regular_step() {
        let payload = toolkit().differentiate_payload(1.0, 1e-5).expect("derivative");
        assert_eq!(payload.step, 1e-5);
        assert!(!payload.step_adjusted);
    }

    #[test]
    fn differentiate_payload_adjusts_step_at_breakpoint() {
        let payload = toolkit().differentiate_payload(0.1, 0.1).expect("derivative");
        assert!(payload.step_adjusted);
        assert_eq!(payload.step, NumericSettings::default().derivative_fallback_step);
        // d/dx of the series at 0.1 = -2x/sqrt(2) + 4x^3/sqrt(3) - ...
        let expected = -2.0 * 0.1 / 2.0_f64.sqrt() + 4.0 * 0.001 / 3.0_f64.sqrt()
            - 6.0 * 1e-5 / 7.0_f64.sqrt()
            + 8.0 * 1e-7 / 5.0;
        assert!((payload.derivative - expected).abs() < 1e-8);
    }

    #[test]
    fn differentiate_payload_flags_fallback_sized_step_at_breakpoint() {
        let h = NumericSettings::default().derivative_fallback_step;
        let payload = toolkit().differentiate_payload(-h, h).expect("derivative");
        assert_eq!(payload.step, h);
        assert!(payload.step_adjusted);
    }

    #[test]
    fn differentiate_payload_rejects_zero_step() {
        let err = toolkit()
            .differentiate_payload(1.0, 0.0)
            .expect_err("zero step should fail");
        assert!(err.to_string().contains("too small"));
    }
}
