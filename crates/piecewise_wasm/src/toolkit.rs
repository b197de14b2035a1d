//! Core WASM wrapper: construction, point evaluation and tables.

use piecewise_core::extrema::Sample;
use piecewise_core::validation::{normalize_interval, require_finite, require_positive_count};
use piecewise_core::{Analyzer, NumericSettings};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmPiecewise {
    pub(crate) analyzer: Analyzer,
}

#[derive(Debug, Serialize)]
pub(crate) struct TablePayload {
    pub start: f64,
    pub end: f64,
    pub steps: usize,
    pub rows: Vec<Sample>,
}

pub(crate) fn to_js_error(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}

pub(crate) fn serialize<T: Serialize>(payload: &T) -> Result<JsValue, JsValue> {
    to_value(payload).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

impl WasmPiecewise {
    pub(crate) fn from_settings(settings: NumericSettings) -> Self {
        Self {
            analyzer: Analyzer::new(settings),
        }
    }

    pub(crate) fn try_from_settings(settings: NumericSettings) -> anyhow::Result<Self> {
        settings.validate()?;
        Ok(Self::from_settings(settings))
    }

    pub(crate) fn settings(&self) -> &NumericSettings {
        self.analyzer.settings()
    }

    pub(crate) fn evaluate_payload(&self, x: f64) -> anyhow::Result<Sample> {
        let x = require_finite(x, "Point x")?;
        Ok(Sample {
            x,
            value: self.analyzer.evaluate(x),
        })
    }

    pub(crate) fn tabulate_payload(
        &self,
        start: f64,
        end: f64,
        steps: i64,
    ) -> anyhow::Result<TablePayload> {
        let (start, end) = normalize_interval(start, end, self.settings())?;
        let steps = require_positive_count(steps, "Number of steps")?;
        Ok(TablePayload {
            start,
            end,
            steps,
            rows: self.analyzer.tabulate(start, end, steps),
        })
    }
}

#[wasm_bindgen]
impl WasmPiecewise {
    /// `settings` may be `undefined`/`null` for the default tolerances.
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue) -> Result<WasmPiecewise, JsValue> {
        console_error_panic_hook::set_once();

        let settings = if settings.is_undefined() || settings.is_null() {
            NumericSettings::default()
        } else {
            from_value::<NumericSettings>(settings)
                .map_err(|e| JsValue::from_str(&format!("Invalid settings: {}", e)))?
        };

        Self::try_from_settings(settings).map_err(to_js_error)
    }

    pub fn evaluate(&self, x: f64) -> Result<JsValue, JsValue> {
        let payload = self.evaluate_payload(x).map_err(to_js_error)?;
        serialize(&payload)
    }

    pub fn tabulate(&self, start: f64, end: f64, steps: i32) -> Result<JsValue, JsValue> {
        let payload = self
            .tabulate_payload(start, end, i64::from(steps))
            .map_err(to_js_error)?;
        serialize(&payload)
    }
}
