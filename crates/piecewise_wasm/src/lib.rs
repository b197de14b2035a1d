//! WASM bridge for `piecewise_core`.
//!
//! Validates user input the way the engine expects it, runs the requested
//! operation and hands back serde-serialized results for the UI to format.

mod calculus;
mod search;
mod toolkit;

pub use toolkit::WasmPiecewise;
