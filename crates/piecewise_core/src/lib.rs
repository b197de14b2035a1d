pub mod analyzer;
pub mod calculus;
pub mod extrema;
pub mod function;
pub mod roots;
pub mod settings;
pub mod tabulate;
/// The `piecewise_core` crate is the numerical engine behind the Piecewise toolkit.
/// It studies one fixed piecewise real function with deliberately simple
/// fixed-step methods.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `RealFunction` (anything
///   evaluable at a point).
/// - **Function**: the piecewise target function, generic over `Scalar`.
/// - **Calculus**: central-difference derivative and composite trapezoidal integral.
/// - **Roots / Extrema**: fixed-step bracketing scans refined by bisection or
///   derivative sign changes.
/// - **Validation**: checks a front end applies to user input before calling the engine.
/// - **Settings**: shared tolerances, validated once when a front end is built.
pub mod traits;
pub mod validation;

pub use analyzer::Analyzer;
pub use settings::{NumericSettings, DEFAULT_MAX_ROOTS};
