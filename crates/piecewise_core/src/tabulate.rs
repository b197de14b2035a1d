use crate::extrema::Sample;
use crate::traits::RealFunction;

/// Samples `steps + 1` equally spaced points from `start` to `end`.
/// An empty table is returned for `steps == 0`.
pub fn tabulate(
    function: &impl RealFunction<f64>,
    start: f64,
    end: f64,
    steps: usize,
) -> Vec<Sample> {
    if steps == 0 {
        return Vec::new();
    }
    let spacing = (end - start) / steps as f64;
    (0..=steps)
        .map(|i| {
            let x = start + i as f64 * spacing;
            Sample {
                x,
                value: function.value(x),
            }
        })
        .collect()
}
