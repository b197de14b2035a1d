use crate::settings::NumericSettings;
use crate::traits::RealFunction;
use tracing::debug;

/// Finds solutions of `f(x) = y_target` on `[start, end]`.
///
/// The interval is walked in `step`-sized brackets (the last one clipped to
/// `end`). Every bracket with `g(current) * g(next) <= 0`, where
/// `g(x) = f(x) - y_target`, is refined by bisection. Roots come back in
/// scan order and at most `max_roots` of them are returned.
///
/// Two crossings inside one bracket cancel out and are missed. A root sitting
/// exactly on a shared bracket boundary may be reported twice.
pub fn find_roots(
    function: &impl RealFunction<f64>,
    y_target: f64,
    start: f64,
    end: f64,
    step: f64,
    max_roots: usize,
    settings: &NumericSettings,
) -> Vec<f64> {
    let mut roots = Vec::new();
    if !(step > 0.0) || !step.is_finite() {
        return roots;
    }

    let g = |x: f64| function.value(x) - y_target;
    let mut current = start;
    let mut brackets = 0usize;

    while current < end && roots.len() < max_roots {
        let next = (current + step).min(end);
        if next <= current {
            // step is below the spacing of floats around `current`
            break;
        }
        brackets += 1;

        let g_current = g(current);
        let g_next = g(next);
        if g_current * g_next <= 0.0 {
            if let Some(root) = bisect(&g, current, next, g_current, settings) {
                roots.push(root);
            }
        }

        current = next;
    }

    debug!(
        y_target,
        start,
        end,
        step,
        brackets,
        found = roots.len(),
        "root scan finished"
    );
    roots
}

/// Refines the bracket `[a, b]` whose left residual is `g_a`.
/// Returns `None` when the iteration cap runs out first.
fn bisect(
    g: &impl Fn(f64) -> f64,
    mut a: f64,
    mut b: f64,
    mut g_a: f64,
    settings: &NumericSettings,
) -> Option<f64> {
    for _ in 0..settings.max_root_iterations {
        let mid = 0.5 * (a + b);
        let g_mid = g(mid);

        if g_mid.abs() < settings.epsilon || (b - a) < settings.epsilon {
            return Some(mid);
        }

        if g_a * g_mid <= 0.0 {
            b = mid;
        } else {
            a = mid;
            g_a = g_mid;
        }
    }
    None
}
