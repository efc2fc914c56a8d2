//! Root finding for the catenary shape parameter.
//!
//! The governing equation `a * cosh(x0 / a) - a = H` has no closed form for
//! `a`, so the parameter is found with a derivative-free secant iteration
//! seeded at the half-span. The iteration runs under a fixed budget and every
//! outcome passes the [`CatenaryParameter::try_new`] validity gate before it
//! is returned.

use crate::errors::SolveError;
use crate::geometry::{CatenaryParameter, SpanSpec};

/// Maximum number of secant iterations before giving up.
const MAX_ITERATIONS: usize = 64;

/// Residual tolerance, relative to the sag magnitude.
const RESIDUAL_TOLERANCE: f64 = 1.0e-9;

/// Step tolerance, relative to the iterate magnitude.
const STEP_TOLERANCE: f64 = 1.0e-9;

/// Relative offset seeding the second secant point.
const SEED_OFFSET: f64 = 1.0e-4;

/// Find the shape parameter `a` satisfying `a * cosh(x0 / a) - a = H`.
///
/// For a shallow sag the parameter is of the same order as the half-span, so
/// `x0 = D / 2` seeds the iteration. An iterate that would leave the physical
/// domain (`a <= 0`) is pulled back to half the current iterate instead, which
/// keeps the method local while preventing escape onto the rootless negative
/// branch.
///
/// # Errors
///
/// Returns [`SolveError::NonConvergent`] when the iteration exhausts its
/// budget or stalls away from a root, and [`SolveError::InvalidParameter`]
/// when the converged value fails the validity gate.
///
/// # Examples
/// ```
/// use catenx::{solve, SpanSpec};
///
/// let spec = SpanSpec::new(120.0, 12.0).expect("valid span");
/// let parameter = solve(&spec).expect("solve converges");
/// assert!(parameter.value() > 0.0);
/// ```
pub fn solve(spec: &SpanSpec) -> Result<CatenaryParameter, SolveError> {
    let half_span = spec.half_span();
    let sag = spec.sag();
    let residual = |a: f64| a * (half_span / a).cosh() - a - sag;
    // Residual evaluation bottoms out at the rounding noise of the
    // `a * cosh` product, so acceptance tracks that floor as well as the
    // sag scale; very flat spans cannot satisfy a fixed tolerance no matter
    // how close the iterate is to the root. The floor is capped at a small
    // fraction of the sag: far from the root the residual approaches `-H`
    // exactly and must never fall inside the accepted band.
    let tolerance_at = |a: f64| {
        let noise_floor = (8.0 * f64::EPSILON * a.abs()).min(0.01 * sag);
        (RESIDUAL_TOLERANCE * sag.max(1.0)).max(noise_floor)
    };

    let mut previous = half_span;
    let mut current = half_span * (1.0 + SEED_OFFSET);
    let mut previous_residual = residual(previous);
    let mut current_residual = residual(current);

    for iteration in 0..MAX_ITERATIONS {
        let denominator = current_residual - previous_residual;
        if denominator == 0.0 || !denominator.is_finite() {
            // A stalled denominator with the residual already inside
            // tolerance means the residual has hit f64 resolution.
            if current_residual.is_finite() && current_residual.abs() <= tolerance_at(current) {
                return CatenaryParameter::try_new(current);
            }
            return Err(SolveError::NonConvergent {
                iterations: iteration,
                residual: current_residual,
            });
        }

        let mut next = current - current_residual * (current - previous) / denominator;
        if !next.is_finite() {
            return Err(SolveError::NonConvergent {
                iterations: iteration,
                residual: current_residual,
            });
        }
        if next <= 0.0 {
            next = 0.5 * current;
        }

        let step = next - current;
        previous = current;
        previous_residual = current_residual;
        current = next;
        current_residual = residual(current);

        if current_residual.is_finite()
            && current_residual.abs() <= tolerance_at(current)
            && step.abs() <= STEP_TOLERANCE * current.abs().max(1.0)
        {
            return CatenaryParameter::try_new(current);
        }
    }

    Err(SolveError::NonConvergent {
        iterations: MAX_ITERATIONS,
        residual: current_residual,
    })
}
