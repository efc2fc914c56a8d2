//! Adaptive numerical quadrature for smooth integrands on finite intervals.

use crate::errors::QuadratureError;

/// Tolerance relative to the whole-interval estimate.
const RELATIVE_TOLERANCE: f64 = 1.0e-9;

/// Maximum subdivision depth before the current estimate is accepted.
const MAX_DEPTH: u32 = 32;

/// One Simpson panel: an interval with its sampled values and estimate.
#[derive(Clone, Copy)]
struct Panel {
    /// Lower bound of the interval.
    lower: f64,
    /// Upper bound of the interval.
    upper: f64,
    /// Integrand value at the lower bound.
    at_lower: f64,
    /// Integrand value at the interval midpoint.
    at_midpoint: f64,
    /// Integrand value at the upper bound.
    at_upper: f64,
    /// Simpson estimate for the interval.
    estimate: f64,
}

/// Integrate `integrand` over `[lower, upper]` with adaptive Simpson
/// quadrature.
///
/// Panels are bisected until the local estimate stabilises or the subdivision
/// budget runs out; the Richardson-corrected estimate is returned in either
/// case, so the computation always terminates.
///
/// # Errors
///
/// Returns [`QuadratureError::NonFiniteSample`] when the integrand produces a
/// non-finite value and [`QuadratureError::NonFiniteEstimate`] when the
/// accumulated integral is not finite.
pub fn integrate<F>(integrand: F, lower: f64, upper: f64) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    let evaluate = |x: f64| -> Result<f64, QuadratureError> {
        let value = integrand(x);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(QuadratureError::NonFiniteSample { x })
        }
    };

    let midpoint = 0.5 * (lower + upper);
    let at_lower = evaluate(lower)?;
    let at_midpoint = evaluate(midpoint)?;
    let at_upper = evaluate(upper)?;
    let estimate = simpson(at_lower, at_midpoint, at_upper, lower, upper);
    let tolerance = RELATIVE_TOLERANCE * estimate.abs().max(1.0);

    let panel = Panel {
        lower,
        upper,
        at_lower,
        at_midpoint,
        at_upper,
        estimate,
    };
    let total = subdivide(&evaluate, panel, tolerance, MAX_DEPTH)?;
    if total.is_finite() {
        Ok(total)
    } else {
        Err(QuadratureError::NonFiniteEstimate)
    }
}

/// Simpson's rule over a single interval.
fn simpson(at_lower: f64, at_midpoint: f64, at_upper: f64, lower: f64, upper: f64) -> f64 {
    (upper - lower) / 6.0 * (at_lower + 4.0 * at_midpoint + at_upper)
}

/// Bisect a panel and recurse until its estimate stabilises.
fn subdivide<E>(
    evaluate: &E,
    panel: Panel,
    tolerance: f64,
    depth: u32,
) -> Result<f64, QuadratureError>
where
    E: Fn(f64) -> Result<f64, QuadratureError>,
{
    let midpoint = 0.5 * (panel.lower + panel.upper);
    let left_midpoint = 0.5 * (panel.lower + midpoint);
    let right_midpoint = 0.5 * (midpoint + panel.upper);
    let at_left_midpoint = evaluate(left_midpoint)?;
    let at_right_midpoint = evaluate(right_midpoint)?;

    let left = Panel {
        lower: panel.lower,
        upper: midpoint,
        at_lower: panel.at_lower,
        at_midpoint: at_left_midpoint,
        at_upper: panel.at_midpoint,
        estimate: simpson(
            panel.at_lower,
            at_left_midpoint,
            panel.at_midpoint,
            panel.lower,
            midpoint,
        ),
    };
    let right = Panel {
        lower: midpoint,
        upper: panel.upper,
        at_lower: panel.at_midpoint,
        at_midpoint: at_right_midpoint,
        at_upper: panel.at_upper,
        estimate: simpson(
            panel.at_midpoint,
            at_right_midpoint,
            panel.at_upper,
            midpoint,
            panel.upper,
        ),
    };

    let correction = left.estimate + right.estimate - panel.estimate;
    if depth == 0 || correction.abs() <= 15.0 * tolerance {
        return Ok(left.estimate + right.estimate + correction / 15.0);
    }
    Ok(subdivide(evaluate, left, 0.5 * tolerance, depth - 1)?
        + subdivide(evaluate, right, 0.5 * tolerance, depth - 1)?)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn integrates_a_cubic_exactly() {
        // Simpson's rule is exact for cubics, so the estimate stabilises on
        // the first bisection.
        let integral = integrate(|x| x * x * x, 0.0, 1.0).expect("finite integrand");
        assert_relative_eq!(integral, 0.25, epsilon = 1.0e-12);
    }

    #[test]
    fn matches_the_closed_form_for_cosh() {
        let integral = integrate(f64::cosh, -1.0, 1.0).expect("finite integrand");
        assert_relative_eq!(integral, 2.0 * 1.0_f64.sinh(), max_relative = 1.0e-9);
    }

    #[test]
    fn reports_a_non_finite_integrand_sample() {
        let error = integrate(|x| 1.0 / x, -1.0, 1.0).expect_err("pole at the midpoint");
        assert_eq!(error, QuadratureError::NonFiniteSample { x: 0.0 });
    }
}
