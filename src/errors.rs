//! Error types produced while specifying, solving or analysing catenary spans.

use serde::Serialize;
use thiserror::Error;

/// Error returned when a span specification is rejected.
///
/// Both measurements must be strictly positive, finite numbers. The variants
/// carry the offending value so callers can present actionable feedback to
/// users.
///
/// # Examples
///
/// ```
/// use catenx::{SpanError, SpanSpec};
///
/// let error = SpanSpec::new(-5.0, 3.0).expect_err("negative span is rejected");
/// assert_eq!(error, SpanError::InvalidSpan { span: -5.0 });
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum SpanError {
    /// Returned when the horizontal span is not a positive, finite number.
    #[error("span must be positive and finite (received {span})")]
    InvalidSpan {
        /// Rejected span in metres.
        span: f64,
    },
    /// Returned when the sag depth is not a positive, finite number.
    #[error("sag depth must be positive and finite (received {sag})")]
    InvalidSag {
        /// Rejected sag depth in metres.
        sag: f64,
    },
}

/// Error returned when the shape solver fails to produce a usable parameter.
#[derive(Clone, Copy, Debug, Error, PartialEq, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum SolveError {
    /// Returned when the root-finding iteration exhausts its budget or stalls
    /// away from a root.
    #[error("root finding did not converge within {iterations} iterations (last residual {residual})")]
    NonConvergent {
        /// Iterations performed before giving up.
        iterations: usize,
        /// Residual of the governing equation at the last iterate.
        residual: f64,
    },
    /// Returned when the iteration converges to a non-physical parameter.
    #[error("shape parameter must be positive and finite (received {parameter})")]
    InvalidParameter {
        /// Rejected shape parameter in metres.
        parameter: f64,
    },
}

/// Error returned when numerical quadrature cannot produce a finite value.
#[derive(Clone, Copy, Debug, Error, PartialEq, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum QuadratureError {
    /// Returned when the integrand evaluates to a non-finite value.
    #[error("integrand produced a non-finite value at x = {x}")]
    NonFiniteSample {
        /// Abscissa at which the integrand failed.
        x: f64,
    },
    /// Returned when the accumulated estimate is not finite.
    #[error("quadrature accumulated a non-finite estimate")]
    NonFiniteEstimate,
}

/// Error returned when a catenary analysis fails.
///
/// This is the single failure type crossing the boundary to the presentation
/// layer; each variant preserves the component error so the caller can react
/// to the precise failure kind.
#[derive(Clone, Copy, Debug, Error, PartialEq, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum AnalysisError {
    /// Returned when the supplied span specification is invalid.
    #[error("{0}")]
    InvalidSpan(#[from] SpanError),
    /// Returned when the shape solver fails.
    #[error("{0}")]
    Solve(#[from] SolveError),
    /// Returned when one of the quantity integrals fails.
    #[error("integration of the {quantity} failed: {source}")]
    Integration {
        /// Name of the quantity being integrated.
        quantity: &'static str,
        /// Underlying quadrature failure.
        #[source]
        source: QuadratureError,
    },
}
