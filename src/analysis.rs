//! Derived physical quantities for a solved catenary span.

use serde::Serialize;

use crate::errors::AnalysisError;
use crate::geometry::{CatenaryParameter, CatenaryShape, SpanSpec};
use crate::quadrature;
use crate::solver;

/// Gravitational acceleration in m/s².
pub const GRAVITY: f64 = 9.8;

/// Linear mass density of the cable in kg/m (unit-density convention: the
/// reported energy is per unit mass density, not for a specific material).
pub const LINEAR_DENSITY: f64 = 1.0;

/// Physical quantities integrated over the span.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PhysicalQuantities {
    /// Material length of the curve between its supports in metres.
    pub arc_length: f64,
    /// Gravitational potential energy at unit linear density, in joules.
    pub potential_energy: f64,
}

impl PhysicalQuantities {
    /// Copy of the quantities at the presentation precision of two decimal
    /// places.
    ///
    /// Internal computation keeps full precision; rounding belongs only at
    /// the boundary to the presentation layer.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            arc_length: round_to_hundredths(self.arc_length),
            potential_energy: round_to_hundredths(self.potential_energy),
        }
    }
}

/// Round a value to two decimal places.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Complete result of a catenary analysis.
///
/// The shape entry is a reusable set of sampling functions rather than a
/// precomputed table, so the presentation layer can sample the curve at any
/// resolution it chooses for plotting.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatenarySolution {
    /// The validated span the solution describes.
    pub spec: SpanSpec,
    /// The solved shape parameter.
    pub parameter: CatenaryParameter,
    /// Shape functions derived from the parameter.
    pub shape: CatenaryShape,
    /// Quantities integrated over the span, at full precision.
    pub quantities: PhysicalQuantities,
}

/// Solve the span and integrate its physical quantities.
///
/// This is the single synchronous boundary offered to the presentation
/// layer: one validated `(D, H)` specification in, one solution record out.
/// Each invocation is independent and side-effect-free.
///
/// # Errors
///
/// Returns [`AnalysisError::Solve`] when the shape solver fails and
/// [`AnalysisError::Integration`] when a quadrature cannot produce a finite
/// value.
///
/// # Examples
/// ```
/// use catenx::{analyze, SpanSpec};
///
/// let spec = SpanSpec::new(120.0, 12.0).expect("valid span");
/// let solution = analyze(spec).expect("analysis succeeds");
/// assert!(solution.quantities.arc_length > spec.span());
/// ```
pub fn analyze(spec: SpanSpec) -> Result<CatenarySolution, AnalysisError> {
    let parameter = solver::solve(&spec)?;
    let shape = parameter.shape();
    let half_span = spec.half_span();

    let arc_length = quadrature::integrate(|x| arc_density(&shape, x), -half_span, half_span)
        .map_err(|source| AnalysisError::Integration {
            quantity: "arc length",
            source,
        })?;
    let potential_energy =
        quadrature::integrate(|x| energy_density(&shape, x), -half_span, half_span).map_err(
            |source| AnalysisError::Integration {
                quantity: "potential energy",
                source,
            },
        )?;

    Ok(CatenarySolution {
        spec,
        parameter,
        shape,
        quantities: PhysicalQuantities {
            arc_length,
            potential_energy,
        },
    })
}

/// Arc-length density `sqrt(1 + slope(x)²)`.
fn arc_density(shape: &CatenaryShape, x: f64) -> f64 {
    shape.slope(x).hypot(1.0)
}

/// Potential-energy density `ρ · g · y(x) · sqrt(1 + slope(x)²)`.
fn energy_density(shape: &CatenaryShape, x: f64) -> f64 {
    LINEAR_DENSITY * GRAVITY * shape.height(x) * arc_density(shape, x)
}
