//! Value types describing a catenary span and its solved shape.

use nalgebra::Vector2;
use serde::Serialize;

use crate::errors::{SolveError, SpanError};

/// Validated measurements of a hanging cable span.
///
/// The span is the horizontal distance `D` between the two supports and the
/// sag is the vertical drop `H` of the midpoint below them. Construction
/// rejects anything that is not strictly positive and finite, so every
/// `SpanSpec` handed to the solver is already known to be physical.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpanSpec {
    /// Horizontal distance between the supports in metres.
    span: f64,
    /// Vertical drop of the midpoint below the supports in metres.
    sag: f64,
}

impl SpanSpec {
    /// Create a validated span specification.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::InvalidSpan`] or [`SpanError::InvalidSag`] when
    /// the corresponding measurement is not a strictly positive, finite
    /// number.
    ///
    /// # Examples
    /// ```
    /// use catenx::SpanSpec;
    ///
    /// let spec = SpanSpec::new(120.0, 12.0).expect("valid span");
    /// assert_eq!(spec.half_span(), 60.0);
    /// ```
    pub fn new(span: f64, sag: f64) -> Result<Self, SpanError> {
        if !span.is_finite() || span <= 0.0 {
            return Err(SpanError::InvalidSpan { span });
        }
        if !sag.is_finite() || sag <= 0.0 {
            return Err(SpanError::InvalidSag { sag });
        }
        Ok(Self { span, sag })
    }

    /// Horizontal span `D` in metres.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.span
    }

    /// Sag depth `H` in metres.
    #[must_use]
    pub fn sag(&self) -> f64 {
        self.sag
    }

    /// Half-span `x0 = D / 2`, the bound for both solving and integration.
    #[must_use]
    pub fn half_span(&self) -> f64 {
        self.span / 2.0
    }
}

/// Solved catenary shape parameter `a`.
///
/// Larger values correspond to flatter curves. A parameter can only be
/// obtained through [`CatenaryParameter::try_new`], which enforces the
/// physical validity gate independently of how the solver converged.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CatenaryParameter(f64);

impl CatenaryParameter {
    /// Validate a solver candidate.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidParameter`] when `parameter` is not a
    /// strictly positive, finite number. The governing equation admits no
    /// physically meaningful catenary for such values, so they are a solve
    /// failure rather than a result.
    pub fn try_new(parameter: f64) -> Result<Self, SolveError> {
        if parameter.is_finite() && parameter > 0.0 {
            Ok(Self(parameter))
        } else {
            Err(SolveError::InvalidParameter { parameter })
        }
    }

    /// The raw parameter value in metres.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Derive the pure shape functions owned by this parameter.
    #[must_use]
    pub fn shape(&self) -> CatenaryShape {
        CatenaryShape { parameter: self.0 }
    }
}

/// Pure shape functions of a solved catenary.
///
/// The shape carries no mutable state and is safe to share freely; it exists
/// only as a view derived from a validated [`CatenaryParameter`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CatenaryShape {
    /// Shape parameter `a` in metres.
    parameter: f64,
}

impl CatenaryShape {
    /// Height of the curve at `x`, `a * cosh(x / a)`.
    #[must_use]
    pub fn height(&self, x: f64) -> f64 {
        self.parameter * (x / self.parameter).cosh()
    }

    /// Slope of the curve at `x`, `sinh(x / a)`.
    #[must_use]
    pub fn slope(&self, x: f64) -> f64 {
        (x / self.parameter).sinh()
    }

    /// Unit tangent at `x`, the direction of the cable tension.
    ///
    /// # Examples
    /// ```
    /// use catenx::CatenaryParameter;
    ///
    /// let shape = CatenaryParameter::try_new(100.0).expect("valid parameter").shape();
    /// let tangent = shape.unit_tangent(0.0);
    /// // The tangent is horizontal at the vertex.
    /// assert_eq!(tangent.y, 0.0);
    /// ```
    #[must_use]
    pub fn unit_tangent(&self, x: f64) -> UnitTangent {
        let slope = self.slope(x);
        let norm = slope.hypot(1.0);
        UnitTangent::new(1.0 / norm, slope / norm)
    }

    /// Sample every shape quantity at a single abscissa.
    #[must_use]
    pub fn sample(&self, x: f64) -> ShapeSample {
        ShapeSample {
            x,
            height: self.height(x),
            slope: self.slope(x),
            tangent: self.unit_tangent(x),
        }
    }

    /// Uniformly spaced samples across `[-half_span, half_span]`.
    ///
    /// The presentation layer chooses its own plotting resolution through
    /// `count`; a count of one yields the single vertex sample.
    #[must_use]
    pub fn sample_uniform(&self, half_span: f64, count: usize) -> Vec<ShapeSample> {
        match count {
            0 => Vec::new(),
            1 => vec![self.sample(0.0)],
            _ => {
                let step = 2.0 * half_span / (count - 1) as f64;
                (0..count)
                    .map(|index| self.sample(-half_span + index as f64 * step))
                    .collect()
            }
        }
    }
}

/// Unit vector giving the local tension direction along the curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct UnitTangent {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl UnitTangent {
    /// Create a [`UnitTangent`] with explicit components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert the tangent into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for UnitTangent {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<UnitTangent> for Vector2<f64> {
    fn from(value: UnitTangent) -> Self {
        value.to_vector()
    }
}

/// One point of the curve prepared for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShapeSample {
    /// Abscissa in metres, measured from the midpoint of the span.
    pub x: f64,
    /// Curve height in metres.
    pub height: f64,
    /// Curve slope at the sample.
    pub slope: f64,
    /// Unit tension direction at the sample.
    pub tangent: UnitTangent,
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn span_spec_rejects_non_physical_measurements() {
        assert_eq!(
            SpanSpec::new(0.0, 1.0).expect_err("zero span rejected"),
            SpanError::InvalidSpan { span: 0.0 }
        );
        assert_eq!(
            SpanSpec::new(10.0, -2.0).expect_err("negative sag rejected"),
            SpanError::InvalidSag { sag: -2.0 }
        );
        assert!(matches!(
            SpanSpec::new(f64::NAN, 1.0).expect_err("NaN span rejected"),
            SpanError::InvalidSpan { .. }
        ));
        assert!(matches!(
            SpanSpec::new(10.0, f64::INFINITY).expect_err("infinite sag rejected"),
            SpanError::InvalidSag { .. }
        ));
    }

    #[test]
    fn parameter_gate_rejects_non_physical_candidates() {
        assert_eq!(
            CatenaryParameter::try_new(-1.0).expect_err("negative parameter rejected"),
            SolveError::InvalidParameter { parameter: -1.0 }
        );
        assert!(matches!(
            CatenaryParameter::try_new(f64::NAN).expect_err("NaN parameter rejected"),
            SolveError::InvalidParameter { .. }
        ));
        assert!(matches!(
            CatenaryParameter::try_new(f64::INFINITY).expect_err("infinite parameter rejected"),
            SolveError::InvalidParameter { .. }
        ));
        assert!(CatenaryParameter::try_new(100.0).is_ok());
    }

    #[test]
    fn shape_is_symmetric_about_the_vertex() {
        let shape = CatenaryParameter::try_new(50.0)
            .expect("valid parameter")
            .shape();
        for x in [0.5, 3.0, 12.5, 25.0] {
            assert_relative_eq!(shape.height(x), shape.height(-x), max_relative = 1.0e-12);
            assert_relative_eq!(shape.slope(x), -shape.slope(-x), max_relative = 1.0e-12);
        }
    }

    #[test]
    fn tangent_is_normalized() {
        let shape = CatenaryParameter::try_new(80.0)
            .expect("valid parameter")
            .shape();
        for x in [-40.0, -7.0, 0.0, 13.0, 40.0] {
            let tangent = shape.unit_tangent(x);
            assert_relative_eq!(tangent.to_vector().norm(), 1.0, max_relative = 1.0e-12);
        }
    }

    #[test]
    fn tangent_to_vector_roundtrip() {
        let tangent = UnitTangent::new(0.8, 0.6);
        let vector: Vector2<f64> = tangent.into();
        assert_eq!(vector, Vector2::new(0.8, 0.6));
        assert_eq!(UnitTangent::from(vector), tangent);
    }

    #[test]
    fn uniform_sampling_spans_the_interval() {
        let shape = CatenaryParameter::try_new(100.0)
            .expect("valid parameter")
            .shape();
        let samples = shape.sample_uniform(60.0, 301);
        assert_eq!(samples.len(), 301);
        assert_relative_eq!(samples[0].x, -60.0, max_relative = 1.0e-12);
        assert_relative_eq!(samples[300].x, 60.0, max_relative = 1.0e-12);
        // The vertex sits at the centre sample with the minimum height.
        assert_relative_eq!(samples[150].x, 0.0, epsilon = 1.0e-9);
        assert!(samples.iter().all(|s| s.height >= samples[150].height));

        assert!(shape.sample_uniform(60.0, 0).is_empty());
        assert_eq!(shape.sample_uniform(60.0, 1)[0].x, 0.0);
    }
}
