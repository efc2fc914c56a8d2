#![warn(clippy::all)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod analysis;
mod errors;
mod geometry;
mod quadrature;
mod report;
mod solver;

pub use analysis::{analyze, CatenarySolution, PhysicalQuantities, GRAVITY, LINEAR_DENSITY};
pub use errors::{AnalysisError, QuadratureError, SolveError, SpanError};
pub use geometry::{CatenaryParameter, CatenaryShape, ShapeSample, SpanSpec, UnitTangent};
pub use report::{render_json, render_summary};
pub use solver::solve;
