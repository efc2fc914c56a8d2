//! Presentation-boundary rendering of analysis results.

use std::fmt::Write;

use crate::analysis::CatenarySolution;

/// Render a textual summary of a catenary analysis.
///
/// The formatted report walks through the key numbers so readers can
/// cross-check the output with references such as
/// <https://en.wikipedia.org/wiki/Catenary>. Values are rounded to two
/// decimal places here; the solution record itself keeps full precision.
#[must_use]
pub fn render_summary(solution: &CatenarySolution) -> String {
    let mut output = String::new();
    let quantities = solution.quantities.rounded();

    // Lead with the inputs so the reader knows which span the numbers
    // describe before we dive into them.
    writeln!(
        &mut output,
        "Catenary analysis (span D = {:.2} m, sag H = {:.2} m)",
        solution.spec.span(),
        solution.spec.sag()
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Shape parameter: a = {:.2} m",
        solution.parameter.value()
    )
    .expect("writing to string cannot fail");

    writeln!(&mut output, "Material length: {:.2} m", quantities.arc_length)
        .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Potential energy (unit density): {:.2} J",
        quantities.potential_energy
    )
    .expect("writing to string cannot fail");

    // The tangent is horizontal at the vertex, so the support tangent is the
    // interesting one: it shows the direction the anchors are pulled.
    let support = solution.shape.unit_tangent(solution.spec.half_span());
    writeln!(
        &mut output,
        "Tension direction at the right support: ({:.3}, {:.3})",
        support.x, support.y
    )
    .expect("writing to string cannot fail");

    output
}

/// Serialize the solution as pretty-printed JSON for machine consumers.
///
/// The integrated quantities are rounded to the presentation precision; the
/// spec, parameter and shape are passed through at full precision so a UI
/// can keep sampling the curve.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] when serialization fails.
pub fn render_json(solution: &CatenarySolution) -> serde_json::Result<String> {
    let presented = CatenarySolution {
        quantities: solution.quantities.rounded(),
        ..solution.clone()
    };
    serde_json::to_string_pretty(&presented)
}
