use catenx::{analyze, render_summary, SpanSpec};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Describe the cable: a 120 m span sagging 12 m at its midpoint. The
    // shape a uniform cable hangs in is a catenary.
    // See: https://en.wikipedia.org/wiki/Catenary
    let spec = SpanSpec::new(120.0, 12.0)?;

    // Solve the shape parameter and integrate the physical quantities in one
    // call. Both the root finding and the quadrature run under fixed budgets,
    // so this returns either a solution or a structured error.
    let solution = analyze(spec)?;

    // Render a human-friendly report of the response and print it to standard
    // output for the CLI user.
    let report = render_summary(&solution);
    println!("{report}");

    Ok(())
}
