use crate::present::Renderer;
use anyhow::{Context, Result};
use articula::domain::articulation::ArticulationResult;
use articula::features::consult::{Catalog, Wizard, WizardState};
use serde::Serialize;
use std::io::Write;

/// Prints an option list as text lines or a JSON array.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub fn print_options(out: &mut impl Write, renderer: &Renderer, items: &[&str], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, items)?;
        writeln!(out)?;
    } else {
        renderer.list(out, items)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct Resolution<'a> {
    selection: &'a WizardState,
    outcome: &'static str,
    results: &'a [ArticulationResult],
}

/// Replays the four selections through a wizard and prints the outcome.
///
/// # Errors
/// Returns an error if any value is not available at its step, or writing fails.
pub fn resolve(
    out: &mut impl Write,
    renderer: &Renderer,
    catalog: &Catalog,
    path: [&str; 4],
    json: bool,
) -> Result<()> {
    let mut wizard = Wizard::new(catalog);
    for value in path {
        let step = wizard.step();
        wizard.select(value).with_context(|| format!("Cannot select {step} '{value}'"))?;
    }

    let outcome = wizard.outcome().context("Wizard did not reach the result step")?;
    if json {
        let resolution = Resolution {
            selection: wizard.state(),
            outcome: outcome.kind(),
            results: outcome.results(),
        };
        serde_json::to_writer_pretty(&mut *out, &resolution)?;
        writeln!(out)?;
    } else {
        renderer.outcome(out, path[3], &outcome)?;
    }
    Ok(())
}
