use crate::present::Renderer;
use anyhow::Result;
use articula::features::consult::Catalog;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct Report<'a> {
    dataset: &'a Path,
    total: usize,
    kept: usize,
    dropped: usize,
    regions: usize,
}

/// Reports how many dataset entries survived validation.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub fn check(
    out: &mut impl Write,
    renderer: &Renderer,
    dataset: &Path,
    catalog: &Catalog,
    json: bool,
) -> Result<()> {
    let load = catalog.report();
    let report = Report {
        dataset,
        total: load.total,
        kept: load.kept,
        dropped: load.dropped,
        regions: catalog.regions().len(),
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "dataset: {}", report.dataset.display())?;
    writeln!(out, "records: {}", report.total)?;
    writeln!(out, "kept:    {}", report.kept)?;
    writeln!(out, "dropped: {}", report.dropped)?;
    writeln!(out, "regions: {}", report.regions)?;
    if report.dropped > 0 {
        renderer.hint(out, "Run with -vv to see why entries were dropped.")?;
    }
    Ok(())
}
