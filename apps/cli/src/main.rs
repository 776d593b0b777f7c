mod args;
mod handlers;
mod present;
mod settings;

use crate::args::{AppCommands, Cli};
use crate::handlers::{check, consult, query};
use crate::present::{Renderer, Theme};
use anyhow::{Context, Result, anyhow};
use articula::features::consult::Consult;
use clap::Parser;
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = settings::load(&cli)?;
    let _logger = settings::init_logger(&config.logging, cli.verbose)?;

    let registry = articula::init(&config)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("Failed to load dataset {}", config.dataset.path.display()))?;
    let feature = registry.get::<Consult>().context("Consult feature is not registered")?;
    let catalog = &feature.catalog;

    let renderer = Renderer::new(Theme::resolve(config.display.theme, config.display.color));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let json = cli.json;

    match &cli.command {
        AppCommands::Regions => query::print_options(&mut out, &renderer, &catalog.regions(), json)?,
        AppCommands::Departments { region } => {
            query::print_options(&mut out, &renderer, &catalog.departments(region), json)?;
        },
        AppCommands::Schools { region, department } => {
            query::print_options(&mut out, &renderer, &catalog.schools(region, department), json)?;
        },
        AppCommands::Orientations { region, department, school } => {
            let options = catalog.orientations(region, department, school);
            query::print_options(&mut out, &renderer, &options, json)?;
        },
        AppCommands::Resolve { region, department, school, orientation } => {
            let path = [region.as_str(), department.as_str(), school.as_str(), orientation.as_str()];
            query::resolve(&mut out, &renderer, catalog, path, json)?;
        },
        AppCommands::Check => check::check(&mut out, &renderer, &config.dataset.path, catalog, json)?,
        AppCommands::Consult => consult::run(feature, &renderer, io::stdin().lock(), &mut out)?,
    }

    out.flush()?;
    Ok(())
}
