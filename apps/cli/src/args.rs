//! # CLI Argument Definitions
//!
//! Global flags override the loaded configuration; subcommands either query the catalog
//! directly or drive the interactive wizard.

use articula::domain::config::ThemePreference;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "articula")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Consult which higher-education programs a technical title articulates into")]
pub struct Cli {
    /// Configuration file (TOML, JSON, ...). Defaults to `articula.*` in the working directory
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Articulations dataset, overrides `dataset.path`
    #[arg(long, global = true, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    #[arg(long, global = true, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output machine-readable JSON (query commands)
    #[arg(long, global = true)]
    pub json: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// List regions
    Regions,
    /// List the departments of a region
    Departments { region: String },
    /// List the technical schools of a department
    Schools { region: String, department: String },
    /// List the orientations offered by a school
    Orientations { region: String, department: String, school: String },
    /// Walk the full selection path and show the outcome
    Resolve { region: String, department: String, school: String, orientation: String },
    /// Load the dataset and report kept and dropped records
    Check,
    /// Interactive wizard on stdin/stdout
    Consult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Auto,
    Light,
    Dark,
}

impl From<ThemeArg> for ThemePreference {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Auto => Self::Auto,
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}
