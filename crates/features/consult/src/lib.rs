//! # Consult Feature Slice
//!
//! Answers "what does my technical title articulate into?" by walking a student through
//! four dependent selections over the published dataset.
//!
//! ## Architecture
//!
//! 1.  **Catalog ([`catalog`]):** normalizes the raw JSON once, drops unusable entries and
//!     answers the option and resolution queries.
//! 2.  **Wizard ([`wizard`]):** per-session state machine borrowing the catalog. Rejects
//!     anything outside the current candidate list.
//! 3.  **Outcome ([`outcome`]):** classifies resolved destinations for presentation.
//!
//! The catalog is immutable after load and shared through the [`Consult`] slice; every
//! session gets its own [`Wizard`].

pub mod catalog;
mod error;
mod normalize;
pub mod outcome;
pub mod wizard;

pub use crate::catalog::{Catalog, LoadReport};
pub use crate::error::{ConsultError, ConsultErrorExt};
pub use crate::outcome::Outcome;
pub use crate::wizard::{Wizard, WizardState};
use articula_kernel::domain::config::AppConfig;
use articula_kernel::domain::registry::InitializedSlice;

/// Shared consult state: the loaded catalog.
#[articula_derive::articula_slice]
pub struct Consult {
    pub catalog: Catalog,
}

impl Consult {
    /// Wraps an already-built catalog.
    #[must_use]
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self::new(ConsultInner { catalog })
    }

    /// Starts a fresh session over the shared catalog.
    #[must_use]
    pub fn wizard(&self) -> Wizard<'_> {
        Wizard::new(&self.catalog)
    }
}

/// Loads the dataset named by `config.dataset.path` and builds the slice.
///
/// # Errors
/// Any [`ConsultError`] raised by [`Catalog::from_path`].
pub fn init(config: &AppConfig) -> Result<InitializedSlice, ConsultError> {
    let slice = load(config)?;
    tracing::info!(records = slice.catalog.len(), "Consult feature initialized");

    Ok(InitializedSlice::new(slice))
}

/// Like [`init`], returning the concrete slice.
///
/// # Errors
/// Any [`ConsultError`] raised by [`Catalog::from_path`].
pub fn load(config: &AppConfig) -> Result<Consult, ConsultError> {
    let catalog = Catalog::from_path(&config.dataset.path)?;
    Ok(Consult::from_catalog(catalog))
}
