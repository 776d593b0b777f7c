//! Facade crate for `Articula` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Load an [`AppConfig`] with [`kernel::config::load_config`].
//! - Call [`init`] once at startup and pull slices out of the returned registry.

pub use articula_domain as domain;
use articula_domain::config::AppConfig;
use articula_domain::registry::SliceRegistry;
pub use articula_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    pub use articula_consult as consult;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["consult"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &AppConfig) -> Result<SliceRegistry, Box<dyn std::error::Error + Send + Sync>> {
    let mut registry = SliceRegistry::default();

    // Consult
    registry.register(features::consult::init(config)?);

    Ok(registry)
}
