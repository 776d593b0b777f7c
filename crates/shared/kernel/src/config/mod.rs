use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `ARTICULA__DATASET__PATH`.
pub const ENV_PREFIX: &str = "ARTICULA";

/// Base name probed (`articula.toml`, `articula.json`, ...) when no path is given.
pub const DEFAULT_BASENAME: &str = "articula";

/// Custom error type for config loading.
#[articula_derive::articula_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from the given file, which must exist. Without a path the
///    `articula` base name is probed in the working directory and may be absent, in which case
///    the target type's serde defaults apply.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with
///    `ARTICULA__`. Nested structures use double underscores (e.g., `ARTICULA__DATASET__PATH`
///    maps to `dataset.path`).
///
/// # Errors
/// * An explicit file is missing or unreadable.
/// * The merged sources do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use articula_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_BASENAME), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
