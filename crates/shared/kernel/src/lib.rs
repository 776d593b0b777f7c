//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain and provides layered config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use articula_kernel::config::load_config;
//! use articula_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("articula.toml")).unwrap_or_default();
//! ```
pub mod config;
pub mod prelude;

pub use articula_domain as domain;
