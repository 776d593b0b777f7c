pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use articula_domain::articulation::{ArticulationRecord, ArticulationResult};
pub use articula_domain::config::{AppConfig, ThemePreference};
pub use articula_domain::registry::{FeatureSlice, InitializedSlice, SliceRegistry};
pub use articula_domain::step::Step;
