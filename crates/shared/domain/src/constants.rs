/// Sentinel used by the dataset maintainers for "not defined".
pub const NOT_DEFINED: &str = "N/D";

/// Color tag applied when a result does not carry one.
pub const DEFAULT_COLOR: &str = "text-blue-500";

/// Emphasis tag applied when a result does not carry one.
pub const DEFAULT_HIGHLIGHT: &str =
    "hover:text-blue-400 hover:drop-shadow-[0_0_8px_rgba(59,130,246,0.8)]";

/// Icon key applied when a result does not carry one.
pub const DEFAULT_ICON: &str = "Star";

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATASET: &str = "data/articulaciones.json";
