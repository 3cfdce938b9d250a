// Sub-modules
mod core;
mod loader;
mod thresholds;

pub use self::core::{EsgscoreConfig, OutputConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
pub use thresholds::StatusThresholds;
