//! Service configuration
//!
//! TOML-backed configuration with defaults embedded in the schema
//! definitions (see [`config_struct!`](crate::config_struct)).

mod macros;
mod schemas;
mod utils;

pub use schemas::{BatchConfig, Config, LoggingConfig, UpstreamConfig, WebserverConfig};
pub use utils::{apply_overrides, load_config_from_path, parse_config, CONFIG_FILE_PATH};
