/// Configuration utilities - loading and CLI overrides
///
/// The service reads its configuration once at startup. The resulting
/// `Config` is immutable for the lifetime of the process and is handed to
/// the webserver state, so nothing here holds global mutable state.
use super::schemas::Config;
use crate::arguments::Arguments;
use std::path::Path;

/// Default configuration file path
pub const CONFIG_FILE_PATH: &str = "data/config.toml";

/// Load configuration from a TOML file
///
/// If the file doesn't exist, default values from the schema definitions
/// are used.
///
/// # Returns
/// - `Ok(Config)` - parsed (or default) configuration
/// - `Err(String)` - the file exists but could not be read or parsed
pub fn load_config_from_path(path: impl AsRef<Path>) -> Result<Config, String> {
    let path = path.as_ref();

    if !path.exists() {
        eprintln!(
            "⚠️  Config file '{}' not found, using default values",
            path.display()
        );
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

    parse_config(&contents)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))
}

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> Result<Config, String> {
    toml::from_str::<Config>(contents).map_err(|e| e.to_string())
}

/// Apply command-line overrides on top of file configuration
pub fn apply_overrides(config: &mut Config, args: &Arguments) {
    if let Some(host) = &args.host {
        config.webserver.host = host.clone();
    }
    if let Some(port) = args.port {
        config.webserver.port = port;
    }
}
