/// Configuration schemas - all config structures defined once with defaults
///
/// Each struct is defined using the config_struct! macro which provides
/// embedded defaults and serde support. A missing section or field in the
/// TOML file falls back to the value declared here.
use crate::config_struct;
use url::Url;

// ============================================================================
// UPSTREAM CONFIGURATION
// ============================================================================

config_struct! {
    /// Upstream market-data API (DexScreener token-pairs endpoint)
    pub struct UpstreamConfig {
        /// Base URL; `/{chain}/{address}` is appended per lookup
        base_url: String = "https://api.dexscreener.com/token-pairs/v1".to_string(),

        /// Total request timeout in seconds (connect + response + body)
        timeout_secs: u64 = crate::apis::dexscreener::TIMEOUT_SECS,
    }
}

// ============================================================================
// WEBSERVER CONFIGURATION
// ============================================================================

config_struct! {
    /// Webserver configuration
    pub struct WebserverConfig {
        host: String = "127.0.0.1".to_string(),
        port: u16 = 8080,
        /// Allow cross-origin requests from any origin
        cors_enabled: bool = true,
    }
}

// ============================================================================
// BATCH CONFIGURATION
// ============================================================================

config_struct! {
    /// Batch lookup limits
    pub struct BatchConfig {
        /// Maximum number of tokens accepted by POST /tokens/info
        max_tokens: usize = 30,
    }
}

// ============================================================================
// LOGGING CONFIGURATION
// ============================================================================

config_struct! {
    /// Logging configuration
    pub struct LoggingConfig {
        /// Minimum level: error, warning, info, debug, verbose
        min_level: String = "info".to_string(),

        /// Append log lines to this file as well as the console (empty = console only)
        file_path: String = String::new(),
    }
}

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    /// Complete service configuration
    pub struct Config {
        upstream: UpstreamConfig = UpstreamConfig::default(),
        webserver: WebserverConfig = WebserverConfig::default(),
        batch: BatchConfig = BatchConfig::default(),
        logging: LoggingConfig = LoggingConfig::default(),
    }
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl UpstreamConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("Upstream timeout must be greater than zero".to_string());
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid upstream base_url '{}': {}", self.base_url, e))?;

        if url.cannot_be_a_base() {
            return Err(format!(
                "Upstream base_url '{}' cannot carry path segments",
                self.base_url
            ));
        }

        Ok(())
    }
}

impl WebserverConfig {
    /// Validate webserver configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        Ok(())
    }

    /// Address string suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl BatchConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_tokens == 0 {
            return Err("Batch max_tokens must be at least 1".to_string());
        }
        Ok(())
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if crate::logger::LogLevel::from_str(&self.min_level).is_none() {
            return Err(format!("Unknown log level '{}'", self.min_level));
        }
        Ok(())
    }
}

impl Config {
    /// Validate every section, reporting the first problem found
    pub fn validate(&self) -> Result<(), String> {
        self.upstream.validate()?;
        self.webserver.validate()?;
        self.batch.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
