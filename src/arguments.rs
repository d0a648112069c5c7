/// Command-line arguments for the poolscreener service
///
/// Flags follow the `--debug-<module>` convention: each one enables debug
/// level output for the matching log tag only.
use clap::Parser;
use std::path::PathBuf;

use crate::config::CONFIG_FILE_PATH;
use crate::logger::LogTag;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "poolscreener",
    version,
    about = "Aggregates DexScreener liquidity pools per token over HTTP"
)]
pub struct Arguments {
    /// Path to the TOML configuration file
    #[arg(long, default_value = CONFIG_FILE_PATH)]
    pub config: PathBuf,

    /// Override webserver.host
    #[arg(long)]
    pub host: Option<String>,

    /// Override webserver.port
    #[arg(long)]
    pub port: Option<u16>,

    /// Debug output for upstream API calls
    #[arg(long)]
    pub debug_api: bool,

    /// Debug output for pool aggregation
    #[arg(long)]
    pub debug_pool: bool,

    /// Debug output for token lookups and batches
    #[arg(long)]
    pub debug_tokens: bool,

    /// Debug output for HTTP request handling
    #[arg(long)]
    pub debug_webserver: bool,

    /// Debug output for startup and shutdown
    #[arg(long)]
    pub debug_system: bool,

    /// Show every log level, including verbose traces
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(long)]
    pub quiet: bool,
}

impl Arguments {
    /// Log tags whose debug output was requested on the command line
    pub fn debug_tags(&self) -> Vec<LogTag> {
        let mut tags = Vec::new();
        if self.debug_api {
            tags.push(LogTag::Api);
        }
        if self.debug_pool {
            tags.push(LogTag::Pool);
        }
        if self.debug_tokens {
            tags.push(LogTag::Tokens);
        }
        if self.debug_webserver {
            tags.push(LogTag::Webserver);
        }
        if self.debug_system {
            tags.push(LogTag::System);
        }
        tags
    }
}
