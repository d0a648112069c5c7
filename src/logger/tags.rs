/// Log tags identify the subsystem a message comes from
///
/// Each tag maps to a `--debug-<key>` command-line flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    /// Outbound calls to the upstream market-data API
    Api,
    /// Pool aggregation
    Pool,
    /// Token lookups and batch fan-out
    Tokens,
    /// HTTP surface
    Webserver,
    /// Startup, configuration, shutdown
    System,
}

impl LogTag {
    /// Key used by `--debug-<key>` flags
    pub fn to_debug_key(&self) -> &'static str {
        match self {
            LogTag::Api => "api",
            LogTag::Pool => "pool",
            LogTag::Tokens => "tokens",
            LogTag::Webserver => "webserver",
            LogTag::System => "system",
        }
    }

    /// Uppercase label used in console and file output
    pub fn to_plain_string(&self) -> &'static str {
        match self {
            LogTag::Api => "API",
            LogTag::Pool => "POOL",
            LogTag::Tokens => "TOKENS",
            LogTag::Webserver => "WEBSERVER",
            LogTag::System => "SYSTEM",
        }
    }
}
