/// DexScreener token-pairs API client
///
/// API Documentation: https://docs.dexscreener.com/api/reference
///
/// Endpoint used:
/// - /token-pairs/v1/{chainId}/{tokenAddress} - all pools for a token
///
/// One GET per lookup with a total timeout; no retries, no caching.
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use url::Url;

use super::PoolSource;
use crate::config::UpstreamConfig;
use crate::errors::UpstreamError;
use crate::logger::{self, LogTag};
use crate::pools::PoolRecord;

/// Default timeout in seconds - DexScreener is fast, 10s is sufficient
pub const TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!("poolscreener/", env!("CARGO_PKG_VERSION"));

/// DexScreener API client
///
/// Holds one pooled `reqwest::Client`; cheap to share behind an `Arc`.
pub struct DexScreenerClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl DexScreenerClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, String> {
        Self::with_timeout(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// Build a client against `base_url` with an explicit total timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, String> {
        if timeout.is_zero() {
            return Err("Timeout must be greater than zero".to_string());
        }

        let base_url =
            Url::parse(base_url).map_err(|e| format!("Invalid base URL '{}': {}", base_url, e))?;
        if base_url.cannot_be_a_base() {
            return Err(format!("Base URL '{}' cannot carry path segments", base_url));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `{base_url}/{chain}/{address}`, each segment percent-encoded
    pub fn pools_url(&self, chain: &str, address: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(chain).push(address);
        }
        url
    }

    /// Fetch ALL pools for a single token address
    ///
    /// # Errors
    /// - [`UpstreamError::Status`] for non-2xx responses
    /// - [`UpstreamError::Timeout`] / [`UpstreamError::Unreachable`] for transport failures
    /// - [`UpstreamError::MalformedPayload`] when the body is not an array of objects
    pub async fn fetch_token_pools(
        &self,
        chain: &str,
        address: &str,
    ) -> Result<Vec<PoolRecord>, UpstreamError> {
        let url = self.pools_url(chain, address);

        logger::debug(
            LogTag::Api,
            &format!(
                "[DEXSCREENER] Fetching token pools: token={}, chain={}",
                address, chain
            ),
        );

        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            logger::debug(
                LogTag::Api,
                &format!(
                    "[DEXSCREENER] HTTP {} for token={}, chain={} ({}ms)",
                    status,
                    address,
                    chain,
                    start.elapsed().as_millis()
                ),
            );
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let value: Value = serde_json::from_slice(&body)
            .map_err(|e| UpstreamError::MalformedPayload(format!("invalid JSON: {}", e)))?;
        let pools = parse_pool_list(value)?;

        logger::debug(
            LogTag::Api,
            &format!(
                "[DEXSCREENER] {} pools for token={}, chain={} ({}ms)",
                pools.len(),
                address,
                chain,
                start.elapsed().as_millis()
            ),
        );

        Ok(pools)
    }

    fn transport_error(&self, err: &reqwest::Error) -> UpstreamError {
        if err.is_timeout() {
            UpstreamError::Timeout {
                timeout_ms: self.timeout().as_millis() as u64,
            }
        } else {
            UpstreamError::Unreachable(err.to_string())
        }
    }
}

#[async_trait]
impl PoolSource for DexScreenerClient {
    async fn fetch_pools(
        &self,
        chain: &str,
        address: &str,
    ) -> Result<Vec<PoolRecord>, UpstreamError> {
        self.fetch_token_pools(chain, address).await
    }
}

/// Interpret a decoded response body as a list of pool records
pub fn parse_pool_list(value: Value) -> Result<Vec<PoolRecord>, UpstreamError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(UpstreamError::MalformedPayload(format!(
                "expected a JSON array of pools, got {}",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let kind = json_kind(&item);
            PoolRecord::from_value(item).ok_or_else(|| {
                UpstreamError::MalformedPayload(format!(
                    "pool at index {} is {}, expected an object",
                    index, kind
                ))
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
