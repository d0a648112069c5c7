/// Upstream market-data APIs
///
/// The token service only depends on [`PoolSource`]; the DexScreener client
/// is the production implementation.
pub mod dexscreener;

pub use dexscreener::DexScreenerClient;

use async_trait::async_trait;

use crate::errors::UpstreamError;
use crate::pools::PoolRecord;

/// Source of raw pool records for a token
///
/// Implementations must be safe to call concurrently and must not keep
/// request data between calls.
#[async_trait]
pub trait PoolSource: Send + Sync {
    /// All pools known upstream for `address` on `chain`
    async fn fetch_pools(&self, chain: &str, address: &str)
        -> Result<Vec<PoolRecord>, UpstreamError>;
}
