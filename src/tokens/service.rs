/// Token lookup service
///
/// Composes the upstream pool source with the pool aggregator. Single
/// lookups and batch fan-out both live here; neither decides HTTP status
/// codes, errors are returned unchanged to the caller.
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;

use crate::apis::PoolSource;
use crate::errors::LookupResult;
use crate::logger::{self, LogTag};
use crate::pools::aggregate;
use crate::tokens::types::{TokenInfo, TokenRequest};

/// Stateless per request; clones share only the pool source
#[derive(Clone)]
pub struct TokenService {
    source: Arc<dyn PoolSource>,
}

impl TokenService {
    pub fn new(source: Arc<dyn PoolSource>) -> Self {
        Self { source }
    }

    /// Fetch a token's pools and aggregate them
    pub async fn get_token_info(&self, chain: &str, address: &str) -> LookupResult<TokenInfo> {
        let pools = self.source.fetch_pools(chain, address).await?;
        let aggregates = aggregate(&pools)?;

        logger::debug(
            LogTag::Tokens,
            &format!(
                "token={} chain={} pools={} liquidity={:.2}",
                address, chain, aggregates.number_of_pools, aggregates.aggregated_liquidity
            ),
        );

        Ok(TokenInfo::from_aggregates(chain, address, aggregates))
    }

    /// Look up many tokens concurrently
    ///
    /// Every lookup runs to completion, nothing is cancelled when a sibling
    /// fails. Output order matches input order. If any lookup failed the
    /// whole batch fails with the first failure in input order, and the
    /// successful results are dropped.
    pub async fn get_many(&self, requests: &[TokenRequest]) -> LookupResult<Vec<TokenInfo>> {
        let start = Instant::now();

        let lookups = requests
            .iter()
            .map(|request| self.get_token_info(&request.chain, &request.address));
        let results = join_all(lookups).await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        logger::debug(
            LogTag::Tokens,
            &format!(
                "Batch complete: {}/{} successful in {}ms",
                results.len() - failed,
                results.len(),
                start.elapsed().as_millis()
            ),
        );

        results.into_iter().collect()
    }
}
