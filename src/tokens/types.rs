/// Token lookup request and result types
use serde::{Deserialize, Serialize};

use crate::pools::{PoolAggregates, PoolSummary};

/// One (chain, address) pair to look up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRequest {
    pub chain: String,
    pub address: String,
}

impl TokenRequest {
    pub fn new(chain: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            address: address.into(),
        }
    }
}

/// Aggregated liquidity view of one token
///
/// `largest_pool` is `None` exactly when `number_of_pools` is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub chain: String,
    pub address: String,
    pub largest_pool: Option<PoolSummary>,
    pub aggregated_liquidity: f64,
    pub number_of_pools: usize,
}

impl TokenInfo {
    pub fn from_aggregates(chain: &str, address: &str, aggregates: PoolAggregates) -> Self {
        Self {
            chain: chain.to_string(),
            address: address.to_string(),
            largest_pool: aggregates.largest_pool,
            aggregated_liquidity: aggregates.aggregated_liquidity,
            number_of_pools: aggregates.number_of_pools,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_token_serializes_null_largest_pool() {
        let info = TokenInfo::from_aggregates("solana", "So111", PoolAggregates::default());

        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({
                "chain": "solana",
                "address": "So111",
                "largest_pool": null,
                "aggregated_liquidity": 0.0,
                "number_of_pools": 0
            })
        );
    }
}
