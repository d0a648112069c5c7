//! Pool records and their aggregation
//!
//! - `types`: raw upstream pool records and the normalized pool summary
//! - `aggregator`: reduction of a token's pool list into aggregate metrics

pub mod aggregator;
pub mod types;

pub use aggregator::aggregate;
pub use types::{PoolAggregates, PoolRecord, PoolSummary, TokenDescriptor};
