//! Token liquidity lookups
//!
//! - `types`: request and result records
//! - `service`: single lookup and concurrent batch fan-out

pub mod service;
pub mod types;

pub use service::TokenService;
pub use types::{TokenInfo, TokenRequest};
