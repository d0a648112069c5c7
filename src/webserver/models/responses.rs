/// API response type definitions
///
/// Success bodies are the token records themselves; these are the
/// remaining shapes the service emits.

use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };

/// Simple health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
