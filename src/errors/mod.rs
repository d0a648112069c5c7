/// Error types for token liquidity lookups
///
/// Failures are typed at the layer that detects them and travel unchanged
/// up through the token service. Translation to HTTP status codes happens
/// once, in `webserver::errors`.
use thiserror::Error;

// =============================================================================
// UPSTREAM ERRORS
// =============================================================================

/// Failure while talking to the upstream market-data API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-2xx status
    #[error("Upstream returned HTTP {status}")]
    Status { status: u16 },

    /// No complete response within the configured timeout
    #[error("Upstream request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Connection refused, DNS failure, TLS failure, reset, ...
    #[error("Upstream unreachable: {0}")]
    Unreachable(String),

    /// 2xx response whose body is not a JSON array of pool objects
    #[error("Upstream payload malformed: {0}")]
    MalformedPayload(String),
}

impl UpstreamError {
    /// True for failures that never produced an upstream response
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            UpstreamError::Timeout { .. } | UpstreamError::Unreachable(_)
        )
    }
}

// =============================================================================
// AGGREGATION ERRORS
// =============================================================================

/// A pool record carried a liquidity value that is present but not numeric
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid liquidity.usd for pool {}: {value}", .pair_id.as_deref().unwrap_or("<unknown>"))]
pub struct AggregationError {
    pub pair_id: Option<String>,
    /// The offending JSON value, rendered as text
    pub value: String,
}

// =============================================================================
// LOOKUP ERRORS
// =============================================================================

/// Any failure of a single token lookup
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_are_flagged() {
        assert!(UpstreamError::Timeout { timeout_ms: 10_000 }.is_transport());
        assert!(!UpstreamError::Status { status: 429 }.is_transport());
        assert!(UpstreamError::Unreachable("refused".into()).is_transport());
        assert!(!UpstreamError::MalformedPayload("object".into()).is_transport());
    }

    #[test]
    fn aggregation_error_names_the_pool() {
        let err = AggregationError {
            pair_id: Some("0xabc".into()),
            value: "\"lots\"".into(),
        };
        assert_eq!(err.to_string(), "Invalid liquidity.usd for pool 0xabc: \"lots\"");

        let anonymous = AggregationError {
            pair_id: None,
            value: "true".into(),
        };
        assert!(anonymous.to_string().contains("<unknown>"));
    }

    #[test]
    fn lookup_error_is_transparent() {
        let err: LookupError = UpstreamError::Status { status: 404 }.into();
        assert_eq!(err.to_string(), "Upstream returned HTTP 404");
    }
}
