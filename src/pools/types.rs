/// Core types for the pools module
///
/// Upstream pool objects are kept as open JSON maps: the upstream schema is
/// not owned by this service, so only the handful of fields the aggregator
/// needs are read out of them.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AggregationError;

/// Open key-value descriptor (e.g. `baseToken` / `quoteToken`)
pub type TokenDescriptor = Map<String, Value>;

/// Raw pool record as returned by upstream
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolRecord(Map<String, Value>);

impl PoolRecord {
    /// Wrap a JSON value; only objects are pool records
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// `pairAddress`, when present as a string
    pub fn pair_address(&self) -> Option<&str> {
        self.0.get("pairAddress").and_then(Value::as_str)
    }

    /// `dexId`, when present as a string
    pub fn dex_id(&self) -> Option<&str> {
        self.0.get("dexId").and_then(Value::as_str)
    }

    pub fn base_token(&self) -> TokenDescriptor {
        self.descriptor("baseToken")
    }

    pub fn quote_token(&self) -> TokenDescriptor {
        self.descriptor("quoteToken")
    }

    /// Liquidity in USD read from `liquidity.usd`
    ///
    /// Absent or `null` at either level counts as 0.0. Numbers and numeric
    /// strings are accepted; anything else, negative or non-finite values
    /// included, is an [`AggregationError`].
    pub fn liquidity_usd(&self) -> Result<f64, AggregationError> {
        let liquidity = match self.0.get("liquidity") {
            None | Some(Value::Null) => return Ok(0.0),
            Some(Value::Object(fields)) => fields,
            Some(other) => return Err(self.invalid_liquidity(other)),
        };

        let raw = match liquidity.get("usd") {
            None | Some(Value::Null) => return Ok(0.0),
            Some(raw) => raw,
        };

        let parsed = match raw {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        parsed
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| self.invalid_liquidity(raw))
    }

    fn descriptor(&self, key: &str) -> TokenDescriptor {
        self.0
            .get(key)
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default()
    }

    fn invalid_liquidity(&self, value: &Value) -> AggregationError {
        AggregationError {
            pair_id: self.pair_address().map(str::to_string),
            value: value.to_string(),
        }
    }
}

/// Normalized view of the winning pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSummary {
    /// `pairAddress` of the source record; `null` if upstream omitted it
    pub pair_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dex_id: Option<String>,
    pub liquidity: f64,
    pub base_token: TokenDescriptor,
    pub quote_token: TokenDescriptor,
}

impl PoolSummary {
    pub fn from_record(record: &PoolRecord, liquidity: f64) -> Self {
        Self {
            pair_id: record.pair_address().map(str::to_string),
            dex_id: record.dex_id().map(str::to_string),
            liquidity,
            base_token: record.base_token(),
            quote_token: record.quote_token(),
        }
    }
}

/// Result of reducing a token's pool list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoolAggregates {
    pub largest_pool: Option<PoolSummary>,
    pub aggregated_liquidity: f64,
    pub number_of_pools: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> PoolRecord {
        PoolRecord::from_value(value).unwrap()
    }

    #[test]
    fn liquidity_accepts_numbers_and_numeric_strings() {
        assert_eq!(record(json!({"liquidity": {"usd": 300}})).liquidity_usd(), Ok(300.0));
        assert_eq!(record(json!({"liquidity": {"usd": 12.5}})).liquidity_usd(), Ok(12.5));
        assert_eq!(record(json!({"liquidity": {"usd": "100"}})).liquidity_usd(), Ok(100.0));
        assert_eq!(record(json!({"liquidity": {"usd": " 1e3 "}})).liquidity_usd(), Ok(1000.0));
    }

    #[test]
    fn missing_liquidity_defaults_to_zero() {
        assert_eq!(record(json!({})).liquidity_usd(), Ok(0.0));
        assert_eq!(record(json!({"liquidity": null})).liquidity_usd(), Ok(0.0));
        assert_eq!(record(json!({"liquidity": {}})).liquidity_usd(), Ok(0.0));
        assert_eq!(record(json!({"liquidity": {"base": 5, "usd": null}})).liquidity_usd(), Ok(0.0));
    }

    #[test]
    fn malformed_liquidity_fails_loudly() {
        let err = record(json!({"pairAddress": "P1", "liquidity": {"usd": "plenty"}}))
            .liquidity_usd()
            .unwrap_err();
        assert_eq!(err.pair_id.as_deref(), Some("P1"));
        assert_eq!(err.value, "\"plenty\"");

        for bad in [
            json!({"liquidity": {"usd": true}}),
            json!({"liquidity": {"usd": [1]}}),
            json!({"liquidity": {"usd": {"v": 1}}}),
            json!({"liquidity": {"usd": "NaN"}}),
            json!({"liquidity": {"usd": "inf"}}),
            json!({"liquidity": {"usd": -4}}),
            json!({"liquidity": {"usd": "-4.5"}}),
            json!({"liquidity": 42}),
        ] {
            assert!(record(bad.clone()).liquidity_usd().is_err(), "accepted {}", bad);
        }
    }

    #[test]
    fn only_objects_are_records() {
        assert!(PoolRecord::from_value(json!([1, 2])).is_none());
        assert!(PoolRecord::from_value(json!("pair")).is_none());
        assert!(PoolRecord::from_value(json!({})).is_some());
    }

    #[test]
    fn summary_defaults_missing_descriptors() {
        let source = record(json!({
            "pairAddress": "A",
            "dexId": "raydium",
            "baseToken": {"symbol": "BONK"},
            "quoteToken": "SOL"
        }));

        let summary = PoolSummary::from_record(&source, 7.0);

        assert_eq!(summary.pair_id.as_deref(), Some("A"));
        assert_eq!(summary.dex_id.as_deref(), Some("raydium"));
        assert_eq!(summary.base_token.get("symbol"), Some(&json!("BONK")));
        assert!(summary.quote_token.is_empty());
    }

    #[test]
    fn summary_serializes_with_upstream_field_names() {
        let summary = PoolSummary::from_record(&record(json!({"pairAddress": "B"})), 300.0);

        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({"pairId": "B", "liquidity": 300.0, "baseToken": {}, "quoteToken": {}})
        );
    }
}
