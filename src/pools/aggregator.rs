/// Pool aggregation
///
/// Reduces the pool list of one token into its largest pool, total
/// liquidity and pool count. Pure and deterministic: no I/O, input order
/// decides both the summation order and tie-breaking.
use crate::errors::AggregationError;
use crate::logger::{self, LogTag};
use crate::pools::types::{PoolAggregates, PoolRecord, PoolSummary};

/// Aggregate a token's pools
///
/// - empty input yields `(None, 0.0, 0)`
/// - `aggregated_liquidity` is the in-order sum of every `liquidity.usd`
/// - `largest_pool` is the first record holding the maximum liquidity
///
/// Fails on the first record whose liquidity is present but not numeric,
/// or when the total no longer fits in a finite `f64`.
pub fn aggregate(records: &[PoolRecord]) -> Result<PoolAggregates, AggregationError> {
    let mut aggregated_liquidity = 0.0;
    let mut largest: Option<(usize, f64)> = None;

    for (index, record) in records.iter().enumerate() {
        let liquidity = record.liquidity_usd()?;
        aggregated_liquidity += liquidity;

        // Strictly greater: on ties the earlier record stays.
        match largest {
            Some((_, best)) if liquidity <= best => {}
            _ => largest = Some((index, liquidity)),
        }
    }

    if !aggregated_liquidity.is_finite() {
        return Err(AggregationError {
            pair_id: None,
            value: format!("total of {} pools overflowed", records.len()),
        });
    }

    let largest_pool =
        largest.map(|(index, liquidity)| PoolSummary::from_record(&records[index], liquidity));

    logger::verbose(
        LogTag::Pool,
        &format!(
            "Aggregated {} pools: total_liquidity={:.2}, largest={:?}",
            records.len(),
            aggregated_liquidity,
            largest_pool.as_ref().and_then(|p| p.pair_id.as_deref())
        ),
    );

    Ok(PoolAggregates {
        largest_pool,
        aggregated_liquidity,
        number_of_pools: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn records(value: Value) -> Vec<PoolRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_pool_list() {
        let result = aggregate(&[]).unwrap();

        assert_eq!(result.largest_pool, None);
        assert_eq!(result.aggregated_liquidity, 0.0);
        assert_eq!(result.number_of_pools, 0);
    }

    #[test]
    fn sums_and_picks_largest() {
        let pools = records(json!([
            {"liquidity": {"usd": "100"}, "pairAddress": "A"},
            {"liquidity": {"usd": 300}, "pairAddress": "B"}
        ]));

        let result = aggregate(&pools).unwrap();

        assert_eq!(result.aggregated_liquidity, 400.0);
        assert_eq!(result.number_of_pools, 2);
        let largest = result.largest_pool.unwrap();
        assert_eq!(largest.pair_id.as_deref(), Some("B"));
        assert_eq!(largest.liquidity, 300.0);
    }

    #[test]
    fn ties_keep_the_first_record() {
        let pools = records(json!([
            {"liquidity": {"usd": 10}, "pairAddress": "low"},
            {"liquidity": {"usd": 50}, "pairAddress": "first"},
            {"liquidity": {"usd": "50"}, "pairAddress": "second"},
            {"liquidity": {"usd": 50.0}, "pairAddress": "third"}
        ]));

        let largest = aggregate(&pools).unwrap().largest_pool.unwrap();

        assert_eq!(largest.pair_id.as_deref(), Some("first"));
    }

    #[test]
    fn missing_liquidity_counts_as_zero_but_is_counted() {
        let pools = records(json!([
            {"pairAddress": "no-liquidity"},
            {"liquidity": {}, "pairAddress": "no-usd"}
        ]));

        let result = aggregate(&pools).unwrap();

        assert_eq!(result.number_of_pools, 2);
        assert_eq!(result.aggregated_liquidity, 0.0);
        // All zero: the first record still wins, so pools never go unreported.
        let largest = result.largest_pool.unwrap();
        assert_eq!(largest.pair_id.as_deref(), Some("no-liquidity"));
        assert_eq!(largest.liquidity, 0.0);
    }

    #[test]
    fn largest_pool_carries_descriptors() {
        let pools = records(json!([
            {
                "liquidity": {"usd": 1250.5},
                "pairAddress": "PAIR",
                "dexId": "orca",
                "baseToken": {"address": "So111", "symbol": "SOL"},
                "quoteToken": {"address": "EPjF", "symbol": "USDC"}
            }
        ]));

        let largest = aggregate(&pools).unwrap().largest_pool.unwrap();

        assert_eq!(largest.dex_id.as_deref(), Some("orca"));
        assert_eq!(largest.base_token.get("symbol"), Some(&json!("SOL")));
        assert_eq!(largest.quote_token.get("symbol"), Some(&json!("USDC")));
    }

    #[test]
    fn sum_matches_in_order_addition() {
        let values = [0.1, 0.2, 0.3, 1e12, 7.25];
        let pools: Vec<PoolRecord> = values
            .iter()
            .map(|v| PoolRecord::from_value(json!({"liquidity": {"usd": v}})).unwrap())
            .collect();

        let expected = values.iter().fold(0.0, |acc, v| acc + v);
        let result = aggregate(&pools).unwrap();

        assert_eq!(result.aggregated_liquidity, expected);
        assert_eq!(result.largest_pool.unwrap().liquidity, 1e12);
    }

    #[test]
    fn malformed_liquidity_aborts_aggregation() {
        let pools = records(json!([
            {"liquidity": {"usd": 5}, "pairAddress": "ok"},
            {"liquidity": {"usd": "n/a"}, "pairAddress": "broken"}
        ]));

        let err = aggregate(&pools).unwrap_err();

        assert_eq!(err.pair_id.as_deref(), Some("broken"));
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let pools = records(json!([
            {"liquidity": {"usd": 1e308}, "pairAddress": "A"},
            {"liquidity": {"usd": 1e308}, "pairAddress": "B"}
        ]));

        let err = aggregate(&pools).unwrap_err();

        assert_eq!(err.pair_id, None);
        assert!(err.value.contains("overflowed"));
    }
}
