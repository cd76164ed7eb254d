//! Exhaustive strangle pairing search.
//!
//! Evaluates every (call, put) pair from the two candidate lists and keeps
//! the one whose breakeven spread, normalized by the average strike, is
//! smallest. Pure function of its inputs.

use crate::types::{Contract, StrangleCombination};
use serde::{Deserialize, Serialize};

/// Brokerage fee schedule folded into every candidate's strangle cost.
///
/// per-share overhead = 2 * contract_fee / 100
///
/// (two contract legs, 100 shares per contract), so breakevens account for
/// the full round trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Combined open + close commission for one contract, in dollars.
    pub contract_fee: f64,
}

impl FeeSchedule {
    #[inline]
    pub fn per_share_overhead(&self) -> f64 {
        2.0 * self.contract_fee / 100.0
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        // 0.53 to open + 0.55 to close, per contract.
        Self {
            contract_fee: 0.53 + 0.55,
        }
    }
}

/// Scan all of `calls` x `puts` for the minimum-normalized-breakeven-spread
/// pairing. O(n*m), no pruning.
///
/// Selection uses strict less-than against the running minimum, so on ties
/// the earliest pair in iteration order (calls outer, puts inner) wins.
/// Returns `None` when either list is empty or no pair produces a finite
/// metric. Pairs with a non-positive average strike are skipped rather
/// than dividing by zero.
pub fn find_best_pair(
    calls: &[Contract],
    puts: &[Contract],
    fees: FeeSchedule,
) -> Option<StrangleCombination> {
    let overhead = fees.per_share_overhead();
    let mut min_normalized_diff = f64::MAX;
    let mut best: Option<StrangleCombination> = None;

    for call in calls {
        for put in puts {
            let strangle_costs = call.premium + put.premium + overhead;
            let upper_breakeven = call.strike_price + strangle_costs;
            let lower_breakeven = put.strike_price - strangle_costs;
            let breakeven_difference = (upper_breakeven - lower_breakeven).abs();
            let average_strike_price = 0.5 * (call.strike_price + put.strike_price);
            if average_strike_price <= 0.0 {
                continue;
            }

            let normalized_difference = breakeven_difference / average_strike_price;
            if !normalized_difference.is_finite() {
                continue;
            }

            if normalized_difference < min_normalized_diff {
                min_normalized_diff = normalized_difference;
                best = Some(StrangleCombination {
                    call: *call,
                    put: *put,
                    strangle_costs,
                    upper_breakeven,
                    lower_breakeven,
                    breakeven_difference,
                    average_strike_price,
                    normalized_difference,
                    pairs_considered: 0,
                });
            }
        }
    }

    if let Some(combo) = best.as_mut() {
        combo.pairs_considered = calls.len() * puts.len();
        tracing::debug!(
            pairs = combo.pairs_considered,
            normalized_difference = combo.normalized_difference,
            "best strangle pairing selected"
        );
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContractType;

    fn call(premium: f64, strike: f64, iv: f64) -> Contract {
        Contract {
            premium,
            strike_price: strike,
            implied_volatility: iv,
            contract_type: ContractType::Call,
        }
    }

    fn put(premium: f64, strike: f64, iv: f64) -> Contract {
        Contract {
            premium,
            strike_price: strike,
            implied_volatility: iv,
            contract_type: ContractType::Put,
        }
    }

    /// Same arithmetic as the scan, for cross-checking minimality.
    fn normalized_diff(c: &Contract, p: &Contract, overhead: f64) -> f64 {
        let costs = c.premium + p.premium + overhead;
        let upper = c.strike_price + costs;
        let lower = p.strike_price - costs;
        (upper - lower).abs() / (0.5 * (c.strike_price + p.strike_price))
    }

    #[test]
    fn test_default_fee_overhead() {
        let fees = FeeSchedule::default();
        assert!(
            (fees.per_share_overhead() - 0.0216).abs() < 1e-12,
            "default overhead should be 2*(0.53+0.55)/100: {}",
            fees.per_share_overhead()
        );
    }

    #[test]
    fn test_single_pair_known_values() {
        let calls = vec![call(1.0, 100.0, 0.3)];
        let puts = vec![put(1.0, 95.0, 0.3)];
        let combo = find_best_pair(&calls, &puts, FeeSchedule::default())
            .expect("one valid pair must produce a combination");

        assert!((combo.strangle_costs - 2.0216).abs() < 1e-12);
        assert!((combo.upper_breakeven - 102.0216).abs() < 1e-12);
        assert!((combo.lower_breakeven - 92.9784).abs() < 1e-12);
        assert!((combo.breakeven_difference - 9.0432).abs() < 1e-12);
        assert!((combo.average_strike_price - 97.5).abs() < 1e-12);
        assert!(
            (combo.normalized_difference - 0.09275).abs() < 1e-5,
            "normalized difference should be ~0.09275: {}",
            combo.normalized_difference
        );
    }

    #[test]
    fn test_derived_fields_recompute_exactly() {
        let calls = vec![call(1.1, 105.0, 0.25), call(0.8, 110.0, 0.28)];
        let puts = vec![put(0.9, 95.0, 0.27), put(1.3, 100.0, 0.31)];
        let combo = find_best_pair(&calls, &puts, FeeSchedule::default()).unwrap();

        assert_eq!(
            combo.upper_breakeven,
            combo.call.strike_price + combo.strangle_costs
        );
        assert_eq!(
            combo.lower_breakeven,
            combo.put.strike_price - combo.strangle_costs
        );
        assert_eq!(
            combo.breakeven_difference,
            (combo.upper_breakeven - combo.lower_breakeven).abs()
        );
        assert_eq!(
            combo.average_strike_price,
            0.5 * (combo.call.strike_price + combo.put.strike_price)
        );
        assert_eq!(
            combo.normalized_difference,
            combo.breakeven_difference / combo.average_strike_price
        );
    }

    #[test]
    fn test_minimum_over_full_grid() {
        let calls = vec![
            call(2.1, 100.0, 0.30),
            call(1.4, 105.0, 0.28),
            call(0.9, 110.0, 0.26),
        ];
        let puts = vec![
            put(1.8, 100.0, 0.32),
            put(1.1, 95.0, 0.29),
            put(0.7, 90.0, 0.27),
        ];
        let fees = FeeSchedule::default();
        let combo = find_best_pair(&calls, &puts, fees).unwrap();

        for c in &calls {
            for p in &puts {
                let nd = normalized_diff(c, p, fees.per_share_overhead());
                assert!(
                    combo.normalized_difference <= nd,
                    "returned pair ({}) beaten by another pair ({nd})",
                    combo.normalized_difference
                );
            }
        }
    }

    #[test]
    fn test_tie_break_keeps_earliest_call() {
        // Identical metrics; IV differs only to tell the contracts apart.
        let calls = vec![call(1.0, 100.0, 0.11), call(1.0, 100.0, 0.22)];
        let puts = vec![put(1.0, 95.0, 0.3)];
        let combo = find_best_pair(&calls, &puts, FeeSchedule::default()).unwrap();
        assert_eq!(
            combo.call.implied_volatility, 0.11,
            "tie must retain the first call in iteration order"
        );
    }

    #[test]
    fn test_tie_break_keeps_earliest_put() {
        let calls = vec![call(1.0, 100.0, 0.3)];
        let puts = vec![put(1.0, 95.0, 0.11), put(1.0, 95.0, 0.22)];
        let combo = find_best_pair(&calls, &puts, FeeSchedule::default()).unwrap();
        assert_eq!(
            combo.put.implied_volatility, 0.11,
            "tie must retain the first put in iteration order"
        );
    }

    #[test]
    fn test_empty_inputs_return_none() {
        let calls = vec![call(1.0, 100.0, 0.3)];
        let puts = vec![put(1.0, 95.0, 0.3)];
        assert!(find_best_pair(&[], &puts, FeeSchedule::default()).is_none());
        assert!(find_best_pair(&calls, &[], FeeSchedule::default()).is_none());
        assert!(find_best_pair(&[], &[], FeeSchedule::default()).is_none());
    }

    #[test]
    fn test_zero_strike_pairs_skipped() {
        // Malformed zero-strike pair would divide by zero; it must be
        // skipped in favor of the valid pair.
        let calls = vec![call(1.0, 0.0, 0.3), call(1.0, 100.0, 0.3)];
        let puts = vec![put(1.0, 0.0, 0.3), put(1.0, 95.0, 0.3)];
        let combo = find_best_pair(&calls, &puts, FeeSchedule::default()).unwrap();
        assert_eq!(combo.call.strike_price, 100.0);
        assert_eq!(combo.put.strike_price, 95.0);

        // Nothing but degenerate pairs: no result at all.
        let bad_calls = vec![call(1.0, 0.0, 0.3)];
        let bad_puts = vec![put(1.0, 0.0, 0.3)];
        assert!(find_best_pair(&bad_calls, &bad_puts, FeeSchedule::default()).is_none());
    }

    #[test]
    fn test_pairs_considered_counts_grid() {
        let calls = vec![call(1.0, 100.0, 0.3), call(1.2, 105.0, 0.3)];
        let puts = vec![
            put(1.0, 95.0, 0.3),
            put(1.1, 90.0, 0.3),
            put(0.9, 85.0, 0.3),
        ];
        let combo = find_best_pair(&calls, &puts, FeeSchedule::default()).unwrap();
        assert_eq!(combo.pairs_considered, 6);
    }

    #[test]
    fn test_combination_serializes_for_reporting() {
        let calls = vec![call(1.0, 100.0, 0.3)];
        let puts = vec![put(1.0, 95.0, 0.3)];
        let combo = find_best_pair(&calls, &puts, FeeSchedule::default()).unwrap();
        let json = serde_json::to_value(combo).unwrap();
        assert!(json.get("normalized_difference").is_some());
        assert!(json.get("upper_breakeven").is_some());
        assert_eq!(json["call"]["contract_type"], "call");
    }
}
