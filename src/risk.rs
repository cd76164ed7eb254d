//! Closed-form risk/reward estimates for a strangle position.
//!
//! Everything here is stateless: a small price bundle with one method,
//! plus free functions that take all parameters explicitly. The price
//! model is lognormal with volatility scaled by the square root of the
//! remaining horizon; no discounting is applied.

use crate::types::StrangleCombination;
use statrs::distribution::{ContinuousCDF, Normal};

/// Seconds in a 365-day year, the horizon scale for annualized vol.
pub const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Shares per option contract.
pub const CONTRACT_MULTIPLIER: f64 = 100.0;

/// Annualized vol scaled down to the remaining horizon.
#[inline]
fn horizon_sigma(implied_volatility: f64, seconds_to_expiration: f64) -> f64 {
    implied_volatility * (seconds_to_expiration / SECONDS_PER_YEAR).sqrt()
}

// ── Position ──

/// Current underlying price bracketed by the position's breakevens.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct StranglePosition {
    pub stock_price: f64,
    pub upper_breakeven: f64,
    pub lower_breakeven: f64,
}

impl StranglePosition {
    pub fn new(stock_price: f64, upper_breakeven: f64, lower_breakeven: f64) -> Self {
        Self {
            stock_price,
            upper_breakeven,
            lower_breakeven,
        }
    }

    /// Fractional move to the nearer breakeven:
    ///
    /// min(|S - U|, |S - L|) / S
    ///
    /// The cushion left before the position starts losing money. Returns
    /// 0.0 when the stock price is non-positive or non-finite.
    #[inline]
    pub fn escape_ratio(&self) -> f64 {
        if self.stock_price <= 0.0 || !self.stock_price.is_finite() {
            return 0.0;
        }
        let to_upper = (self.stock_price - self.upper_breakeven).abs();
        let to_lower = (self.stock_price - self.lower_breakeven).abs();
        to_upper.min(to_lower) / self.stock_price
    }
}

// ── Closed-form estimates ──

/// Probability the underlying finishes outside both breakevens at
/// expiration.
///
/// P(profit) = (1 - Phi(z_up)) + Phi(-z_down)
///
/// where z_up and z_down are the fractional moves to each breakeven
/// standardized by sigma = iv * sqrt(t / SECONDS_PER_YEAR). The two tails
/// are disjoint, so their mass sums directly.
///
/// Returns exactly 0.0 when the horizon or sigma is non-positive.
pub fn probability_of_profit(
    stock_price: f64,
    upper_breakeven: f64,
    lower_breakeven: f64,
    implied_volatility: f64,
    seconds_to_expiration: f64,
) -> f64 {
    if seconds_to_expiration <= 0.0 {
        return 0.0;
    }
    let sigma = horizon_sigma(implied_volatility, seconds_to_expiration);
    if sigma <= 0.0 {
        return 0.0;
    }

    let move_up = (upper_breakeven - stock_price) / stock_price;
    let move_down = (stock_price - lower_breakeven) / stock_price;
    let z_up = move_up / sigma;
    let z_down = move_down / sigma;

    let normal = Normal::standard();
    (1.0 - normal.cdf(z_up)) + normal.cdf(-z_down)
}

/// Risk-neutral expected gain per contract for the long call + long put.
///
/// Call leg: d1 = (ln(S/K) + sigma^2/2) / sigma, d2 = d1 - sigma,
/// payoff = S*Phi(d1) - K*Phi(d2); put leg symmetric with sign flips.
/// The certain cost (premiums + brokerage, per share) is subtracted and
/// the result scaled by the 100-share contract multiplier.
///
/// Returns exactly 0.0 when the horizon or sigma is non-positive.
pub fn expected_gain(
    stock_price: f64,
    upper_strike: f64,
    lower_strike: f64,
    implied_volatility: f64,
    seconds_to_expiration: f64,
    total_premium_per_share: f64,
    brokerage_fees_per_share: f64,
) -> f64 {
    if seconds_to_expiration <= 0.0 {
        return 0.0;
    }
    let sigma = horizon_sigma(implied_volatility, seconds_to_expiration);
    if sigma <= 0.0 {
        return 0.0;
    }

    let normal = Normal::standard();

    // Call leg struck at the upper strike.
    let d1_call = ((stock_price / upper_strike).ln() + 0.5 * sigma * sigma) / sigma;
    let d2_call = d1_call - sigma;
    let call_value = stock_price * normal.cdf(d1_call) - upper_strike * normal.cdf(d2_call);

    // Put leg struck at the lower strike, sign-flipped.
    let d1_put = ((stock_price / lower_strike).ln() + 0.5 * sigma * sigma) / sigma;
    let d2_put = d1_put - sigma;
    let put_value = lower_strike * normal.cdf(-d2_put) - stock_price * normal.cdf(-d1_put);

    let certain_cost = total_premium_per_share + brokerage_fees_per_share;
    (call_value + put_value - certain_cost) * CONTRACT_MULTIPLIER
}

/// Realized dollar volatility of the underlying over a trailing window,
/// divided by the breakeven spread. Infinite when the spread is zero.
#[inline]
pub fn variability_ratio(stock_sigma: f64, breakeven_difference: f64) -> f64 {
    if breakeven_difference == 0.0 {
        return f64::INFINITY;
    }
    stock_sigma / breakeven_difference
}

// ── Aggregate assessment ──

/// The three risk metrics for one searched pairing. Stack-allocated.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct RiskAssessment {
    pub escape_ratio: f64,
    pub probability_of_profit: f64,
    pub expected_gain: f64,
}

/// Run the full risk model against a searched combination.
///
/// Probability uses the combination's breakevens with the mean of the two
/// legs' implied volatilities; expected gain uses its strikes, splitting
/// `strangle_costs` back into the premium part and the fee overhead.
pub fn assess(
    combo: &StrangleCombination,
    stock_price: f64,
    seconds_to_expiration: f64,
) -> RiskAssessment {
    let total_premium = combo.call.premium + combo.put.premium;
    let fee_overhead = combo.strangle_costs - total_premium;
    let mean_iv = 0.5 * (combo.call.implied_volatility + combo.put.implied_volatility);

    let position =
        StranglePosition::new(stock_price, combo.upper_breakeven, combo.lower_breakeven);

    RiskAssessment {
        escape_ratio: position.escape_ratio(),
        probability_of_profit: probability_of_profit(
            stock_price,
            combo.upper_breakeven,
            combo.lower_breakeven,
            mean_iv,
            seconds_to_expiration,
        ),
        expected_gain: expected_gain(
            stock_price,
            combo.call.strike_price,
            combo.put.strike_price,
            mean_iv,
            seconds_to_expiration,
            total_premium,
            fee_overhead,
        ),
    }
}

/// Seconds from now until an RFC 3339 expiration timestamp, clamped to
/// zero for past or unparseable inputs.
pub fn seconds_until_expiration(expiration_time: &str) -> f64 {
    let now = chrono::Utc::now();
    chrono::DateTime::parse_from_rfc3339(expiration_time)
        .ok()
        .map(|dt| (dt.with_timezone(&chrono::Utc) - now).num_seconds() as f64)
        .or_else(|| {
            chrono::NaiveDateTime::parse_from_str(expiration_time, "%Y-%m-%dT%H:%M:%SZ")
                .ok()
                .map(|dt| (dt.and_utc() - now).num_seconds() as f64)
        })
        .unwrap_or(0.0)
        .max(0.0)
}
