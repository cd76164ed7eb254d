use serde::{Deserialize, Serialize};

// ── Contracts ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    Call,
    Put,
}

impl std::fmt::Display for ContractType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// A single option contract as quoted by the market-data layer.
/// Immutable value: the search reads these, never mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Price paid per underlying share for the option.
    pub premium: f64,
    /// Strike price (must be > 0; enforced upstream).
    pub strike_price: f64,
    /// Annualized implied volatility.
    pub implied_volatility: f64,
    /// Call or put. Informational only: the search takes calls and puts
    /// in separate lists and never branches on this field.
    pub contract_type: ContractType,
}

// ── Search result ──

/// The winning (call, put) pairing with every quantity derived while
/// ranking it. `normalized_difference` is the sole ranking key; the rest
/// are retained for downstream reporting, never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrangleCombination {
    pub call: Contract,
    pub put: Contract,
    /// Total premium outlay plus the per-share fee overhead.
    pub strangle_costs: f64,
    /// Call strike + strangle_costs.
    pub upper_breakeven: f64,
    /// Put strike - strangle_costs.
    pub lower_breakeven: f64,
    /// |upper_breakeven - lower_breakeven|.
    pub breakeven_difference: f64,
    /// Mean of the two strikes.
    pub average_strike_price: f64,
    /// breakeven_difference / average_strike_price.
    pub normalized_difference: f64,
    /// How many (call, put) pairs the scan covered.
    pub pairs_considered: usize,
}
