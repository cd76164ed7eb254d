//! Balanced-strangle selection and closed-form risk estimates.
//!
//! Two independent components composed by the caller: an exhaustive
//! search over candidate (call, put) pairings ranked by normalized
//! breakeven spread, and a stateless risk model estimating how a chosen
//! pairing behaves under a lognormal price assumption. All operations are
//! synchronous, pure, and allocation-free beyond the returned values; the
//! embedding adapter owns contract-list construction, market data, and
//! any I/O.

pub mod config;
pub mod errors;
pub mod risk;
pub mod search;
pub mod types;

pub use config::AppConfig;
pub use errors::{EngineError, EngineResult};
pub use risk::{
    assess, expected_gain, probability_of_profit, seconds_until_expiration, variability_ratio,
    RiskAssessment, StranglePosition, CONTRACT_MULTIPLIER, SECONDS_PER_YEAR,
};
pub use search::{find_best_pair, FeeSchedule};
pub use types::{Contract, ContractType, StrangleCombination};
