use crate::errors::{EngineError, EngineResult};
use crate::search::FeeSchedule;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub fees: FeeSchedule,
}

impl AppConfig {
    pub fn from_env() -> EngineResult<Self> {
        dotenvy::dotenv().ok();

        let contract_fee = env_var_or("CONTRACT_FEE", "1.08")
            .parse::<f64>()
            .map_err(|e| EngineError::Config(format!("CONTRACT_FEE: {e}")))?;

        Ok(Self {
            fees: FeeSchedule { contract_fee },
        })
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
