/// Domain-specific error types for the strangle engine.
/// The computational core never signals: bad numeric inputs degrade to
/// sentinel results (`None`, `0.0`) instead of erroring. Only the
/// configuration layer can fail.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("config error: {0}")]
    Config(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
