use thiserror::Error;

/// Errors raised while deriving or comparing ring keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// The value has no ring key: it cannot be hashed, or its key would not
    /// be comparable with the others (NaN, out of range integers...).
    #[error("Unhashable value: {0}")]
    UnhashableValue(String),
}

pub type RingResult<T> = Result<T, RingError>;
