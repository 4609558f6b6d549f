use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("upper bound must be at least {min}, got {got}")]
    LimitTooSmall { min: u64, got: u64 },
    #[error("upper bound must be at most {max}, got {got}")]
    LimitTooLarge { max: u64, got: u64 },
    #[error("invalid upper bound {0:?}")]
    InvalidLimit(String),
    #[error("unknown strategy {0:?} (expected direct, array or map)")]
    UnknownStrategy(String),
}
