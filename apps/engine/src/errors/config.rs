use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key}={value} is not a valid value")]
    InvalidValue { key: &'static str, value: String },
    #[error("channel capacity {0} must be at least 1")]
    ZeroCapacity(&'static str),
}
