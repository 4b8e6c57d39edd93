//! Crate error model.

use thiserror::Error;

/// Result type used by the strict validation paths.
pub type EntityResult<T> = Result<T, EntityError>;

/// Errors surfaced by opt-in validation.
///
/// Timestamp decoding and projection never return these: by contract they
/// report failure through sentinel values and silent skips. Only callers
/// that explicitly ask for validation (e.g. `Snowflake::from_str`) see them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntityError {
    /// A snowflake token was empty or not a decimal integer.
    #[error("invalid snowflake: {0:?}")]
    InvalidSnowflake(String),

    /// A snowflake token does not fit an unsigned 64-bit integer.
    #[error("snowflake out of range: {0:?}")]
    SnowflakeOutOfRange(String),
}
