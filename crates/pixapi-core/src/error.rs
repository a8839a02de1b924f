//! Shared error type across pixapi crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, PixApiError>;

/// Unified error type used by core and gateway.
///
/// An unmatched route is not represented here: a path miss is a normal 404
/// response, not a fault. These variants cover configuration and startup,
/// which are fatal to the process.
#[derive(Debug, Error)]
pub enum PixApiError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}
