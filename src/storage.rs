//! Shared error vocabulary for the external persistence capability.
//!
//! Adapters map backend-specific failures (HTTP faults, row-level security
//! rejections, timeouts) onto these variants. A timed-out call is a plain
//! failure: the caller must assume nothing was applied.

/// Error enumeration for persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage call exceeded {0} ms")]
    TimedOut(u64),
}
