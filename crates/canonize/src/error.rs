//! Error types for the bounded encoder
//!
//! The core encoder is total and has no error path. Errors exist only at
//! the edges, currently the depth guard for untrusted input.

use thiserror::Error;

/// Errors from [`canonize_bounded`](crate::canonize_bounded)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DepthError {
    #[error("structural depth exceeds the configured limit of {limit}")]
    LimitExceeded { limit: usize },
}
