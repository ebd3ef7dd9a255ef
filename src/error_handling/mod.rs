//! Error handling.
//!
//! Errors are split into:
//! - **Initialization errors**: logger or HTTP client setup failed
//! - **API errors**: precondition failures, upstream failures, domain errors
//!   reported by the service, and login chain failures

mod types;

// Re-export public API
pub use types::{ApiError, InitializationError};

/// Result alias used by every API operation.
pub type ApiResult<T> = Result<T, ApiError>;
