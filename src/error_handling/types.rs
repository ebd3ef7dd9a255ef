//! Error type definitions.
//!
//! This module defines all error types used throughout the client.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors returned by API operations.
///
/// Precondition failures (`NoMetrics`, `InvalidMetric`, `Configuration`) are raised
/// before any request is sent. A lookup that simply finds nothing is not an error;
/// those operations return `None` or an empty result instead.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The upstream answered with a 5xx status.
    #[error("Upstream unavailable: received status {status}")]
    UpstreamUnavailable {
        /// HTTP status code received
        status: u16,
    },

    /// A successful response carried an `error` field.
    #[error("API returned error {error}: {}", message.as_deref().unwrap_or("no message"))]
    Domain {
        /// Value of the `error` field
        error: String,
        /// Value of the `errorMessage` field, if present
        message: Option<String>,
    },

    /// A stage of the login chain did not produce the expected token.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Statistics were requested without any metric.
    #[error("At least one metric must be provided")]
    NoMetrics,

    /// A metric key outside the supported set was requested.
    #[error("{0} is not a valid metric")]
    InvalidMetric(String),

    /// The client is missing a setting required by the operation.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A call that has no soft "not found" outcome got an unclassified status.
    #[error("Unexpected response status {status}")]
    UnexpectedStatus {
        /// HTTP status code received
        status: u16,
    },

    /// A response had the right shape but unexpected contents.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// The request could not be sent or its body could not be read.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] ReqwestError),

    /// A configured endpoint is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Returns true for the errors raised before any network call.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ApiError::NoMetrics | ApiError::InvalidMetric(_) | ApiError::Configuration(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display_with_message() {
        let err = ApiError::Domain {
            error: "ForbiddenOperationException".to_string(),
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "API returned error ForbiddenOperationException: Invalid credentials"
        );
    }

    #[test]
    fn test_domain_error_display_without_message() {
        let err = ApiError::Domain {
            error: "IllegalArgumentException".to_string(),
            message: None,
        };
        assert_eq!(
            err.to_string(),
            "API returned error IllegalArgumentException: no message"
        );
    }

    #[test]
    fn test_upstream_unavailable_display() {
        let err = ApiError::UpstreamUnavailable { status: 503 };
        assert_eq!(err.to_string(), "Upstream unavailable: received status 503");
    }

    #[test]
    fn test_precondition_classification() {
        assert!(ApiError::NoMetrics.is_precondition());
        assert!(ApiError::InvalidMetric("x".to_string()).is_precondition());
        assert!(ApiError::Configuration("client id".to_string()).is_precondition());
        assert!(!ApiError::Authentication("stage".to_string()).is_precondition());
        assert!(!ApiError::UpstreamUnavailable { status: 500 }.is_precondition());
    }
}
