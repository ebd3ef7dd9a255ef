//! Public Mojang API operations.
//!
//! `MojangApi` groups the unauthenticated endpoints:
//! - username -> id resolution (single and batched)
//! - profiles, textures and name history
//! - sales statistics
//! - the blocked-server list
//!
//! Calls are issued one at a time, in order; nothing is cached or retried.

mod blocked;
mod profile;
mod resolve;
mod statistics;

pub use blocked::{blocked_candidates, is_server_blocked, server_hash};
pub use profile::ProfileQuery;
pub use statistics::parse_metrics;

use crate::config::Config;
use crate::dispatch::{ClassifiedResponse, Dispatcher};
use crate::error_handling::{ApiError, InitializationError};

/// Client for the public Mojang endpoints.
#[derive(Debug, Clone)]
pub struct MojangApi {
    dispatcher: Dispatcher,
}

impl MojangApi {
    /// Builds a client with its own HTTP connection pool.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, InitializationError> {
        Ok(Self::with_dispatcher(Dispatcher::new(config)?))
    }

    /// Builds a client that shares an existing dispatcher.
    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// The dispatcher used for every request.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn config(&self) -> &Config {
        self.dispatcher.config()
    }
}

/// Maps a response with no usable shape to an error.
fn unexpected(response: ClassifiedResponse, what: &str) -> ApiError {
    match response {
        ClassifiedResponse::Unrecognized(raw) => ApiError::UnexpectedStatus { status: raw.status },
        other => ApiError::MalformedPayload(format!("{what} returned a {} body", other.kind())),
    }
}
