//! Request dispatch.
//!
//! `Dispatcher` is the only place that touches the network. Every call sends one
//! request, reads the full body, and runs it through [`classify`]. Callers then
//! match on the `ClassifiedResponse` to decide whether they got what they asked for.

mod classify;

use std::borrow::Cow;
use std::sync::Arc;

use bytes::Bytes;
use log::debug;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error_handling::{ApiResult, InitializationError};
use crate::initialization::init_client;

pub use classify::{classify, ClassifiedResponse};

/// Status and body of a response, before classification.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Full response body
    pub body: Bytes,
}

impl RawResponse {
    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Reads a top-level string field from a JSON object body, if there is one.
    ///
    /// Used to pull error descriptions out of responses the classifier left
    /// unrecognized (e.g. a 400 from the OAuth token endpoint).
    pub fn json_field(&self, field: &str) -> Option<String> {
        let value: Value = serde_json::from_slice(&self.body).ok()?;
        match value.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// Sends requests to the configured endpoints and classifies the responses.
///
/// Cheap to clone: the HTTP client and config are shared.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: Arc<reqwest::Client>,
    config: Arc<Config>,
}

impl Dispatcher {
    /// Builds a dispatcher with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: Config) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        Ok(Self::with_client(client, Arc::new(config)))
    }

    /// Builds a dispatcher around an existing client.
    pub fn with_client(client: Arc<reqwest::Client>, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    /// The configuration this dispatcher was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `GET url`.
    pub async fn get(&self, url: &str) -> ApiResult<ClassifiedResponse> {
        self.execute("GET", url, self.client.get(url)).await
    }

    /// `GET url` with a bearer token.
    pub async fn get_authorized(&self, url: &str, token: &str) -> ApiResult<ClassifiedResponse> {
        let request = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {token}"));
        self.execute("GET", url, request).await
    }

    /// `POST url` with a JSON body.
    pub async fn post_json<T>(&self, url: &str, body: &T) -> ApiResult<ClassifiedResponse>
    where
        T: Serialize + ?Sized,
    {
        self.execute("POST", url, self.client.post(url).json(body))
            .await
    }

    /// `POST url` with a form-encoded body.
    pub async fn post_form<T>(&self, url: &str, body: &T) -> ApiResult<ClassifiedResponse>
    where
        T: Serialize + ?Sized,
    {
        self.execute("POST", url, self.client.post(url).form(body))
            .await
    }

    async fn execute(
        &self,
        method: &str,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> ApiResult<ClassifiedResponse> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        let classified = classify(RawResponse { status, body });

        match &classified {
            Ok(c) => debug!("{} {} -> {} ({})", method, url, status, c.kind()),
            Err(e) => debug!("{} {} -> {} ({})", method, url, status, e),
        }
        classified
    }
}
