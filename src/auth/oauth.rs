//! Microsoft OAuth (stage 1).

use log::{debug, warn};
use serde_json::Value;
use url::Url;

use super::tokens::OAuthToken;
use super::auth_failure;
use crate::config::OAUTH_SCOPE;
use crate::dispatch::{ClassifiedResponse, Dispatcher};
use crate::error_handling::{ApiError, ApiResult};

/// Authorization-code flow against `login.live.com`.
#[derive(Debug, Clone)]
pub struct MicrosoftOAuth {
    dispatcher: Dispatcher,
}

impl MicrosoftOAuth {
    /// Uses the client id, redirect URI and endpoints from the dispatcher's config.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    fn client_id(&self) -> ApiResult<&str> {
        self.dispatcher
            .config()
            .client_id
            .as_deref()
            .ok_or_else(|| ApiError::Configuration("an OAuth client id is required".into()))
    }

    /// Builds the page URL the user must visit to grant access.
    ///
    /// `state` is echoed back on the redirect and should be checked by the caller.
    ///
    /// # Errors
    ///
    /// `Configuration` without a client id, `InvalidUrl` if the configured
    /// authorization endpoint does not parse.
    pub fn build_authorization_url(&self, state: Option<&str>) -> ApiResult<Url> {
        let config = self.dispatcher.config();
        let mut url = Url::parse(&config.oauth_authorize_url)?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("client_id", self.client_id()?)
                .append_pair("response_type", "code")
                .append_pair("redirect_uri", &config.redirect_uri)
                .append_pair("scope", OAUTH_SCOPE);
            if let Some(state) = state {
                query.append_pair("state", state);
            }
        }
        Ok(url)
    }

    /// Exchanges an authorization code for a Microsoft access token.
    ///
    /// # Errors
    ///
    /// `Authentication` carrying the service's `error_description` when the
    /// response is not a token object; `Configuration` without a client id;
    /// upstream and transport errors.
    pub async fn exchange_code(&self, code: &str) -> ApiResult<OAuthToken> {
        let config = self.dispatcher.config();
        let form = [
            ("client_id", self.client_id()?),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .dispatcher
            .post_form(&config.oauth_token_url, &form)
            .await
            .map_err(auth_failure)?;

        let token = match response {
            ClassifiedResponse::JsonObject(object) => object
                .get("access_token")
                .and_then(Value::as_str)
                .map(OAuthToken::new)
                .ok_or_else(|| {
                    ApiError::Authentication(
                        object
                            .get("error_description")
                            .and_then(Value::as_str)
                            .unwrap_or("token response has no access_token")
                            .to_string(),
                    )
                }),
            ClassifiedResponse::Unrecognized(raw) => Err(ApiError::Authentication(
                raw.json_field("error_description").unwrap_or_else(|| {
                    format!("token endpoint returned status {}", raw.status)
                }),
            )),
            other => Err(ApiError::Authentication(format!(
                "token endpoint returned a {} body",
                other.kind()
            ))),
        };

        match &token {
            Ok(_) => debug!("Obtained Microsoft access token"),
            Err(e) => warn!("Authorization code exchange failed: {}", e),
        }
        token
    }
}
