//! Microsoft account login.
//!
//! Logging in takes four dependent calls, made strictly one after another:
//!
//! 1. authorization code -> Microsoft access token (`login.live.com`)
//! 2. Microsoft access token -> Xbox Live user token
//! 3. Xbox Live user token -> XSTS token + user hash
//! 4. XSTS token + user hash -> Minecraft services access token
//!
//! A failing stage stops the chain; nothing is retried.

mod oauth;
mod session;
mod tokens;
mod xbox;

pub use oauth::MicrosoftOAuth;
pub use session::{AccountInfo, Session};
pub use tokens::{MinecraftToken, OAuthToken, XblToken, XstsToken};
pub use xbox::{authenticate_xbl, authorize_xsts, describe_xerr, login_with_xbox};

use log::info;
use url::Url;

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error_handling::{ApiError, ApiResult, InitializationError};

/// Reports a domain error raised during login as an authentication failure.
fn auth_failure(err: ApiError) -> ApiError {
    match err {
        ApiError::Domain { error, message } => ApiError::Authentication(match message {
            Some(message) => format!("{error}: {message}"),
            None => error,
        }),
        other => other,
    }
}

/// What the caller already holds.
#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    /// A Minecraft services access token; skips the whole chain.
    pub access_token: Option<String>,
    /// An authorization code from the OAuth redirect.
    pub code: Option<String>,
    /// Anti-forgery value to embed in the authorization URL.
    pub state: Option<String>,
}

/// Result of [`Authenticator::login`].
#[derive(Debug)]
pub enum LoginOutcome {
    /// Neither a token nor a code was given; the user must visit this URL first.
    AuthorizationUrl(Url),
    /// Logged in.
    Authenticated(Session),
}

/// Entry point for logging in.
///
/// # Example
///
/// ```no_run
/// use mojang_client::{Authenticator, Config, LoginOutcome, LoginRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     client_id: Some("my-azure-client-id".to_string()),
///     ..Default::default()
/// };
/// let auth = Authenticator::new(config)?;
///
/// match auth.login(LoginRequest::default()).await? {
///     LoginOutcome::AuthorizationUrl(url) => println!("Visit {url}"),
///     LoginOutcome::Authenticated(session) => println!("Hello {}", session.account().name),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Authenticator {
    dispatcher: Dispatcher,
    oauth: MicrosoftOAuth,
}

impl Authenticator {
    /// Builds an authenticator with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, InitializationError> {
        Ok(Self::with_dispatcher(Dispatcher::new(config)?))
    }

    /// Builds an authenticator that shares an existing dispatcher.
    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self {
            oauth: MicrosoftOAuth::new(dispatcher.clone()),
            dispatcher,
        }
    }

    /// The OAuth stage, for callers that want to drive it directly.
    pub fn oauth(&self) -> &MicrosoftOAuth {
        &self.oauth
    }

    /// Logs in with whatever the caller holds.
    ///
    /// - access token: opens a session directly
    /// - authorization code: runs all four stages, then opens a session
    /// - neither: returns the authorization URL to visit
    ///
    /// # Errors
    ///
    /// `Authentication` from any stage, `Configuration` if a client id is
    /// needed but missing, upstream and transport errors.
    pub async fn login(&self, request: LoginRequest) -> ApiResult<LoginOutcome> {
        let token = match (request.access_token, request.code) {
            (Some(access_token), _) => MinecraftToken::new(access_token),
            (None, Some(code)) => self.exchange_code(&code).await?,
            (None, None) => {
                let url = self.oauth.build_authorization_url(request.state.as_deref())?;
                return Ok(LoginOutcome::AuthorizationUrl(url));
            }
        };

        let session = Session::new(self.dispatcher.clone(), token).await?;
        info!("Logged in as {}", session.account().name);
        Ok(LoginOutcome::Authenticated(session))
    }

    /// Runs stages 1 to 4, turning an authorization code into a Minecraft token.
    ///
    /// # Errors
    ///
    /// The first failing stage's error; later stages are not called.
    pub async fn exchange_code(&self, code: &str) -> ApiResult<MinecraftToken> {
        let oauth = self.oauth.exchange_code(code).await?;
        let xbl = authenticate_xbl(&self.dispatcher, oauth).await?;
        let xsts = authorize_xsts(&self.dispatcher, xbl).await?;
        login_with_xbox(&self.dispatcher, xsts).await
    }
}
