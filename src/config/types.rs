//! Configuration types.
//!
//! This module defines the enums and structs shared by the library and the
//! command-line binary.

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_API_BASE, DEFAULT_OAUTH_AUTHORIZE_URL, DEFAULT_OAUTH_TOKEN_URL, DEFAULT_REDIRECT_URI,
    DEFAULT_SERVICES_BASE, DEFAULT_SESSION_SERVER, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    DEFAULT_UUID_VERSION, DEFAULT_XBL_URL, DEFAULT_XSTS_URL, MINECRAFT_LOGIN_PATH,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Client configuration.
///
/// Every endpoint the client talks to is a field here rather than a global, so
/// a caller (or a test) can point the whole client at another host.
///
/// # Examples
///
/// ```no_run
/// use mojang_client::Config;
///
/// let config = Config {
///     client_id: Some("00000000-0000-0000-0000-000000000000".to_string()),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Mojang account API base URL
    pub api_base: String,

    /// Session server base URL
    pub session_server: String,

    /// Minecraft services base URL
    pub services_base: String,

    /// Microsoft OAuth authorization page
    pub oauth_authorize_url: String,

    /// Microsoft OAuth token endpoint
    pub oauth_token_url: String,

    /// Xbox Live user authentication endpoint
    pub xbl_url: String,

    /// Xbox Live security token service endpoint
    pub xsts_url: String,

    /// Azure application (client) id used for the OAuth flow
    pub client_id: Option<String>,

    /// Redirect URI registered for the Azure application
    pub redirect_uri: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// UUID version an identifier must carry to count as well-formed (`None` = any)
    pub uuid_version: Option<usize>,
}

impl Config {
    /// Full URL of the Minecraft `login_with_xbox` endpoint.
    pub fn minecraft_login_url(&self) -> String {
        format!("{}{}", self.services_base, MINECRAFT_LOGIN_PATH)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            api_base: DEFAULT_API_BASE.to_string(),
            session_server: DEFAULT_SESSION_SERVER.to_string(),
            services_base: DEFAULT_SERVICES_BASE.to_string(),
            oauth_authorize_url: DEFAULT_OAUTH_AUTHORIZE_URL.to_string(),
            oauth_token_url: DEFAULT_OAUTH_TOKEN_URL.to_string(),
            xbl_url: DEFAULT_XBL_URL.to_string(),
            xsts_url: DEFAULT_XSTS_URL.to_string(),
            client_id: None,
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            uuid_version: DEFAULT_UUID_VERSION,
        }
    }
}
