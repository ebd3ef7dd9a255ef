//! Configuration constants.
//!
//! This module defines the default endpoints, limits and timeouts used
//! throughout the client.

// Mojang endpoints
/// Base URL of the Mojang account API (usernames, statistics, name history).
pub const DEFAULT_API_BASE: &str = "https://api.mojang.com";
/// Base URL of the session server (profiles, blocked servers).
pub const DEFAULT_SESSION_SERVER: &str = "https://sessionserver.mojang.com";
/// Base URL of the Minecraft services API (login, account profile, attributes).
pub const DEFAULT_SERVICES_BASE: &str = "https://api.minecraftservices.com";

// Microsoft / Xbox Live endpoints
/// Microsoft OAuth authorization page the user visits out-of-band.
pub const DEFAULT_OAUTH_AUTHORIZE_URL: &str = "https://login.live.com/oauth20_authorize.srf";
/// Microsoft OAuth token endpoint (authorization code -> access token).
pub const DEFAULT_OAUTH_TOKEN_URL: &str = "https://login.live.com/oauth20_token.srf";
/// Xbox Live user authentication endpoint.
pub const DEFAULT_XBL_URL: &str = "https://user.auth.xboxlive.com/user/authenticate";
/// Xbox Live security token service endpoint.
pub const DEFAULT_XSTS_URL: &str = "https://xsts.auth.xboxlive.com/xsts/authorize";
/// Path of the Minecraft login endpoint, relative to the services base.
pub const MINECRAFT_LOGIN_PATH: &str = "/authentication/login_with_xbox";

/// Redirect URI used when none is configured.
pub const DEFAULT_REDIRECT_URI: &str = "https://localhost";
/// Scope requested from Microsoft for the Xbox Live sign-in.
pub const OAUTH_SCOPE: &str = "XboxLive.signin offline_access";
/// Relying party for the Xbox Live user token.
pub const XBL_RELYING_PARTY: &str = "http://auth.xboxlive.com";
/// Site name sent with the Xbox Live RPS ticket.
pub const XBL_SITE_NAME: &str = "user.auth.xboxlive.com";
/// Relying party for the XSTS token used by Minecraft services.
pub const XSTS_RELYING_PARTY: &str = "rp://api.minecraftservices.com/";

// Request limits
/// Maximum number of usernames accepted by `POST /profiles/minecraft`.
pub const USERNAME_BATCH_SIZE: usize = 10;
/// Longest username the API accepts before it starts returning errors.
pub const MAX_USERNAME_LENGTH: usize = 25;
/// Length of `http://textures.minecraft.net/texture/`; the texture id follows it.
pub const TEXTURE_URL_PREFIX_LEN: usize = 38;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default UUID version accepted as a well-formed identifier.
///
/// `None` accepts any parseable UUID, which is what the service actually hands out
/// for older accounts.
pub const DEFAULT_UUID_VERSION: Option<usize> = None;

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("mojang_client/", env!("CARGO_PKG_VERSION"));
