//! Xbox Live, XSTS and Minecraft services login (stages 2 to 4).

use log::{debug, warn};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::auth_failure;
use super::tokens::{MinecraftToken, OAuthToken, XblToken, XstsToken};
use crate::config::{XBL_RELYING_PARTY, XBL_SITE_NAME, XSTS_RELYING_PARTY};
use crate::dispatch::{ClassifiedResponse, Dispatcher};
use crate::error_handling::{ApiError, ApiResult};

/// Response from the Xbox Live token endpoints.
#[derive(Deserialize)]
struct XboxAuthResponse {
    #[serde(rename = "Token")]
    token: String,
    #[serde(rename = "DisplayClaims")]
    display_claims: DisplayClaims,
}

#[derive(Deserialize)]
struct DisplayClaims {
    xui: Vec<Xui>,
}

#[derive(Deserialize)]
struct Xui {
    uhs: String,
}

/// Human-readable reason for the XSTS error codes players commonly hit.
pub fn describe_xerr(code: &str) -> Option<&'static str> {
    match code {
        "2148916233" => Some("the account has no Xbox profile"),
        "2148916235" => Some("Xbox Live is not available in the account's country"),
        "2148916236" | "2148916237" => Some("the account needs adult verification"),
        "2148916238" => Some("the account is a child account and must be added to a family"),
        _ => None,
    }
}

fn xerr_failure(code: &str) -> ApiError {
    let mut message = format!("XSTS returned error code {code}");
    if let Some(reason) = describe_xerr(code) {
        message.push_str(": ");
        message.push_str(reason);
    }
    ApiError::Authentication(message)
}

fn xerr_code(object: &Map<String, Value>) -> Option<String> {
    match object.get("XErr")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Stage 2: trades a Microsoft access token for an Xbox Live user token.
///
/// # Errors
///
/// `Authentication("invalid access token")` if no token object comes back;
/// upstream and transport errors.
pub async fn authenticate_xbl(dispatcher: &Dispatcher, token: OAuthToken) -> ApiResult<XblToken> {
    let payload = json!({
        "Properties": {
            "AuthMethod": "RPS",
            "SiteName": XBL_SITE_NAME,
            "RpsTicket": format!("d={}", token.secret()),
        },
        "RelyingParty": XBL_RELYING_PARTY,
        "TokenType": "JWT",
    });

    let response = dispatcher
        .post_json(&dispatcher.config().xbl_url, &payload)
        .await
        .map_err(auth_failure)?;

    let xbl = response
        .into_object()
        .and_then(|object| object.get("Token").and_then(Value::as_str).map(XblToken::new))
        .ok_or_else(|| ApiError::Authentication("invalid access token".into()));

    match &xbl {
        Ok(_) => debug!("Obtained Xbox Live user token"),
        Err(e) => warn!("Xbox Live authentication failed: {}", e),
    }
    xbl
}

/// Stage 3: trades an Xbox Live user token for an XSTS token and user hash.
///
/// # Errors
///
/// `Authentication` embedding the `XErr` code whenever the response carries
/// one (on a 200 as well as on a 401), or if the token/user hash is missing;
/// upstream and transport errors.
pub async fn authorize_xsts(dispatcher: &Dispatcher, token: XblToken) -> ApiResult<XstsToken> {
    let payload = json!({
        "Properties": {
            "SandboxId": "RETAIL",
            "UserTokens": [token.secret()],
        },
        "RelyingParty": XSTS_RELYING_PARTY,
        "TokenType": "JWT",
    });

    let response = dispatcher
        .post_json(&dispatcher.config().xsts_url, &payload)
        .await
        .map_err(auth_failure)?;

    let xsts = match response {
        ClassifiedResponse::JsonObject(object) => match xerr_code(&object) {
            Some(code) => Err(xerr_failure(&code)),
            None => serde_json::from_value::<XboxAuthResponse>(Value::Object(object))
                .ok()
                .and_then(|r| {
                    let uhs = r.display_claims.xui.into_iter().next()?.uhs;
                    Some(XstsToken::new(r.token, uhs))
                })
                .ok_or_else(|| {
                    ApiError::Authentication("XSTS response has no token or user hash".into())
                }),
        },
        ClassifiedResponse::Unrecognized(raw) => match raw.json_field("XErr") {
            Some(code) => Err(xerr_failure(&code)),
            None => Err(ApiError::Authentication("invalid Xbox Live user token".into())),
        },
        _ => Err(ApiError::Authentication("invalid Xbox Live user token".into())),
    };

    match &xsts {
        Ok(_) => debug!("Obtained XSTS token"),
        Err(e) => warn!("XSTS authorization failed: {}", e),
    }
    xsts
}

/// Stage 4: logs in to Minecraft services with the XSTS token.
///
/// # Errors
///
/// `Authentication` carrying the service's `error` field if no access token
/// comes back; upstream and transport errors.
pub async fn login_with_xbox(dispatcher: &Dispatcher, token: XstsToken) -> ApiResult<MinecraftToken> {
    let payload = json!({ "identityToken": token.identity_token() });
    let url = dispatcher.config().minecraft_login_url();

    let response = dispatcher
        .post_json(&url, &payload)
        .await
        .map_err(auth_failure)?;

    let minecraft = match response {
        ClassifiedResponse::JsonObject(object) => object
            .get("access_token")
            .and_then(Value::as_str)
            .map(MinecraftToken::new)
            .ok_or_else(|| {
                ApiError::Authentication("login response has no access_token".into())
            }),
        ClassifiedResponse::Unrecognized(raw) => Err(ApiError::Authentication(
            raw.json_field("error")
                .or_else(|| raw.json_field("errorMessage"))
                .unwrap_or_else(|| format!("login returned status {}", raw.status)),
        )),
        other => Err(ApiError::Authentication(format!(
            "login returned a {} body",
            other.kind()
        ))),
    };

    match &minecraft {
        Ok(_) => debug!("Obtained Minecraft access token"),
        Err(e) => warn!("Minecraft services login failed: {}", e),
    }
    minecraft
}
