//! Authenticated Minecraft services session.

use log::debug;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::tokens::MinecraftToken;
use crate::api::MojangApi;
use crate::dispatch::{ClassifiedResponse, Dispatcher};
use crate::error_handling::{ApiError, ApiResult};
use crate::models::ProfileRecord;

/// Account details returned by `GET /minecraft/profile`.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountInfo {
    /// Account id
    pub id: Uuid,
    /// Current username
    pub name: String,
    /// Full response, including skins and capes
    pub raw: Map<String, Value>,
}

/// A logged-in account.
///
/// Creating a session checks the token by fetching the account details.
#[derive(Debug, Clone)]
pub struct Session {
    dispatcher: Dispatcher,
    access_token: MinecraftToken,
    account: AccountInfo,
}

impl Session {
    /// Opens a session from a Minecraft services access token.
    ///
    /// # Errors
    ///
    /// `Authentication("invalid access token")` if the account details cannot
    /// be fetched with this token; upstream and transport errors.
    pub async fn new(dispatcher: Dispatcher, access_token: MinecraftToken) -> ApiResult<Self> {
        let url = format!("{}/minecraft/profile", dispatcher.config().services_base);
        let object = authorized_object(&dispatcher, &url, &access_token).await?;

        let id = object
            .get("id")
            .and_then(Value::as_str)
            .and_then(|id| Uuid::try_parse(id).ok())
            .ok_or_else(|| ApiError::MalformedPayload("account profile has no valid id".into()))?;
        let name = object
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        debug!("Opened session for {}", name);

        Ok(Self {
            dispatcher,
            access_token,
            account: AccountInfo {
                id,
                name,
                raw: object,
            },
        })
    }

    /// Account details fetched when the session was opened.
    pub fn account(&self) -> &AccountInfo {
        &self.account
    }

    /// The Minecraft services access token.
    pub fn access_token(&self) -> &MinecraftToken {
        &self.access_token
    }

    /// Fetches the account's public profile from the session server.
    ///
    /// # Errors
    ///
    /// Same as [`MojangApi::fetch_profile`].
    pub async fn profile(&self) -> ApiResult<Option<ProfileRecord>> {
        MojangApi::with_dispatcher(self.dispatcher.clone())
            .fetch_profile(&self.account.id)
            .await
    }

    /// Fetches the account's player attributes (privileges, profanity filter).
    ///
    /// # Errors
    ///
    /// `Authentication` if the token is no longer accepted; upstream and
    /// transport errors.
    pub async fn attributes(&self) -> ApiResult<Map<String, Value>> {
        let url = format!("{}/player/attributes", self.dispatcher.config().services_base);
        authorized_object(&self.dispatcher, &url, &self.access_token).await
    }
}

async fn authorized_object(
    dispatcher: &Dispatcher,
    url: &str,
    token: &MinecraftToken,
) -> ApiResult<Map<String, Value>> {
    match dispatcher.get_authorized(url, token.secret()).await? {
        ClassifiedResponse::JsonObject(object) => Ok(object),
        _ => Err(ApiError::Authentication("invalid access token".into())),
    }
}
