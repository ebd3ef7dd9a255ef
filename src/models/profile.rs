//! Player profiles.
//!
//! The session server returns a profile as
//! `{"id", "name", "properties": [{"name": "textures", "value", "signature"}]}`
//! where `value` is a base64-encoded JSON envelope holding the id, name, timestamp
//! and texture URLs. The signature sits next to the envelope, not inside it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::texture::Texture;
use crate::error_handling::{ApiError, ApiResult};

/// Default skin a player gets when no custom skin is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultSkin {
    /// Classic default skin
    Steve,
    /// Slim default skin
    Alex,
}

impl DefaultSkin {
    /// Derives the default skin from the account id.
    ///
    /// XORs the hex digits at positions 7, 15, 23 and 31 of the 32-digit form;
    /// an even result is Steve, an odd one Alex.
    pub fn for_uuid(uuid: &Uuid) -> Self {
        let hex = uuid.simple().to_string();
        let hash = [7, 15, 23, 31]
            .iter()
            .filter_map(|&i| hex.as_bytes().get(i))
            .filter_map(|&b| (b as char).to_digit(16))
            .fold(0, |acc, digit| acc ^ digit);
        if hash % 2 == 0 {
            DefaultSkin::Steve
        } else {
            DefaultSkin::Alex
        }
    }
}

impl std::fmt::Display for DefaultSkin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefaultSkin::Steve => f.write_str("Steve"),
            DefaultSkin::Alex => f.write_str("Alex"),
        }
    }
}

/// A decoded player profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    /// Account id
    pub uuid: Uuid,
    /// Current username
    pub username: String,
    /// When the session server issued the texture envelope (second precision)
    pub timestamp: DateTime<Utc>,
    /// Custom skin, if the player set one
    pub skin: Option<Texture>,
    /// Cape, if the player has one
    pub cape: Option<Texture>,
    /// Skin shown when no custom skin is set
    pub default_skin: DefaultSkin,
    /// Yggdrasil signature of the envelope (requested with `unsigned=false`)
    pub signature: Option<String>,
}

#[derive(Deserialize)]
struct ProfileProperty {
    value: String,
    signature: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextureEnvelope {
    profile_id: String,
    profile_name: String,
    timestamp: i64,
    #[serde(default)]
    textures: EnvelopeTextures,
}

#[derive(Deserialize, Default)]
struct EnvelopeTextures {
    #[serde(rename = "SKIN")]
    skin: Option<EnvelopeTexture>,
    #[serde(rename = "CAPE")]
    cape: Option<EnvelopeTexture>,
}

#[derive(Deserialize)]
struct EnvelopeTexture {
    url: String,
    metadata: Option<Value>,
}

impl ProfileRecord {
    /// Decodes the session server's profile object.
    ///
    /// # Errors
    ///
    /// `ApiError::MalformedPayload` if the properties list is missing, the
    /// envelope is not base64 JSON, or the id/timestamp cannot be parsed.
    pub fn from_session_object(object: Map<String, Value>) -> ApiResult<Self> {
        let property = object
            .get("properties")
            .and_then(Value::as_array)
            .and_then(|props| props.first())
            .cloned()
            .ok_or_else(|| ApiError::MalformedPayload("profile has no properties".into()))?;
        let property: ProfileProperty = serde_json::from_value(property)
            .map_err(|e| ApiError::MalformedPayload(format!("profile property: {e}")))?;
        Self::from_envelope(&property.value, property.signature)
    }

    /// Decodes a base64 texture envelope.
    ///
    /// # Errors
    ///
    /// `ApiError::MalformedPayload` if the envelope cannot be decoded.
    pub fn from_envelope(value: &str, signature: Option<String>) -> ApiResult<Self> {
        let decoded = STANDARD
            .decode(value)
            .map_err(|e| ApiError::MalformedPayload(format!("envelope is not base64: {e}")))?;
        let envelope: TextureEnvelope = serde_json::from_slice(&decoded)
            .map_err(|e| ApiError::MalformedPayload(format!("envelope is not valid JSON: {e}")))?;

        let uuid = Uuid::try_parse(&envelope.profile_id).map_err(|e| {
            ApiError::MalformedPayload(format!("invalid profile id {}: {e}", envelope.profile_id))
        })?;
        let seconds = envelope.timestamp.div_euclid(1000);
        let timestamp = DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
            ApiError::MalformedPayload(format!("timestamp out of range: {}", envelope.timestamp))
        })?;

        let skin = envelope
            .textures
            .skin
            .map(|s| Texture::skin(s.url, s.metadata.is_some()));
        let cape = envelope.textures.cape.map(|c| Texture::cape(c.url));

        Ok(Self {
            default_skin: DefaultSkin::for_uuid(&uuid),
            uuid,
            username: envelope.profile_name,
            timestamp,
            skin,
            cape,
            signature,
        })
    }
}

impl std::fmt::Display for ProfileRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.username)
    }
}
