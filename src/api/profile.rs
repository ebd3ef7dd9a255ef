//! Profiles, textures and name history.

use std::collections::HashSet;

use bytes::Bytes;
use log::{debug, warn};
use uuid::Uuid;

use super::{unexpected, MojangApi};
use crate::dispatch::ClassifiedResponse;
use crate::error_handling::ApiResult;
use crate::models::{Collapsed, HistoryEntry, ProfileRecord, Texture};
use crate::validation::is_valid_uuid;

/// Usernames and/or ids to look up.
///
/// Each entry may be either a username or an id; ids skip name resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileQuery {
    /// One username or id.
    Single(String),
    /// Several usernames or ids, mixed freely.
    Many(Vec<String>),
}

impl ProfileQuery {
    fn into_vec(self) -> Vec<String> {
        match self {
            ProfileQuery::Single(item) => vec![item],
            ProfileQuery::Many(items) => items,
        }
    }
}

impl From<&str> for ProfileQuery {
    fn from(item: &str) -> Self {
        ProfileQuery::Single(item.to_string())
    }
}

impl From<String> for ProfileQuery {
    fn from(item: String) -> Self {
        ProfileQuery::Single(item)
    }
}

impl From<Vec<String>> for ProfileQuery {
    fn from(items: Vec<String>) -> Self {
        ProfileQuery::Many(items)
    }
}

impl From<Vec<&str>> for ProfileQuery {
    fn from(items: Vec<&str>) -> Self {
        ProfileQuery::Many(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ProfileQuery {
    fn from(items: &[&str]) -> Self {
        ProfileQuery::Many(items.iter().map(|s| s.to_string()).collect())
    }
}

impl MojangApi {
    /// Fetches the profiles for a username, an id, or a mixed list of both.
    ///
    /// Entries that are already well-formed ids are used as-is; everything else
    /// goes through [`MojangApi::resolve_uuids_bulk`]. Each distinct id is then
    /// fetched with its own request. Profiles the session server does not return
    /// are left out.
    ///
    /// Returns `Collapsed::Empty` when nothing resolved, `Collapsed::Single` for
    /// exactly one profile and `Collapsed::Many` otherwise.
    ///
    /// # Errors
    ///
    /// Upstream failures (5xx), domain errors, transport errors, and
    /// `MalformedPayload` if a returned profile cannot be decoded.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mojang_client::{Collapsed, Config, MojangApi};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let api = MojangApi::new(Config::default())?;
    /// if let Collapsed::Single(profile) = api.get_profile("Notch").await? {
    ///     println!("{} uses the {} default skin", profile.username, profile.default_skin);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_profile(
        &self,
        query: impl Into<ProfileQuery>,
    ) -> ApiResult<Collapsed<ProfileRecord>> {
        let version = self.config().uuid_version;
        let (ids, names): (Vec<String>, Vec<String>) = query
            .into()
            .into_vec()
            .into_iter()
            .partition(|item| is_valid_uuid(item, version));

        let mut uuids: Vec<Uuid> = ids.iter().filter_map(|id| Uuid::try_parse(id).ok()).collect();
        if !names.is_empty() {
            uuids.extend(self.resolve_uuids_bulk(&names).await?);
        }

        let mut seen = HashSet::new();
        uuids.retain(|uuid| seen.insert(*uuid));

        let mut profiles = Vec::with_capacity(uuids.len());
        for uuid in &uuids {
            if let Some(profile) = self.fetch_profile(uuid).await? {
                profiles.push(profile);
            }
        }
        debug!("Fetched {} of {} profiles", profiles.len(), uuids.len());

        Ok(profiles.into())
    }

    /// Fetches and decodes one signed profile from the session server.
    ///
    /// Returns `Ok(None)` if the session server has no such profile.
    ///
    /// # Errors
    ///
    /// Upstream failures (5xx), domain errors, transport errors, and
    /// `MalformedPayload` if the profile cannot be decoded.
    pub async fn fetch_profile(&self, uuid: &Uuid) -> ApiResult<Option<ProfileRecord>> {
        let url = format!(
            "{}/session/minecraft/profile/{}?unsigned=false",
            self.config().session_server,
            uuid.simple()
        );
        match self.dispatcher.get(&url).await? {
            ClassifiedResponse::JsonObject(object) => {
                ProfileRecord::from_session_object(object).map(Some)
            }
            other => {
                debug!("Profile {} not returned ({})", uuid, other.kind());
                Ok(None)
            }
        }
    }

    /// Downloads the image behind a skin or cape.
    ///
    /// Returns `Ok(None)` if the texture server does not have it.
    ///
    /// # Errors
    ///
    /// Upstream failures (5xx), transport errors, and `MalformedPayload` if the
    /// server answers with JSON instead of an image.
    pub async fn fetch_texture(&self, texture: &Texture) -> ApiResult<Option<Bytes>> {
        match self.dispatcher.get(&texture.url).await? {
            ClassifiedResponse::Raw(bytes) => Ok(Some(bytes)),
            ClassifiedResponse::Unrecognized(raw) => {
                warn!("Texture {} not available (status {})", texture.id, raw.status);
                Ok(None)
            }
            other => Err(unexpected(other, "texture download")),
        }
    }

    /// Lists the names an account has held, oldest first.
    ///
    /// # Errors
    ///
    /// Upstream failures (5xx), domain errors and transport errors.
    pub async fn name_history(&self, uuid: &Uuid) -> ApiResult<Collapsed<HistoryEntry>> {
        let url = format!("{}/user/profiles/{}/names", self.config().api_base, uuid.simple());
        let entries = match self.dispatcher.get(&url).await? {
            ClassifiedResponse::JsonArray(items) => items
                .into_iter()
                .filter_map(HistoryEntry::from_value)
                .collect(),
            other => {
                debug!("Name history for {} not returned ({})", uuid, other.kind());
                Vec::new()
            }
        };
        Ok(entries.into())
    }
}
