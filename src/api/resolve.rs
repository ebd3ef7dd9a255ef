//! Username to id resolution.

use log::{debug, warn};
use serde_json::Value;
use uuid::Uuid;

use super::MojangApi;
use crate::config::USERNAME_BATCH_SIZE;
use crate::dispatch::ClassifiedResponse;
use crate::error_handling::ApiResult;
use crate::validation::is_valid_name;

impl MojangApi {
    /// Resolves one username to its account id.
    ///
    /// Returns `Ok(None)` when the name is not a valid username or the service
    /// does not answer with a profile object (unknown names come back as 204/404).
    ///
    /// # Errors
    ///
    /// Upstream failures (5xx), domain errors and transport errors.
    pub async fn resolve_uuid(&self, username: &str) -> ApiResult<Option<Uuid>> {
        if !is_valid_name(username) {
            debug!("Skipping lookup of invalid username {:?}", username);
            return Ok(None);
        }

        let url = format!("{}/users/profiles/minecraft/{}", self.config().api_base, username);
        let uuid = match self.dispatcher.get(&url).await? {
            ClassifiedResponse::JsonObject(object) => object
                .get("id")
                .and_then(Value::as_str)
                .and_then(|id| Uuid::try_parse(id).ok()),
            _ => None,
        };
        if uuid.is_none() {
            debug!("Username {} did not resolve", username);
        }
        Ok(uuid)
    }

    /// Resolves many usernames, ten per request.
    ///
    /// The input is split into batches of `USERNAME_BATCH_SIZE`; invalid names are
    /// dropped from each batch before it is sent and a batch left empty is not sent
    /// at all. Batches go out one after another and their results are concatenated.
    /// Names the service does not know are simply absent from the output, so the
    /// result may be shorter than the input and is not aligned with it.
    ///
    /// # Errors
    ///
    /// Any batch failing with a 5xx, domain or transport error fails the whole call.
    pub async fn resolve_uuids_bulk<S: AsRef<str>>(&self, usernames: &[S]) -> ApiResult<Vec<Uuid>> {
        let url = format!("{}/profiles/minecraft", self.config().api_base);
        let mut resolved = Vec::with_capacity(usernames.len());

        for chunk in usernames.chunks(USERNAME_BATCH_SIZE) {
            let batch: Vec<&str> = chunk
                .iter()
                .map(AsRef::as_ref)
                .filter(|name| is_valid_name(name))
                .collect();
            if batch.is_empty() {
                debug!("Batch of {} names had no valid usernames", chunk.len());
                continue;
            }

            match self.dispatcher.post_json(&url, &batch).await? {
                ClassifiedResponse::JsonArray(items) => {
                    let before = resolved.len();
                    resolved.extend(
                        items
                            .iter()
                            .filter_map(|item| item.get("id").and_then(Value::as_str))
                            .filter_map(|id| Uuid::try_parse(id).ok()),
                    );
                    debug!(
                        "Resolved {} of {} names in batch",
                        resolved.len() - before,
                        batch.len()
                    );
                }
                other => warn!(
                    "Bulk lookup of {} names returned a {} response, skipping batch",
                    batch.len(),
                    other.kind()
                ),
            }
        }

        Ok(resolved)
    }
}
