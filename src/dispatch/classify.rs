//! Response classification.
//!
//! Mojang's endpoints do not share an error scheme: some answer with a JSON
//! object, some with a bare array, some with plain text or binary data, and
//! failures arrive as 5xx statuses, 4xx statuses or an `error` field inside a
//! 200 response. `classify` folds all of that into one `ClassifiedResponse`.

use bytes::Bytes;
use serde_json::{Map, Value};

use super::RawResponse;
use crate::error_handling::{ApiError, ApiResult};
use crate::validation::is_valid_json;

/// A raw response normalised by shape.
#[derive(Debug, Clone)]
pub enum ClassifiedResponse {
    /// 200 with a JSON object that has no `error` field.
    JsonObject(Map<String, Value>),
    /// 200 with a JSON array. Arrays are never inspected for errors.
    JsonArray(Vec<Value>),
    /// 200 with a body that is not a JSON object or array (text, images).
    Raw(Bytes),
    /// Any other status below 500. The caller decides what it means.
    Unrecognized(RawResponse),
}

impl ClassifiedResponse {
    /// Short name of the variant, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ClassifiedResponse::JsonObject(_) => "object",
            ClassifiedResponse::JsonArray(_) => "array",
            ClassifiedResponse::Raw(_) => "raw",
            ClassifiedResponse::Unrecognized(_) => "unrecognized",
        }
    }

    /// Returns the object, discarding every other shape.
    pub fn into_object(self) -> Option<Map<String, Value>> {
        match self {
            ClassifiedResponse::JsonObject(object) => Some(object),
            _ => None,
        }
    }
}

/// Classifies a raw response.
///
/// # Errors
///
/// - `ApiError::UpstreamUnavailable` for any status of 500 or above, whatever the body.
/// - `ApiError::Domain` for a 200 JSON object carrying a non-null `error` field.
///   The message is `errorMessage`, or `error_description` when that is absent.
pub fn classify(raw: RawResponse) -> ApiResult<ClassifiedResponse> {
    if raw.status >= 500 {
        return Err(ApiError::UpstreamUnavailable { status: raw.status });
    }
    if raw.status != 200 {
        return Ok(ClassifiedResponse::Unrecognized(raw));
    }
    if !is_valid_json(&raw.body) {
        return Ok(ClassifiedResponse::Raw(raw.body));
    }

    match serde_json::from_slice::<Value>(&raw.body) {
        Ok(Value::Array(items)) => Ok(ClassifiedResponse::JsonArray(items)),
        Ok(Value::Object(object)) => {
            if let Some(error) = object.get("error").filter(|e| !e.is_null()) {
                return Err(ApiError::Domain {
                    error: value_to_string(error),
                    // OAuth endpoints put the detail in `error_description`
                    message: ["errorMessage", "error_description"]
                        .iter()
                        .filter_map(|key| object.get(*key))
                        .find(|m| !m.is_null())
                        .map(value_to_string),
                });
            }
            Ok(ClassifiedResponse::JsonObject(object))
        }
        // Scalars (e.g. a blocked-server list that happens to be one numeric line)
        _ => Ok(ClassifiedResponse::Raw(raw.body)),
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
