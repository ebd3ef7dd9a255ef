//! Input validation predicates.
//!
//! All checks are pure and total. A well-formed identifier can never be a
//! well-formed username (usernames contain no digits or hyphens and are at most
//! 25 characters), so a mixed list of names and ids splits without ambiguity.

use uuid::Uuid;

use crate::config::MAX_USERNAME_LENGTH;

/// Checks if the given string is a well-formed account identifier.
///
/// Both the bare 32-digit and the hyphenated forms are accepted. When `version`
/// is set, the parsed UUID must also carry that version number.
pub fn is_valid_uuid(candidate: &str, version: Option<usize>) -> bool {
    match Uuid::try_parse(candidate) {
        Ok(uuid) => version.map_or(true, |v| uuid.get_version_num() == v),
        Err(_) => false,
    }
}

/// Checks if the given string is a valid Minecraft username.
///
/// The API does not complain about names under 3 characters, but anything past
/// 25 characters is rejected. Only ASCII letters and `_` are accepted; the empty
/// string is not a name.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_USERNAME_LENGTH
        && name.chars().all(|c| c.is_ascii_alphabetic() || c == '_')
}

/// Checks if the given text parses as JSON.
pub fn is_valid_json(text: &[u8]) -> bool {
    serde_json::from_slice::<serde::de::IgnoredAny>(text).is_ok()
}
