//! Blocked servers.
//!
//! The session server publishes SHA-1 hashes of blocked server addresses. Clients
//! hash the address they connect to, plus its wildcard parents, and refuse the
//! connection on any match.

use std::net::Ipv4Addr;

use log::{debug, warn};
use sha1::{Digest, Sha1};

use super::{unexpected, MojangApi};
use crate::dispatch::ClassifiedResponse;
use crate::error_handling::ApiResult;

/// Lower-case hex SHA-1 of `value`, as published in the blocked list.
pub fn server_hash(value: &str) -> String {
    hex::encode(Sha1::digest(value.as_bytes()))
}

/// Every pattern a blocked-list entry may match for `address`.
///
/// Host names yield `*.`-prefixed parent domains (`mc.example.com`,
/// `*.example.com`, `*.com`); IPv4 addresses yield trailing wildcards
/// (`1.2.3.4`, `1.2.3.*`, `1.2.*`, `1.*`).
pub fn blocked_candidates(address: &str) -> Vec<String> {
    let address = address.trim().to_ascii_lowercase();
    let parts: Vec<&str> = address.split('.').collect();
    let mut candidates = vec![address.clone()];

    if address.parse::<Ipv4Addr>().is_ok() {
        for keep in (1..parts.len()).rev() {
            candidates.push(format!("{}.*", parts[..keep].join(".")));
        }
    } else {
        for skip in 1..parts.len() {
            candidates.push(format!("*.{}", parts[skip..].join(".")));
        }
    }
    candidates
}

/// True if `address` or one of its wildcard patterns is in `hashes`.
pub fn is_server_blocked(hashes: &[String], address: &str) -> bool {
    blocked_candidates(address)
        .iter()
        .map(|candidate| server_hash(candidate))
        .any(|hash| hashes.iter().any(|h| h.eq_ignore_ascii_case(&hash)))
}

impl MojangApi {
    /// Fetches the list of blocked server hashes.
    ///
    /// An empty list only ever means the service published no hashes.
    ///
    /// # Errors
    ///
    /// Upstream failures (5xx) and transport errors; `UnexpectedStatus` for any
    /// other non-200 status and `MalformedPayload` for a JSON body.
    pub async fn get_blocked_servers(&self) -> ApiResult<Vec<String>> {
        let url = format!("{}/blockedservers", self.config().session_server);
        let hashes: Vec<String> = match self.dispatcher.get(&url).await? {
            ClassifiedResponse::Raw(body) => String::from_utf8_lossy(&body)
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            other => {
                warn!("Blocked server list returned a {} response", other.kind());
                return Err(unexpected(other, "blocked server list"));
            }
        };
        debug!("Fetched {} blocked server hashes", hashes.len());
        Ok(hashes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_hash_is_lowercase_sha1() {
        assert_eq!(server_hash(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(server_hash("abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_domain_candidates() {
        assert_eq!(
            blocked_candidates("MC.Example.com"),
            vec!["mc.example.com", "*.example.com", "*.com"]
        );
        assert_eq!(blocked_candidates("localhost"), vec!["localhost"]);
    }

    #[test]
    fn test_ip_candidates() {
        assert_eq!(
            blocked_candidates("1.2.3.4"),
            vec!["1.2.3.4", "1.2.3.*", "1.2.*", "1.*"]
        );
    }

    #[test]
    fn test_is_server_blocked_matches_wildcards() {
        let hashes = vec![server_hash("*.example.com")];
        assert!(is_server_blocked(&hashes, "play.example.com"));
        assert!(is_server_blocked(&hashes, "deep.play.example.com"));
        assert!(!is_server_blocked(&hashes, "example.org"));
    }

    #[test]
    fn test_is_server_blocked_ignores_hash_case() {
        let hashes = vec![server_hash("1.2.3.*").to_uppercase()];
        assert!(is_server_blocked(&hashes, "1.2.3.99"));
        assert!(!is_server_blocked(&hashes, "1.2.4.99"));
    }
}
