//! Tokens passed between login stages.
//!
//! Each stage takes the previous stage's token by value, so a token cannot be
//! reused once the next one exists. `Debug` output never includes the secret.

use std::fmt;

fn redacted(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    write!(f, "{name}(<redacted>)")
}

/// Microsoft OAuth access token (stage 1 output).
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthToken(String);

/// Xbox Live user token (stage 2 output).
#[derive(Clone, PartialEq, Eq)]
pub struct XblToken(String);

/// XSTS token and the user hash it was issued for (stage 3 output).
#[derive(Clone, PartialEq, Eq)]
pub struct XstsToken {
    token: String,
    user_hash: String,
}

/// Minecraft services access token (stage 4 output).
#[derive(Clone, PartialEq, Eq)]
pub struct MinecraftToken(String);

impl OAuthToken {
    /// Wraps a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl XblToken {
    /// Wraps a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl XstsToken {
    /// Wraps a raw token and user hash.
    pub fn new(token: impl Into<String>, user_hash: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_hash: user_hash.into(),
        }
    }

    /// The raw token.
    pub fn secret(&self) -> &str {
        &self.token
    }

    /// The `uhs` claim.
    pub fn user_hash(&self) -> &str {
        &self.user_hash
    }

    /// Identity token for `login_with_xbox`: `XBL3.0 x={uhs};{token}`.
    pub fn identity_token(&self) -> String {
        format!("XBL3.0 x={};{}", self.user_hash, self.token)
    }
}

impl MinecraftToken {
    /// Wraps a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        redacted(f, "OAuthToken")
    }
}

impl fmt::Debug for XblToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        redacted(f, "XblToken")
    }
}

impl fmt::Debug for XstsToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        redacted(f, "XstsToken")
    }
}

impl fmt::Debug for MinecraftToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        redacted(f, "MinecraftToken")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_token_format() {
        let xsts = XstsToken::new("eyJhbGciOi", "1234567890");
        assert_eq!(xsts.identity_token(), "XBL3.0 x=1234567890;eyJhbGciOi");
    }

    #[test]
    fn test_debug_output_hides_secret() {
        let token = MinecraftToken::new("super-secret");
        let debug = format!("{:?}", token);
        assert_eq!(debug, "MinecraftToken(<redacted>)");
        assert!(!format!("{:?}", XstsToken::new("secret", "uhs")).contains("secret"));
    }
}
