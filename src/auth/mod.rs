//! Authentication: the venue API key.
//!
//! ## Security Model
//!
//! The key is sent as the `X-Starfighter-Authorization` header on every
//! request and embedded in no URL. It is stored privately inside the client
//! and redacted from `Debug` output; the only accessor is crate-internal.
//!
//! Endpoints that act on an account (placing, cancelling and querying orders)
//! fail locally with [`AuthError::NotAuthenticated`] when no key is configured,
//! instead of sending an empty header and waiting for a 401.

use crate::error::AuthError;

/// A validated API key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate a raw key. Keys must be non-empty visible ASCII so they fit in a header.
    pub fn new(raw: impl Into<String>) -> Result<Self, AuthError> {
        let raw = raw.into();
        let key = raw.trim();
        if key.is_empty() {
            return Err(AuthError::InvalidApiKey("key is empty".into()));
        }
        if !key.chars().all(|c| c.is_ascii_graphic()) {
            return Err(AuthError::InvalidApiKey(
                "key must contain only visible ASCII characters".into(),
            ));
        }
        Ok(Self(key.to_string()))
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl std::str::FromStr for ApiKey {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApiKey::new(s)
    }
}
