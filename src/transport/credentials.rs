//! API key credentials

use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::fmt;

/// Header carrying the API key identifier
pub const API_KEY_ID_HEADER: &str = "x-mcd-id";

/// Header carrying the API key secret
pub const API_KEY_TOKEN_HEADER: &str = "x-mcd-token";

/// Monte Carlo API key pair
///
/// The strings are opaque: nothing here checks their shape, the API is the
/// only authority on whether a key is valid.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key_id: String,
    api_key_token: String,
}

impl Credentials {
    /// Create a credential pair
    pub fn new(api_key_id: impl Into<String>, api_key_token: impl Into<String>) -> Self {
        Self {
            api_key_id: api_key_id.into(),
            api_key_token: api_key_token.into(),
        }
    }

    /// The API key identifier
    pub fn api_key_id(&self) -> &str {
        &self.api_key_id
    }

    /// The API key secret
    pub fn api_key_token(&self) -> &str {
        &self.api_key_token
    }

    /// Write both auth headers, replacing any values already present
    pub(crate) fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        let id = HeaderValue::from_bytes(self.api_key_id.as_bytes())
            .map_err(|_| Error::invalid_header(API_KEY_ID_HEADER))?;
        let mut token = HeaderValue::from_bytes(self.api_key_token.as_bytes())
            .map_err(|_| Error::invalid_header(API_KEY_TOKEN_HEADER))?;
        token.set_sensitive(true);

        headers.insert(HeaderName::from_static(API_KEY_ID_HEADER), id);
        headers.insert(HeaderName::from_static(API_KEY_TOKEN_HEADER), token);
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key_id", &self.api_key_id)
            .field("api_key_token", &"<redacted>")
            .finish()
    }
}
