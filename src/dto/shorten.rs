//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
///
/// The `url` field is optional at the wire level so that a body without
/// it deserializes cleanly and is rejected with the dedicated
/// "URL not provided" error instead of a generic deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Successful shorten response in one of the two deployment shapes.
///
/// Uses untagged enum for cleaner JSON structure (no discriminator field).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ShortenResponse {
    /// Bare short key; the frontend constructs the full URL.
    Key {
        #[serde(rename = "shortKey")]
        short_key: String,
    },
    /// Fully-qualified short URL built from the configured base.
    FullUrl {
        #[serde(rename = "shortUrl")]
        short_url: String,
    },
}
