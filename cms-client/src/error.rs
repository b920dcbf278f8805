/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Error types for the content API client.

use thiserror::Error;

/// Errors returned by [`CmsClient::fetch`](crate::CmsClient::fetch).
///
/// Loaders never return these: they log them and serve fallback content.
#[derive(Debug, Error)]
pub enum CmsError {
    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("Unexpected status ({status}) from {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    /// The body was not JSON, or not the shape this site expects.
    #[error("Malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response cache could not be used.
    #[error("Cache error: {0}")]
    Cache(String),

    /// An entry id that is not a single, plain path segment.
    #[error("Invalid content id: {0:?}")]
    InvalidId(String),

    /// A configuration error (e.g. missing base URL).
    #[error("Configuration error: {0}")]
    Config(String),
}
