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

//! Client configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use crate::error::CmsError;

/// Default content API location (a local Strapi instance).
pub const DEFAULT_API_URL: &str = "http://localhost:1337";

/// Tag attached to every cached response; invalidating it evicts everything.
pub const DEFAULT_CACHE_TAG: &str = "strapi-data";

/// Nominal validity of a cached response.
pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(3600);

/// Configuration for the content API client.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// Base URL of the content API (e.g. "http://localhost:1337").
    pub api_url: String,
    /// Base URL relative media paths are resolved against.
    pub media_url: String,
    /// Serve static fallback content without touching the network.
    /// Set during image/static builds where the CMS is unreachable.
    pub skip_network: bool,
    /// Optional API token sent as a bearer credential.
    pub api_token: Option<String>,
    /// How long a response stays cached. Zero disables caching.
    pub revalidate: Duration,
    /// Tag attached to cached responses.
    pub cache_tag: String,
}

impl CmsConfig {
    /// Configuration for `api_url` with every other option at its default.
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            media_url: api_url.to_string(),
            skip_network: false,
            api_token: None,
            revalidate: DEFAULT_REVALIDATE,
            cache_tag: DEFAULT_CACHE_TAG.to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Optional
    /// - `STRAPI_API_URL` (default: `"http://localhost:1337"`)
    /// - `STRAPI_MEDIA_URL` (default: the API URL)
    /// - `SKIP_BUILD_STATIC_GENERATION` (`"true"` serves fallback content)
    /// - `STRAPI_API_TOKEN`
    /// - `CMS_REVALIDATE_SECS` (default: `"3600"`)
    /// - `CMS_CACHE_TAG` (default: `"strapi-data"`)
    pub fn from_env() -> Result<Self, CmsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CmsError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_url = var("STRAPI_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let media_url = var("STRAPI_MEDIA_URL").unwrap_or_else(|| api_url.clone());
        let skip_network = var("SKIP_BUILD_STATIC_GENERATION")
            .map(|value| parse_flag(&value))
            .unwrap_or(false);
        let revalidate = match var("CMS_REVALIDATE_SECS") {
            Some(secs) => Duration::from_secs(secs.trim().parse::<u64>().map_err(|_| {
                CmsError::Config("CMS_REVALIDATE_SECS must be a whole number of seconds".into())
            })?),
            None => DEFAULT_REVALIDATE,
        };

        Ok(Self {
            api_url,
            media_url,
            skip_network,
            api_token: var("STRAPI_API_TOKEN"),
            revalidate,
            cache_tag: var("CMS_CACHE_TAG").unwrap_or_else(|| DEFAULT_CACHE_TAG.to_string()),
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = CmsConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.media_url, DEFAULT_API_URL);
        assert!(!config.skip_network);
        assert_eq!(config.revalidate, Duration::from_secs(3600));
        assert_eq!(config.cache_tag, "strapi-data");
        assert!(config.api_token.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = CmsConfig::from_lookup(lookup(&[
            ("STRAPI_API_URL", "https://cms.dbl-ists.com"),
            ("STRAPI_MEDIA_URL", "https://media.dbl-ists.com"),
            ("SKIP_BUILD_STATIC_GENERATION", "TRUE"),
            ("STRAPI_API_TOKEN", "secret"),
            ("CMS_REVALIDATE_SECS", "60"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://cms.dbl-ists.com");
        assert_eq!(config.media_url, "https://media.dbl-ists.com");
        assert!(config.skip_network);
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.revalidate, Duration::from_secs(60));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = CmsConfig::from_lookup(lookup(&[
            ("STRAPI_API_TOKEN", ""),
            ("SKIP_BUILD_STATIC_GENERATION", "false"),
        ]))
        .unwrap();
        assert!(config.api_token.is_none());
        assert!(!config.skip_network);
    }

    #[test]
    fn rejects_non_numeric_revalidate() {
        let err = CmsConfig::from_lookup(lookup(&[("CMS_REVALIDATE_SECS", "hourly")]))
            .unwrap_err();
        assert!(matches!(err, CmsError::Config(_)));
    }
}
