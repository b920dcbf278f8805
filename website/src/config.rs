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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Server configuration loaded from environment variables.

use std::env;

use dbl_cms_client::{CmsConfig, CmsError};

pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Everything the server needs besides the Leptos options.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Content API settings, handed to the [`dbl_cms_client::CmsClient`].
    pub cms: CmsConfig,
    /// Public origin used for canonical and OpenGraph URLs.
    pub site_url: String,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// # Optional
    /// - `SITE_URL` (default: `"http://localhost:3000"`)
    /// - every variable read by [`CmsConfig::from_env`]
    pub fn from_env() -> Result<Self, CmsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CmsError> {
        let cms = CmsConfig::from_lookup(&lookup)?;
        let site_url = lookup("SITE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if !site_url.starts_with("http://") && !site_url.starts_with("https://") {
            return Err(CmsError::Config(format!(
                "SITE_URL must be an absolute http(s) URL, got {site_url:?}"
            )));
        }

        Ok(Self { cms, site_url })
    }
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
    fn defaults_when_unset() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert!(!config.cms.skip_network);
    }

    #[test]
    fn site_url_loses_trailing_slash() {
        let config =
            SiteConfig::from_lookup(lookup(&[("SITE_URL", "https://dbl-ists.com/")])).unwrap();
        assert_eq!(config.site_url, "https://dbl-ists.com");
    }

    #[test]
    fn relative_site_url_is_rejected() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_URL", "dbl-ists.com")])).unwrap_err();
        assert!(matches!(err, CmsError::Config(_)));
    }
}
