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

//! REST client and page loaders for the DBL ISTS content API.
//!
//! The site never talks to the CMS directly: every page calls one loader on
//! a shared [`CmsClient`], and every loader returns content. Failures
//! (network, HTTP status, malformed JSON) are typed as [`CmsError`] inside
//! the client and converted to the loader's static fallback at the loader
//! boundary, so pages never see an error.
//!
//! # Example
//!
//! ```no_run
//! use dbl_cms_client::{CmsClient, CmsConfig};
//!
//! # async fn example() -> Result<(), dbl_cms_client::CmsError> {
//! let client = CmsClient::new(CmsConfig::from_env()?)?;
//!
//! let home = client.home_page().await;
//! println!("{} blocks ({:?})", home.data.blocks.len(), home.origin);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod fallback;
pub mod loaders;
pub mod query;

pub use config::CmsConfig;
pub use dbl_cms_types;
pub use error::CmsError;
pub use loaders::{FallbackReason, Loaded, Origin};
pub use query::Query;

use std::sync::{Arc, Mutex};

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::cache::ResponseCache;

/// How the client authenticates with the content API.
#[derive(Debug, Clone)]
pub enum AuthMode {
    /// Public content, no credentials sent.
    Anonymous,
    /// Attach `Authorization: Bearer <token>` to every request.
    Bearer(String),
}

/// A typed REST client for the content API.
///
/// Cheap to clone; clones share the HTTP connection pool and the response
/// cache.
#[derive(Debug, Clone)]
pub struct CmsClient {
    base_url: String,
    auth: AuthMode,
    http: Client,
    config: Arc<CmsConfig>,
    cache: Arc<Mutex<ResponseCache>>,
}

impl CmsClient {
    /// Create a client from a loaded configuration.
    pub fn new(config: CmsConfig) -> Result<Self, CmsError> {
        if config.api_url.trim().is_empty() {
            return Err(CmsError::Config("content API base URL is empty".into()));
        }
        let auth = match &config.api_token {
            Some(token) => AuthMode::Bearer(token.clone()),
            None => AuthMode::Anonymous,
        };
        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            auth,
            http: Client::new(),
            cache: Arc::new(Mutex::new(ResponseCache::new(config.revalidate))),
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    /// Drop every cached response carrying `tag`.
    ///
    /// Returns the number of entries evicted.
    pub fn revalidate_tag(&self, tag: &str) -> Result<usize, CmsError> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|_| CmsError::Cache("response cache lock poisoned".into()))?;
        let evicted = cache.invalidate_tag(tag);
        log::info!("revalidated tag {tag}: {evicted} cached response(s) evicted");
        Ok(evicted)
    }

    /// Fetch `path` with `query`, unwrap the `{ data, meta }` envelope and
    /// decode `data` as `T`.
    ///
    /// Successful responses are cached for the configured revalidation
    /// interval under the configured cache tag.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<(T, Origin), CmsError> {
        let url = self.url(path, query);

        if let Some(cached) = self.cached(&url) {
            log::debug!("cache hit for {url}");
            return decode_envelope(&url, cached).map(|data| (data, Origin::Cache));
        }

        let response = self.get(&url).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        if !(200..300).contains(&status) {
            return Err(CmsError::Status {
                status,
                url,
                body: text,
            });
        }

        let body: serde_json::Value =
            serde_json::from_str(&text).map_err(|source| CmsError::Decode {
                url: url.clone(),
                source,
            })?;
        let data = decode_envelope(&url, body.clone())?;
        self.store(url, body);
        Ok((data, Origin::Network))
    }

    /// Build a GET request with auth applied.
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let builder = self
            .http
            .get(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        self.apply_auth(builder)
    }

    fn url(&self, path: &str, query: &Query) -> String {
        let query = query.to_query_string();
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query)
        }
    }

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            AuthMode::Anonymous => builder,
            AuthMode::Bearer(token) => {
                builder.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"))
            }
        }
    }

    fn cached(&self, url: &str) -> Option<serde_json::Value> {
        if self.config.revalidate.is_zero() {
            return None;
        }
        match self.cache.lock() {
            Ok(mut cache) => cache.get(url),
            Err(_) => {
                log::warn!("response cache lock poisoned, bypassing cache");
                None
            }
        }
    }

    fn store(&self, url: String, body: serde_json::Value) {
        if self.config.revalidate.is_zero() {
            return;
        }
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(url, body, &[self.config.cache_tag.clone()]);
        }
    }
}

/// Decode the `data` field of a CMS response envelope.
fn decode_envelope<T: DeserializeOwned>(url: &str, body: serde_json::Value) -> Result<T, CmsError> {
    serde_json::from_value::<dbl_cms_types::CmsResponse<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|source| CmsError::Decode {
            url: url.to_string(),
            source,
        })
}
