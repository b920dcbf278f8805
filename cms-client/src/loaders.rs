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

//! One loader per page or resource.
//!
//! Loaders are infallible: a skipped network, a transport failure, a
//! non-2xx status or an unexpected body all produce the resource's static
//! fallback, tagged with why it was used.

use dbl_cms_types::{GlobalData, PageData, PageMetadata, PortfolioItem, ResolveMedia};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::query::Query;
use crate::{fallback, CmsClient, CmsError};

/// Longest id accepted for a single-entry lookup. Numeric ids and 24-char
/// document ids fit comfortably.
const MAX_ID_LEN: usize = 64;

/// Where a loader's content came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Network,
    Cache,
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// `SKIP_BUILD_STATIC_GENERATION` is set; no request was made.
    BuildSkip,
    /// The request failed; carries the rendered error.
    Error(String),
}

/// Content returned by a loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    pub data: T,
    pub origin: Origin,
}

impl<T> Loaded<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, Origin::Fallback(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loaded<U> {
        Loaded {
            data: f(self.data),
            origin: self.origin,
        }
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

impl CmsClient {
    /// Header and footer content (`/api/global`).
    pub async fn global_data(&self) -> Loaded<GlobalData> {
        let query = Query::new(json!({
            "populate": [
                "header.logoText",
                "header.navLink",
                "header.ctaButton",
                "footer.logoText",
                "footer.externalLink",
            ]
        }));
        self.load("global", "/api/global", &query, fallback::global)
            .await
    }

    /// Site-wide title and description.
    pub async fn global_metadata(&self) -> Loaded<PageMetadata> {
        let query = Query::new(json!({ "fields": ["title", "description"] }));
        self.load("global metadata", "/api/global", &query, fallback::metadata)
            .await
    }

    pub async fn home_page(&self) -> Loaded<PageData> {
        let query = blocks_query(json!({
            "layout.hero-section": {
                "populate": {
                    "image": { "fields": ["url", "alternativeText"] },
                    "link": { "populate": true }
                }
            },
            "layout.feature-list-section": {
                "populate": { "feature": { "populate": true } }
            },
            "layout.feature-section": {
                "populate": { "feature": { "populate": true } }
            }
        }));
        self.load_page("home-page", &query).await
    }

    pub async fn service_page(&self) -> Loaded<PageData> {
        let query = blocks_query(json!({
            "layout.hero-section": {
                "populate": {
                    "link": { "populate": true },
                    "heroMedia": { "populate": "*" }
                }
            },
            "layout.services-section": {
                "populate": { "services": { "populate": true } }
            },
            "layout.brand-list-section": {
                "populate": { "brands": { "populate": "*" } }
            }
        }));
        self.load_page("service-page", &query).await
    }

    pub async fn about_page(&self) -> Loaded<PageData> {
        self.load_page("about-page", &feature_section_query()).await
    }

    pub async fn contact_page(&self) -> Loaded<PageData> {
        self.load_page("contact-page", &feature_section_query()).await
    }

    pub async fn portfolio_page(&self) -> Loaded<PageData> {
        let query = blocks_query(json!({
            "layout.hero-section": { "populate": "*" }
        }));
        self.load_page("portfolio-page", &query).await
    }

    /// All portfolio items, newest first.
    pub async fn portfolio_items(&self) -> Loaded<Vec<PortfolioItem>> {
        let query = Query::new(json!({
            "sort": ["date:desc"],
            "populate": portfolio_image_fields()
        }))
        .encode_values_only();
        self.load(
            "portfolio items",
            "/api/portfolios",
            &query,
            fallback::portfolio_items,
        )
        .await
        .map(|items| self.resolved(items))
    }

    /// A single portfolio item by id or document id.
    pub async fn portfolio_item(&self, id: &str) -> Loaded<PortfolioItem> {
        let path = match entry_path("portfolios", id) {
            Ok(path) => path,
            Err(e) => {
                log::warn!("portfolio item: {e}, serving static content");
                return Loaded {
                    data: fallback::portfolio_item(id),
                    origin: Origin::Fallback(FallbackReason::Error(e.to_string())),
                };
            }
        };
        let query = Query::new(json!({ "populate": portfolio_image_fields() })).encode_values_only();
        self.load("portfolio item", &path, &query, || fallback::portfolio_item(id))
            .await
            .map(|item| self.resolved(item))
    }

    async fn load_page(&self, resource: &str, query: &Query) -> Loaded<PageData> {
        let path = format!("/api/{resource}");
        self.load(resource, &path, query, || fallback::page(resource))
            .await
            .map(|page| self.resolved(page))
    }

    /// Shared loader body: skip check, fetch, and fallback on any error.
    async fn load<T: DeserializeOwned>(
        &self,
        label: &str,
        path: &str,
        query: &Query,
        fallback: impl FnOnce() -> T,
    ) -> Loaded<T> {
        if self.config().skip_network {
            log::debug!("{label}: build skip set, serving static content");
            return Loaded {
                data: fallback(),
                origin: Origin::Fallback(FallbackReason::BuildSkip),
            };
        }

        match self.fetch::<T>(path, query).await {
            Ok((data, origin)) => Loaded { data, origin },
            Err(e) => {
                log::warn!("{label}: falling back to static content: {e}");
                Loaded {
                    data: fallback(),
                    origin: Origin::Fallback(FallbackReason::Error(e.to_string())),
                }
            }
        }
    }

    fn resolved<T: ResolveMedia>(&self, mut value: T) -> T {
        value.resolve_media(&self.config().media_url);
        value
    }
}

/// Path of one entry of `collection`. The id must be a numeric id or a
/// document id so it stays a single segment of the request path.
fn entry_path(collection: &str, id: &str) -> Result<String, CmsError> {
    let plain = !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if plain {
        Ok(format!("/api/{collection}/{id}"))
    } else {
        Err(CmsError::InvalidId(id.to_string()))
    }
}

fn blocks_query(on: serde_json::Value) -> Query {
    Query::new(json!({ "populate": { "blocks": { "on": on } } }))
}

fn feature_section_query() -> Query {
    blocks_query(json!({
        "layout.feature-section": {
            "populate": { "feature": { "populate": true } }
        }
    }))
}

fn portfolio_image_fields() -> serde_json::Value {
    json!({ "image": { "fields": ["url", "alternativeText", "id", "documentId"] } })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CmsConfig;

    fn skipping_client() -> CmsClient {
        // Port 9 (discard) would refuse the connection if anything were sent.
        let mut config = CmsConfig::new("http://127.0.0.1:9");
        config.skip_network = true;
        CmsClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn build_skip_serves_every_fallback_without_io() {
        let client = skipping_client();
        let skipped = Origin::Fallback(FallbackReason::BuildSkip);

        let global = client.global_data().await;
        assert_eq!(global.origin, skipped);
        assert_eq!(global.data.header().cta_button.url, "/contact");

        let metadata = client.global_metadata().await;
        assert_eq!(metadata.origin, skipped);
        assert_eq!(metadata.data, PageMetadata::default());

        for page in [
            client.home_page().await,
            client.service_page().await,
            client.about_page().await,
            client.contact_page().await,
            client.portfolio_page().await,
        ] {
            assert_eq!(page.origin, skipped);
            assert!(page.data.blocks.is_empty());
        }

        let items = client.portfolio_items().await;
        assert_eq!(items.origin, skipped);
        assert!(items.data.is_empty());

        let item = client.portfolio_item("7").await;
        assert_eq!(item.data.id, 7);
        assert_eq!(item.data.heading, "Portfolio Item");
    }

    #[test]
    fn entry_ids_must_be_one_plain_segment() {
        assert_eq!(entry_path("portfolios", "7").unwrap(), "/api/portfolios/7");
        assert_eq!(
            entry_path("portfolios", "x1b2c3d4e5f6g7h8i9j0k1l2").unwrap(),
            "/api/portfolios/x1b2c3d4e5f6g7h8i9j0k1l2"
        );
        for id in ["", "../global", "1?populate=secret&x=", "1/2", "1%2F2", "a b", &"9".repeat(65)] {
            assert!(
                matches!(entry_path("portfolios", id), Err(CmsError::InvalidId(_))),
                "{id:?} should be rejected"
            );
        }
    }

    #[test]
    fn loaded_map_keeps_origin() {
        let loaded = Loaded {
            data: 2,
            origin: Origin::Cache,
        }
        .map(|n| n * 10);
        assert_eq!(loaded.data, 20);
        assert_eq!(loaded.origin, Origin::Cache);
        assert!(!loaded.is_fallback());
    }
}
