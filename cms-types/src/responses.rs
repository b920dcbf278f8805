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

//! Response types for the CMS REST API.
//!
//! Every endpoint returns a [`CmsResponse<T>`] envelope:
//! `{ "data": <T>, "meta": { ... } }`

use serde::{Deserialize, Serialize};

use crate::blocks::{deserialize_blocks, Block};
use crate::de::null_as_default;
use crate::links::{Link, LogoText};
use crate::media::ResolveMedia;

// ---------------------------------------------------------------------------
// Generic envelope
// ---------------------------------------------------------------------------

/// Top-level CMS response envelope.
///
/// `meta` carries pagination for collection endpoints and is otherwise
/// empty; the site never reads it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CmsResponse<T> {
    pub data: T,
    #[serde(default)]
    pub meta: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Single types
// ---------------------------------------------------------------------------

/// A page single type (`home-page`, `service-page`, ...): an ordered list
/// of blocks. Order is rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub document_id: String,
    #[serde(default, deserialize_with = "deserialize_blocks")]
    pub blocks: Vec<Block>,
}

impl ResolveMedia for PageData {
    fn resolve_media(&mut self, base: &str) {
        self.blocks.resolve_media(base);
    }
}

/// Site header: logo, navigation and the call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(default)]
    pub logo_text: LogoText,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nav_link: Vec<Link>,
    #[serde(default)]
    pub cta_button: Link,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            logo_text: LogoText {
                id: 1,
                text: "DBL ISTS Inc.".to_string(),
                url: "/".to_string(),
            },
            nav_link: vec![
                Link::new(1, "Home", "/"),
                Link::new(2, "Services", "/services"),
                Link::new(3, "Portfolio", "/portfolio"),
                Link::new(4, "About", "/about"),
            ],
            cta_button: Link::new(1, "Contact Us", "/contact"),
        }
    }
}

/// Site footer: logo, social links and the copyright line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    #[serde(default)]
    pub logo_text: LogoText,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_link: Vec<Link>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub footer_text: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            logo_text: LogoText {
                id: 1,
                text: "DBL ISTS Inc.".to_string(),
                url: "/".to_string(),
            },
            external_link: Vec::new(),
            footer_text: "© 2024 DBL ISTS Inc. All rights reserved.".to_string(),
        }
    }
}

/// Header and footer as stored on the `global` single type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlobalChrome {
    #[serde(default)]
    pub header: Option<Header>,
    #[serde(default)]
    pub footer: Option<Footer>,
}

/// The `global` single type.
///
/// Older CMS versions nest the fields under `attributes`; both layouts are
/// accepted and `attributes` wins when present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlobalData {
    #[serde(flatten)]
    pub chrome: GlobalChrome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<GlobalChrome>,
}

impl GlobalData {
    pub fn new(header: Header, footer: Footer) -> Self {
        Self {
            chrome: GlobalChrome {
                header: Some(header),
                footer: Some(footer),
            },
            attributes: None,
        }
    }

    /// The header to render, falling back to the built-in default.
    pub fn header(&self) -> Header {
        self.pick(|chrome| chrome.header.as_ref()).unwrap_or_default()
    }

    /// The footer to render, falling back to the built-in default.
    pub fn footer(&self) -> Footer {
        self.pick(|chrome| chrome.footer.as_ref()).unwrap_or_default()
    }

    fn pick<T: Clone>(&self, field: impl Fn(&GlobalChrome) -> Option<&T>) -> Option<T> {
        self.attributes
            .as_ref()
            .and_then(&field)
            .or_else(|| field(&self.chrome))
            .cloned()
    }
}

/// Site-wide `<title>` and description, from `global?fields=title,description`.
///
/// A missing, `null` or blank field takes the default text, so a page never
/// renders an empty `<title>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPageMetadata")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

#[derive(Deserialize)]
struct RawPageMetadata {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl From<RawPageMetadata> for PageMetadata {
    fn from(raw: RawPageMetadata) -> Self {
        let filled = |value: Option<String>| value.filter(|text| !text.trim().is_empty());
        let defaults = Self::default();
        Self {
            title: filled(raw.title).unwrap_or(defaults.title),
            description: filled(raw.description).unwrap_or(defaults.description),
        }
    }
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: "DBL ISTS Inc. — Your partner in modernization.".to_string(),
            description: "Helping businesses modernize their technology stack".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_preserves_block_order_and_drops_malformed_blocks() {
        let response: CmsResponse<PageData> = serde_json::from_value(json!({
            "data": {
                "id": 1,
                "documentId": "home",
                "blocks": [
                    {"__component": "layout.hero-section", "id": 10, "heading": "Hi"},
                    {"__component": "layout.services-section", "id": 11, "services": "not-a-list"},
                    {"__component": "layout.unheard-of", "id": 12},
                    {"__component": "layout.feature-section", "id": 13, "title": "Benefits"}
                ]
            },
            "meta": {}
        }))
        .unwrap();
        let ids: Vec<_> = response.data.blocks.iter().map(Block::id).collect();
        assert_eq!(ids, vec![Some(10), None, Some(13)]);
    }

    #[test]
    fn empty_data_object_yields_empty_page() {
        let response: CmsResponse<PageData> = serde_json::from_value(json!({"data": {}})).unwrap();
        assert!(response.data.blocks.is_empty());
    }

    #[test]
    fn blank_metadata_fields_take_the_defaults() {
        let defaults = PageMetadata::default();

        let nulls: PageMetadata =
            serde_json::from_value(json!({"title": null, "description": "  "})).unwrap();
        assert_eq!(nulls, defaults);

        let partial: PageMetadata =
            serde_json::from_value(json!({"title": "DBL ISTS", "description": ""})).unwrap();
        assert_eq!(partial.title, "DBL ISTS");
        assert_eq!(partial.description, defaults.description);

        let missing: PageMetadata = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing, defaults);
    }

    #[test]
    fn global_reads_flat_and_legacy_layouts() {
        let flat: GlobalData = serde_json::from_value(json!({
            "header": {
                "logoText": {"id": 1, "text": "DBL", "url": "/"},
                "navLink": [{"id": 1, "text": "Home", "url": "/"}],
                "ctaButton": {"id": 1, "text": "Talk to us", "url": "/contact"}
            }
        }))
        .unwrap();
        assert_eq!(flat.header().cta_button.text, "Talk to us");
        assert_eq!(flat.footer(), Footer::default());

        let legacy: GlobalData = serde_json::from_value(json!({
            "attributes": {
                "footer": {"logoText": {"text": "DBL"}, "externalLink": [], "footerText": "(c) DBL"}
            }
        }))
        .unwrap();
        assert_eq!(legacy.footer().footer_text, "(c) DBL");
        assert_eq!(legacy.header(), Header::default());
    }
}
