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

//! Uploaded media references and their URL resolution.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// An uploaded asset as returned by the CMS media library.
///
/// `url` is relative to the media host (e.g. `/uploads/hero_3f2a.jpg`)
/// until [`ResolveMedia::resolve_media`] rewrites it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub document_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
}

impl Media {
    /// Alt text, or `fallback` when the CMS left it empty.
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.alternative_text.as_deref() {
            Some(alt) if !alt.trim().is_empty() => alt,
            _ => fallback,
        }
    }
}

/// Resolve a media URL against the configured media base.
///
/// Returns `None` for an empty URL. Absolute (`http://`, `https://`),
/// protocol-relative (`//`) and inline `data:` URLs pass through untouched.
pub fn resolve_media_url(base: &str, url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    if url.starts_with("data:")
        || url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("//")
    {
        return Some(url.to_string());
    }
    let base = base.trim_end_matches('/');
    if url.starts_with('/') {
        Some(format!("{base}{url}"))
    } else {
        Some(format!("{base}/{url}"))
    }
}

/// Rewrites every media URL inside a content tree to an absolute URL.
///
/// Applied once at the loader boundary so that rendering code (including
/// browser-side islands) never needs to know the media host.
pub trait ResolveMedia {
    fn resolve_media(&mut self, base: &str);
}

impl ResolveMedia for Media {
    fn resolve_media(&mut self, base: &str) {
        if let Some(resolved) = resolve_media_url(base, &self.url) {
            self.url = resolved;
        }
    }
}

impl<T: ResolveMedia> ResolveMedia for Option<T> {
    fn resolve_media(&mut self, base: &str) {
        if let Some(inner) = self {
            inner.resolve_media(base);
        }
    }
}

impl<T: ResolveMedia> ResolveMedia for Vec<T> {
    fn resolve_media(&mut self, base: &str) {
        for item in self.iter_mut() {
            item.resolve_media(base);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_url_is_joined_with_base() {
        assert_eq!(
            resolve_media_url("http://localhost:1337/", "/uploads/logo.png").as_deref(),
            Some("http://localhost:1337/uploads/logo.png")
        );
        assert_eq!(
            resolve_media_url("http://localhost:1337", "uploads/logo.png").as_deref(),
            Some("http://localhost:1337/uploads/logo.png")
        );
    }

    #[test]
    fn absolute_and_inline_urls_pass_through() {
        let cdn = "https://cdn.example.com/a.png";
        assert_eq!(resolve_media_url("http://cms", cdn).as_deref(), Some(cdn));
        assert_eq!(
            resolve_media_url("http://cms", "data:image/png;base64,AAAA").as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn empty_url_resolves_to_none() {
        assert_eq!(resolve_media_url("http://cms", "  "), None);
    }

    #[test]
    fn null_fields_deserialize_as_defaults() {
        let media: Media = serde_json::from_str(
            r#"{"id":4,"documentId":null,"url":"/uploads/x.jpg","alternativeText":null}"#,
        )
        .unwrap();
        assert_eq!(media.document_id, "");
        assert_eq!(media.alt_or("Hero image"), "Hero image");
    }
}
