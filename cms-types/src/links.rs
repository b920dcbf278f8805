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

//! Navigation links, external links and call-to-action buttons.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// A `{id, text, url}` record. The same component is used by the CMS for
/// header navigation, footer social links and CTA buttons; only footer links
/// set `isExternal`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_external: bool,
}

impl Link {
    pub fn new(id: i64, text: &str, url: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            url: url.to_string(),
            is_external: false,
        }
    }

    pub fn external(id: i64, text: &str, url: &str) -> Self {
        Self {
            is_external: true,
            ..Self::new(id, text, url)
        }
    }

    /// The `href` to render: external links are normalised to carry a scheme.
    pub fn href(&self) -> String {
        if self.is_external {
            normalize_external_url(&self.url)
        } else {
            self.url.clone()
        }
    }

    /// `target` attribute for the anchor, if any.
    pub fn target(&self) -> Option<&'static str> {
        self.is_external.then_some("_blank")
    }

    /// `rel` attribute for the anchor, if any.
    pub fn rel(&self) -> Option<&'static str> {
        self.is_external.then_some("noopener noreferrer")
    }
}

/// The text logo shown in the header and footer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogoText {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

/// Prefix `https://` onto a URL that carries no scheme.
///
/// Editors routinely enter `facebook.com/dblists`; a URL that already has a
/// scheme (`http://`, `https://`, `mailto:`, ...) is returned unchanged.
pub fn normalize_external_url(url: &str) -> String {
    let url = url.trim();
    if has_scheme(url) {
        url.to_string()
    } else {
        format!("https://{}", url.trim_start_matches('/'))
    }
}

fn has_scheme(url: &str) -> bool {
    let Some((scheme, rest)) = url.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    // `localhost:3000` parses as a scheme too; only trust hierarchical URLs
    // and the opaque schemes an editor would actually paste.
    valid
        && (rest.starts_with("//")
            || matches!(
                scheme.to_ascii_lowercase().as_str(),
                "mailto" | "tel" | "sms"
            ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_without_scheme_gets_https() {
        assert_eq!(
            normalize_external_url("facebook.com/dblists"),
            "https://facebook.com/dblists"
        );
        assert_eq!(
            normalize_external_url("www.linkedin.com"),
            "https://www.linkedin.com"
        );
        assert_eq!(
            normalize_external_url("localhost:3000/page"),
            "https://localhost:3000/page"
        );
    }

    #[test]
    fn url_with_scheme_passes_through() {
        for url in [
            "https://twitter.com",
            "http://example.com/a?b=c",
            "mailto:sales@dbl-ists.com",
            "tel:+639228037220",
        ] {
            assert_eq!(normalize_external_url(url), url);
        }
    }

    #[test]
    fn only_external_links_are_normalised() {
        let internal = Link::new(1, "Services", "/services");
        assert_eq!(internal.href(), "/services");
        assert_eq!(internal.target(), None);
        assert_eq!(internal.rel(), None);

        let external = Link::external(2, "Facebook", "facebook.com/dbl");
        assert_eq!(external.href(), "https://facebook.com/dbl");
        assert_eq!(external.target(), Some("_blank"));
        assert_eq!(external.rel(), Some("noopener noreferrer"));
    }

    #[test]
    fn is_external_tolerates_null() {
        let link: Link =
            serde_json::from_str(r#"{"id":3,"text":"Home","url":"/","isExternal":null}"#).unwrap();
        assert!(!link.is_external);
    }
}
