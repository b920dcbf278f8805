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

//! Portfolio entries and dated hero media.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::de::null_as_default;
use crate::media::{Media, ResolveMedia};

/// One entry of the `/api/portfolios` collection.
///
/// Every item is expected to carry at least one image, but the CMS does not
/// enforce it: `image` may arrive as `null` or `[]`, and renderers must cope.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub heading: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_heading: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: Vec<Media>,
}

impl PortfolioItem {
    /// The cover image shown in the grid, if the item has any image.
    pub fn cover(&self) -> Option<&Media> {
        self.image.first()
    }

    /// Calendar day of the item, ignoring time of day.
    pub fn day(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }
}

impl ResolveMedia for PortfolioItem {
    fn resolve_media(&mut self, base: &str) {
        self.image.resolve_media(base);
    }
}

/// A slide of the services hero carousel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroMedia {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub heading: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_heading: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default)]
    pub image: Option<Media>,
}

impl ResolveMedia for HeroMedia {
    fn resolve_media(&mut self, base: &str) {
        self.image.resolve_media(base);
    }
}

/// Parse a CMS date (`2024-03-18`) or datetime (`2024-03-18T09:30:00.000Z`)
/// down to its calendar day.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(day);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_and_datetime_to_the_same_day() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
        assert_eq!(parse_day("2024-03-18"), Some(day));
        assert_eq!(parse_day("2024-03-18T23:59:59.000Z"), Some(day));
        assert_eq!(parse_day("2024-03-18 08:00"), Some(day));
        assert_eq!(parse_day("sometime"), None);
    }

    #[test]
    fn null_image_becomes_empty_list() {
        let item: PortfolioItem = serde_json::from_str(
            r#"{"id":7,"heading":"CCTV rollout","subHeading":"Warehouse","date":"2024-01-02","category":"Security","image":null}"#,
        )
        .unwrap();
        assert!(item.image.is_empty());
        assert!(item.cover().is_none());
    }

    #[test]
    fn resolves_every_image() {
        let mut item = PortfolioItem {
            id: 1,
            image: vec![
                Media {
                    url: "/uploads/a.jpg".into(),
                    ..Default::default()
                },
                Media {
                    url: "/uploads/b.jpg".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        item.resolve_media("https://cms.dbl-ists.com");
        assert_eq!(item.image[0].url, "https://cms.dbl-ists.com/uploads/a.jpg");
        assert_eq!(item.image[1].url, "https://cms.dbl-ists.com/uploads/b.jpg");
    }
}
