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

//! Page blocks: the dynamic-zone entries of every page, discriminated by the
//! CMS `__component` field.

use serde::{Deserialize, Deserializer, Serialize};

use crate::de::null_as_default;
use crate::links::Link;
use crate::media::{Media, ResolveMedia};
use crate::portfolio::HeroMedia;

pub const HERO_SECTION: &str = "layout.hero-section";
pub const FEATURE_LIST_SECTION: &str = "layout.feature-list-section";
pub const FEATURE_SECTION: &str = "layout.feature-section";
pub const SERVICES_SECTION: &str = "layout.services-section";
pub const BRAND_LIST_SECTION: &str = "layout.brand-list-section";

/// One entry of a page's `blocks` list.
///
/// Tags this site does not know about deserialize to [`Block::Unknown`]
/// and render as nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "__component")]
pub enum Block {
    #[serde(rename = "layout.hero-section")]
    HeroSection(HeroSection),
    #[serde(rename = "layout.feature-list-section")]
    FeatureListSection(FeatureSection),
    #[serde(rename = "layout.feature-section")]
    FeatureSection(FeatureSection),
    #[serde(rename = "layout.services-section")]
    ServicesSection(ServicesSection),
    #[serde(rename = "layout.brand-list-section")]
    BrandListSection(BrandListSection),
    #[serde(other)]
    Unknown,
}

impl Block {
    /// The block's own identifier, used as its rendering key.
    pub fn id(&self) -> Option<i64> {
        match self {
            Block::HeroSection(b) => Some(b.id),
            Block::FeatureListSection(b) | Block::FeatureSection(b) => Some(b.id),
            Block::ServicesSection(b) => Some(b.id),
            Block::BrandListSection(b) => Some(b.id),
            Block::Unknown => None,
        }
    }

    /// The discriminator this block was tagged with.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Block::HeroSection(_) => Some(HERO_SECTION),
            Block::FeatureListSection(_) => Some(FEATURE_LIST_SECTION),
            Block::FeatureSection(_) => Some(FEATURE_SECTION),
            Block::ServicesSection(_) => Some(SERVICES_SECTION),
            Block::BrandListSection(_) => Some(BRAND_LIST_SECTION),
            Block::Unknown => None,
        }
    }
}

impl ResolveMedia for Block {
    fn resolve_media(&mut self, base: &str) {
        match self {
            Block::HeroSection(hero) => {
                hero.image.resolve_media(base);
                hero.hero_media.resolve_media(base);
            }
            Block::BrandListSection(section) => {
                for brand in section.brands.iter_mut() {
                    brand.image.resolve_media(base);
                }
            }
            Block::FeatureListSection(_)
            | Block::FeatureSection(_)
            | Block::ServicesSection(_)
            | Block::Unknown => {}
        }
    }
}

/// `layout.hero-section`.
///
/// The home page uses `image` + `link`, the services page `link` +
/// `heroMedia`, and the portfolio page only the headings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub heading: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_heading: String,
    #[serde(default)]
    pub image: Option<Media>,
    #[serde(default)]
    pub link: Option<Link>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hero_media: Vec<HeroMedia>,
}

/// A card in a feature, benefit or service grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub heading: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_heading: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(default)]
    pub body: Option<String>,
}

/// `layout.feature-section` and `layout.feature-list-section`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureSection {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub feature: Vec<Feature>,
}

impl FeatureSection {
    /// Description paragraphs. Editors separate paragraphs with a literal
    /// `\n` typed into a single-line field, or with real line breaks.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.description
            .split("\\n")
            .flat_map(|chunk| chunk.split('\n'))
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// `layout.services-section`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServicesSection {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<Feature>,
}

/// A brand partner grouped under a category on the services page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: Vec<Media>,
}

/// `layout.brand-list-section`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandListSection {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub heading: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_heading: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brands: Vec<Brand>,
}

/// Deserialize a `blocks` list one entry at a time so that a single
/// malformed block is dropped instead of failing the whole page.
pub(crate) fn deserialize_blocks<'de, D>(deserializer: D) -> Result<Vec<Block>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    let blocks = raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| {
            let tag = value
                .get("__component")
                .and_then(|tag| tag.as_str())
                .unwrap_or("<untagged>")
                .to_string();
            match serde_json::from_value::<Block>(value) {
                Ok(Block::Unknown) => {
                    log::debug!("unrecognised block {tag}, rendering nothing");
                    Some(Block::Unknown)
                }
                Ok(block) => Some(block),
                Err(e) => {
                    log::warn!("dropping malformed block {tag}: {e}");
                    None
                }
            }
        })
        .collect();
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatches_on_component_tag() {
        let block: Block = serde_json::from_value(json!({
            "__component": "layout.services-section",
            "id": 12,
            "title": "Services",
            "description": "What we do",
            "services": [
                {"id": 1, "heading": "CCTV", "subHeading": "Install", "icon": "SECURITY_ICON", "body": "Cameras"}
            ]
        }))
        .unwrap();
        let Block::ServicesSection(section) = &block else {
            panic!("expected services section, got {block:?}");
        };
        assert_eq!(section.services[0].body.as_deref(), Some("Cameras"));
        assert_eq!(block.id(), Some(12));
        assert_eq!(block.tag(), Some(SERVICES_SECTION));
    }

    #[test]
    fn unknown_tag_is_not_an_error() {
        let block: Block = serde_json::from_value(json!({
            "__component": "layout.testimonial-carousel",
            "id": 3,
            "quotes": []
        }))
        .unwrap();
        assert_eq!(block, Block::Unknown);
        assert_eq!(block.id(), None);
    }

    #[test]
    fn feature_list_and_feature_section_share_a_shape() {
        let list: Block = serde_json::from_value(json!({
            "__component": "layout.feature-list-section", "id": 1, "title": "A", "feature": []
        }))
        .unwrap();
        let grid: Block = serde_json::from_value(json!({
            "__component": "layout.feature-section", "id": 2, "title": "B", "feature": null
        }))
        .unwrap();
        assert!(matches!(list, Block::FeatureListSection(_)));
        assert!(matches!(grid, Block::FeatureSection(_)));
    }

    #[test]
    fn paragraphs_split_on_literal_and_real_newlines() {
        let section = FeatureSection {
            description: "First.\\nSecond.\nThird.\\n".into(),
            ..Default::default()
        };
        assert_eq!(section.paragraphs(), vec!["First.", "Second.", "Third."]);
    }

    #[test]
    fn resolves_hero_and_brand_media() {
        let mut hero: Block = serde_json::from_value(json!({
            "__component": "layout.hero-section",
            "id": 1,
            "heading": "Modernize",
            "image": {"id": 1, "url": "/uploads/hero.jpg"},
            "heroMedia": [{"id": 5, "heading": "NOC", "image": {"id": 2, "url": "/uploads/noc.jpg"}}]
        }))
        .unwrap();
        hero.resolve_media("http://cms:1337");
        let Block::HeroSection(hero) = hero else {
            panic!("expected hero");
        };
        assert_eq!(
            hero.image.unwrap().url,
            "http://cms:1337/uploads/hero.jpg"
        );
        assert_eq!(
            hero.hero_media[0].image.as_ref().unwrap().url,
            "http://cms:1337/uploads/noc.jpg"
        );
    }
}
