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

use std::collections::HashSet;

use dbl_cms_types::{Brand, Media};

/// A sidebar entry: category name and its icon tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandCategory {
    pub category: String,
    pub icon: String,
}

/// Unique categories in first-seen order, each with the icon of the first
/// brand that introduced it.
pub fn categories(brands: &[Brand]) -> Vec<BrandCategory> {
    let mut seen = HashSet::new();
    brands
        .iter()
        .filter(|brand| seen.insert(brand.category.as_str()))
        .map(|brand| BrandCategory {
            category: brand.category.clone(),
            icon: brand.icon.clone(),
        })
        .collect()
}

/// Logos to show for the `active` category. With no category selected every
/// brand is shown and logos shared by several brands appear once.
pub fn images_for(brands: &[Brand], active: Option<&str>) -> Vec<Media> {
    let images = brands
        .iter()
        .filter(|brand| active.map_or(true, |category| brand.category == category))
        .flat_map(|brand| brand.image.iter().cloned());

    match active {
        None => {
            let mut seen = HashSet::new();
            images.filter(|image| seen.insert(image.url.clone())).collect()
        }
        Some(_) => images.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logo(url: &str) -> Media {
        Media {
            url: url.to_string(),
            ..Media::default()
        }
    }

    fn brand(category: &str, icon: &str, urls: &[&str]) -> Brand {
        Brand {
            category: category.to_string(),
            icon: icon.to_string(),
            image: urls.iter().map(|url| logo(url)).collect(),
            ..Brand::default()
        }
    }

    fn sample() -> Vec<Brand> {
        vec![
            brand("Security", "SECURITY_ICON", &["/hikvision.png", "/dahua.png"]),
            brand("Servers", "SERVER_ICON", &["/dell.png", "/synology.png"]),
            brand("Security", "CYBERSECURITY_ICON", &["/eset.png", "/dahua.png"]),
        ]
    }

    #[test]
    fn categories_are_unique_in_first_seen_order() {
        let categories = categories(&sample());
        let names: Vec<_> = categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Security", "Servers"]);
        assert_eq!(categories[0].icon, "SECURITY_ICON");
    }

    #[test]
    fn all_deduplicates_by_url() {
        let urls: Vec<_> = images_for(&sample(), None)
            .into_iter()
            .map(|image| image.url)
            .collect();
        assert_eq!(
            urls,
            vec!["/hikvision.png", "/dahua.png", "/dell.png", "/synology.png", "/eset.png"]
        );
    }

    #[test]
    fn single_category_keeps_every_logo() {
        assert_eq!(images_for(&sample(), Some("Security")).len(), 4);
        assert!(images_for(&sample(), Some("Nope")).is_empty());
    }

    #[test]
    fn category_named_all_is_just_a_category() {
        let mut brands = sample();
        brands.push(brand("all", "BOX_ICON", &["/misc.png"]));

        let urls: Vec<_> = images_for(&brands, Some("all"))
            .into_iter()
            .map(|image| image.url)
            .collect();
        assert_eq!(urls, vec!["/misc.png"]);
        assert_eq!(images_for(&brands, None).len(), 6);
    }
}
