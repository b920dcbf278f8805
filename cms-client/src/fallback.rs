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

//! Static content served when the CMS is skipped or unavailable.

use dbl_cms_types::{Footer, GlobalData, Header, Link, PageData, PageMetadata, PortfolioItem};

/// Header and footer with the built-in navigation.
pub fn global() -> GlobalData {
    GlobalData::new(
        Header::default(),
        Footer {
            external_link: vec![
                Link::external(1, "Twitter", "https://twitter.com"),
                Link::external(2, "LinkedIn", "https://linkedin.com"),
            ],
            ..Footer::default()
        },
    )
}

pub fn metadata() -> PageMetadata {
    PageMetadata::default()
}

/// A page with no blocks.
pub fn page(document_id: &str) -> PageData {
    PageData {
        id: 0,
        document_id: document_id.to_string(),
        blocks: Vec::new(),
    }
}

pub fn portfolio_items() -> Vec<PortfolioItem> {
    Vec::new()
}

/// Placeholder for a single portfolio item that could not be loaded.
pub fn portfolio_item(id: &str) -> PortfolioItem {
    PortfolioItem {
        id: id.parse().unwrap_or_default(),
        heading: "Portfolio Item".to_string(),
        sub_heading: "This is a sample portfolio item".to_string(),
        date: String::new(),
        category: "General".to_string(),
        image: Vec::new(),
    }
}
