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

//! Content model for the DBL ISTS website.
//!
//! This crate mirrors the JSON shapes served by the headless CMS (Strapi):
//! field names, nesting and the `__component` discriminator are an external
//! contract and are reproduced exactly through serde attributes.
//! It carries no HTTP client and no UI types.

pub mod blocks;
pub mod links;
pub mod media;
pub mod portfolio;
pub mod responses;

mod de;

pub use blocks::{
    Block, Brand, BrandListSection, Feature, FeatureSection, HeroSection, ServicesSection,
};
pub use links::{normalize_external_url, Link, LogoText};
pub use media::{resolve_media_url, Media, ResolveMedia};
pub use portfolio::{HeroMedia, PortfolioItem};
pub use responses::{
    CmsResponse, Footer, GlobalChrome, GlobalData, Header, PageData, PageMetadata,
};
