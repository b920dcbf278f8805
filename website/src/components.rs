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

pub mod BlockRenderer;
pub mod CTAButton;
pub mod CmsImage;
pub mod CornerMarks;
pub mod FeatureCard;
pub mod Footer;
pub mod Header;
pub mod Logo;
pub mod MobileNavigation;
pub mod Page;
pub mod ThemeToggle;

// Block components, grouped by the page that renders them
pub mod home {
    pub mod Benefits;
    pub mod HomeHero;
    pub mod ServicesList;
}

pub mod services {
    pub mod BrandList;
    pub mod HeroCarousel;
    pub mod ServicesGrid;
    pub mod ServicesHero;
}

pub mod about {
    pub mod AboutFeatures;
    pub mod CoreValues;
}

pub mod contact {
    pub mod ContactFeatures;
}

pub mod portfolio {
    pub mod Gallery;
    pub mod NoResults;
    pub mod PortfolioHero;
}

pub use about::AboutFeatures::*;
pub use contact::ContactFeatures::*;
pub use home::{Benefits::*, HomeHero::*, ServicesList::*};
pub use portfolio::{Gallery::*, NoResults::*, PortfolioHero::*};
pub use services::{BrandList::*, HeroCarousel::*, ServicesGrid::*, ServicesHero::*};
pub use BlockRenderer::*;
pub use CTAButton::*;
pub use CmsImage::*;
pub use CornerMarks::*;
pub use FeatureCard::*;
pub use Footer::*;
pub use Header::*;
pub use Logo::*;
pub use MobileNavigation::*;
pub use Page::*;
pub use ThemeToggle::*;
