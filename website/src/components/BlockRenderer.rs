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

use dbl_cms_types::Block;
use leptos::*;

use crate::blocks::{render_plan, BlockComponent, PageKind, PlannedBlock};
use crate::components::{
    AboutFeatures, Benefits, BrandList, ContactFeatures, HomeHero, PortfolioHero, ServicesGrid,
    ServicesHero, ServicesList,
};

/// Renders a page's CMS blocks in order, skipping blocks the page has no
/// component for.
#[component]
pub fn BlockRenderer(page: PageKind, blocks: Vec<Block>) -> impl IntoView {
    render_plan(page, &blocks)
        .into_iter()
        .map(render_block)
        .collect::<Vec<_>>()
}

fn render_block(planned: PlannedBlock) -> View {
    use BlockComponent as C;

    match (planned.component, planned.block) {
        (C::HomeHero, Block::HeroSection(hero)) => view! { <HomeHero hero=hero/> }.into_view(),
        (C::ServicesHero, Block::HeroSection(hero)) => {
            view! { <ServicesHero hero=hero/> }.into_view()
        }
        (C::PortfolioHero, Block::HeroSection(hero)) => {
            view! { <PortfolioHero hero=hero/> }.into_view()
        }
        (C::ServicesList, Block::FeatureListSection(section)) => {
            view! { <ServicesList section=section/> }.into_view()
        }
        (C::Benefits, Block::FeatureSection(section)) => {
            view! { <Benefits section=section/> }.into_view()
        }
        (C::AboutFeatures, Block::FeatureSection(section)) => {
            view! { <AboutFeatures section=section/> }.into_view()
        }
        (C::ContactFeatures, Block::FeatureSection(section)) => {
            view! { <ContactFeatures section=section/> }.into_view()
        }
        (C::ServicesGrid, Block::ServicesSection(section)) => {
            view! { <ServicesGrid section=section/> }.into_view()
        }
        (C::BrandList, Block::BrandListSection(section)) => {
            view! { <BrandList section=section/> }.into_view()
        }
        (component, _) => {
            log::warn!("block {} does not fit {component:?}", planned.key);
            ().into_view()
        }
    }
}
