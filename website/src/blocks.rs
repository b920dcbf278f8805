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

//! Block registry: which component renders which block on which page.
//!
//! The same CMS block kind looks different per page (a hero on the home
//! page is not the services hero), so the lookup is keyed by both.

use dbl_cms_types::Block;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Services,
    About,
    Contact,
    Portfolio,
}

/// A renderable section component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockComponent {
    HomeHero,
    ServicesList,
    Benefits,
    ServicesHero,
    ServicesGrid,
    BrandList,
    AboutFeatures,
    ContactFeatures,
    PortfolioHero,
}

/// The component registered for `block` on `page`, if any.
pub fn component_for(page: PageKind, block: &Block) -> Option<BlockComponent> {
    use BlockComponent as C;

    match (page, block) {
        (PageKind::Home, Block::HeroSection(_)) => Some(C::HomeHero),
        (PageKind::Home, Block::FeatureListSection(_)) => Some(C::ServicesList),
        (PageKind::Home, Block::FeatureSection(_)) => Some(C::Benefits),

        (PageKind::Services, Block::HeroSection(_)) => Some(C::ServicesHero),
        (PageKind::Services, Block::ServicesSection(_)) => Some(C::ServicesGrid),
        (PageKind::Services, Block::BrandListSection(_)) => Some(C::BrandList),

        (PageKind::About, Block::FeatureSection(_)) => Some(C::AboutFeatures),
        (PageKind::Contact, Block::FeatureSection(_)) => Some(C::ContactFeatures),
        (PageKind::Portfolio, Block::HeroSection(_)) => Some(C::PortfolioHero),

        _ => None,
    }
}

/// A block scheduled for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedBlock {
    /// The block's own id; stable across re-renders.
    pub key: i64,
    pub component: BlockComponent,
    pub block: Block,
}

/// Blocks of `page` that have a component, in CMS order.
pub fn render_plan(page: PageKind, blocks: &[Block]) -> Vec<PlannedBlock> {
    blocks
        .iter()
        .filter_map(|block| {
            let component = component_for(page, block)?;
            Some(PlannedBlock {
                key: block.id().unwrap_or_default(),
                component,
                block: block.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbl_cms_types::{BrandListSection, FeatureSection, HeroSection, ServicesSection};

    fn hero(id: i64) -> Block {
        Block::HeroSection(HeroSection {
            id,
            ..Default::default()
        })
    }

    fn features(id: i64) -> Block {
        Block::FeatureSection(FeatureSection {
            id,
            ..Default::default()
        })
    }

    fn feature_list(id: i64) -> Block {
        Block::FeatureListSection(FeatureSection {
            id,
            ..Default::default()
        })
    }

    #[test]
    fn plan_preserves_cms_order() {
        let blocks = vec![features(3), hero(1), feature_list(2)];
        let plan = render_plan(PageKind::Home, &blocks);
        let keys: Vec<_> = plan.iter().map(|p| p.key).collect();
        assert_eq!(keys, vec![3, 1, 2]);
        let components: Vec<_> = plan.iter().map(|p| p.component).collect();
        assert_eq!(
            components,
            vec![
                BlockComponent::Benefits,
                BlockComponent::HomeHero,
                BlockComponent::ServicesList
            ]
        );
    }

    #[test]
    fn unknown_blocks_render_nothing() {
        let blocks = vec![hero(1), Block::Unknown, features(2)];
        let plan = render_plan(PageKind::Home, &blocks);
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn blocks_not_registered_for_the_page_render_nothing() {
        let services = Block::ServicesSection(ServicesSection {
            id: 9,
            ..Default::default()
        });
        assert_eq!(component_for(PageKind::Home, &services), None);
        assert_eq!(
            component_for(PageKind::Services, &services),
            Some(BlockComponent::ServicesGrid)
        );

        let brands = Block::BrandListSection(BrandListSection::default());
        assert_eq!(component_for(PageKind::About, &brands), None);
        assert_eq!(component_for(PageKind::Contact, &hero(1)), None);
    }

    #[test]
    fn same_kind_maps_per_page() {
        assert_eq!(component_for(PageKind::Home, &hero(1)), Some(BlockComponent::HomeHero));
        assert_eq!(
            component_for(PageKind::Services, &hero(1)),
            Some(BlockComponent::ServicesHero)
        );
        assert_eq!(
            component_for(PageKind::Portfolio, &hero(1)),
            Some(BlockComponent::PortfolioHero)
        );
        assert_eq!(
            component_for(PageKind::About, &features(1)),
            Some(BlockComponent::AboutFeatures)
        );
        assert_eq!(
            component_for(PageKind::Contact, &features(1)),
            Some(BlockComponent::ContactFeatures)
        );
    }

    #[test]
    fn empty_page_has_empty_plan() {
        assert!(render_plan(PageKind::Portfolio, &[]).is_empty());
    }
}
