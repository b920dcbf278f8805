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

use dbl_cms_types::HeroSection;
use leptos::*;

use crate::components::{ButtonSize, CTAButton, HeroCarousel};

#[component]
pub fn ServicesHero(hero: HeroSection) -> impl IntoView {
    let HeroSection {
        heading,
        sub_heading,
        link,
        hero_media,
        ..
    } = hero;

    view! {
        <section class="container mx-auto px-4 py-16">
            <div class="flex flex-col gap-2 items-start mb-12">
                <h1 class="text-3xl md:text-4xl font-semibold tracking-tight">{heading}</h1>
                <p class="text-foreground/60">{sub_heading}</p>
            </div>
            {link.map(|link| view! { <CTAButton link=link size=ButtonSize::Large class="mb-12"/> })}
            {(!hero_media.is_empty()).then(|| view! { <HeroCarousel slides=hero_media/> })}
        </section>
    }
}
