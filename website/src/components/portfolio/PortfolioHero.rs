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

#[component]
pub fn PortfolioHero(hero: HeroSection) -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 pt-16">
            <div class="flex flex-col gap-2 items-start mb-12">
                <h1 class="text-3xl md:text-4xl font-semibold tracking-tight">{hero.heading}</h1>
                <p class="text-foreground/60">{hero.sub_heading}</p>
            </div>
        </section>
    }
}
