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

use dbl_cms_types::ServicesSection;
use leptos::*;

use crate::components::CARD_TITLE;
use crate::icons::{IconGlyph, IconSet};

#[component]
pub fn ServicesGrid(section: ServicesSection) -> impl IntoView {
    let ServicesSection {
        title,
        description,
        services,
        ..
    } = section;

    let cards = services
        .into_iter()
        .map(|service| {
            view! {
                <div class="card">
                    <div class="p-6 pb-2">
                        <IconGlyph
                            icon=IconSet::Services.lookup(&service.icon)
                            class="w-8 h-8 mb-4 text-slate-300"
                        />
                        <h3 class=CARD_TITLE>{service.heading}</h3>
                        <p class="text-foreground/50 mb-2">{service.sub_heading}</p>
                    </div>
                    <div class="p-6 pt-0">
                        <p class="text-foreground/70">{service.body.unwrap_or_default()}</p>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="container mx-auto px-4 py-16">
            <div class="flex flex-col gap-2 items-start mb-12">
                <p class="text-primary text-lg tracking-tight font-medium leading-none">{title}</p>
                <h2 class="text-3xl md:text-4xl font-semibold tracking-tight">{description}</h2>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>
        </section>
    }
}
