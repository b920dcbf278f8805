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

use dbl_cms_types::FeatureSection;
use leptos::*;

use crate::components::{FeatureCard, SectionHeading};
use crate::icons::IconSet;

#[component]
pub fn ServicesList(section: FeatureSection) -> impl IntoView {
    let FeatureSection {
        title,
        description,
        feature,
        ..
    } = section;

    let cards = feature
        .into_iter()
        .map(|feature| view! { <FeatureCard feature=feature icons=IconSet::ServicesList/> })
        .collect::<Vec<_>>();

    view! {
        <section class="container mx-auto px-4 py-16 overflow-hidden">
            <SectionHeading eyebrow="Services" title=title>
                {description}
                ". Learn more "
                <a
                    href="/services"
                    class="text-primary underline dark:text-white/80 hover:text-blue-400 dark:hover:text-white transition-colors"
                >
                    "here"
                </a>
                "."
            </SectionHeading>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>
        </section>
    }
}
