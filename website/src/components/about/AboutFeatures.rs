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

use super::CoreValues::CORE_VALUES;
use crate::components::{CornerMarks, FlatFeature, Paragraphs};
use crate::icons::IconSet;

#[component]
pub fn AboutFeatures(section: FeatureSection) -> impl IntoView {
    let paragraphs: Vec<String> = section.paragraphs().into_iter().map(str::to_string).collect();
    let FeatureSection { title, feature, .. } = section;

    let features = feature
        .into_iter()
        .map(|feature| view! { <FlatFeature feature=feature icons=IconSet::About/> })
        .collect::<Vec<_>>();

    let values = CORE_VALUES
        .iter()
        .map(|(heading, text)| {
            view! {
                <div class="flex flex-col gap-0">
                    <h3 class="text-xl font-semibold mb-2 tracking-tight text-foreground/90">{*heading}</h3>
                    <p class="text-foreground/60">{*text}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="container mx-auto px-4 py-16">
            <div class="flex flex-col gap-2 items-start">
                <h2 class="text-3xl md:text-4xl font-semibold tracking-tight mb-10">{title}</h2>
                <div class="flex flex-col gap-2 border border-foreground/10 p-8 relative">
                    <CornerMarks/>
                    <Paragraphs lines=paragraphs/>
                </div>
            </div>
            <div class="flex flex-col lg:flex-row gap-8 border-x border-b border-foreground/10 relative">
                <div class="bg-neutral-100 dark:bg-neutral-900 w-full">{features}</div>
            </div>
            <div class="flex flex-col gap-2 items-start border-x border-b border-foreground/10 p-8 relative">
                <h2 class="text-3xl md:text-4xl font-semibold tracking-tight mb-10">"Our Core Values"</h2>
                <div class="flex flex-col gap-8">{values}</div>
            </div>
            <div class="flex flex-col gap-2 items-start border-x border-b border-foreground/10 p-8 relative">
                <p class="text-foreground/60">
                    "Looking for our contact information?"
                    <br/>
                    <a
                        href="/contact"
                        class="text-primary underline dark:text-white/80 hover:text-blue-400 dark:hover:text-white transition-colors"
                    >
                        "Click here"
                    </a>
                    " to get in touch."
                </p>
            </div>
        </section>
    }
}
