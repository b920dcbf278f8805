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

use crate::components::{CornerMarks, FlatFeature, Paragraphs};
use crate::icons::IconSet;

pub const SALES_EMAIL: &str = "sales@dbl-ists.com";

const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3858.5155382757252!2d120.98483031153917!3d14.73996048570367!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3397b229e1a829ab%3A0xd8d19fe21e5df434!2sDBL%20Information%20System%20Technology%20Specialist!5e0!3m2!1sen!2sph!4v1739155615675!5m2!1sen!2sph";

#[component]
pub fn ContactFeatures(section: FeatureSection) -> impl IntoView {
    let paragraphs: Vec<String> = section.paragraphs().into_iter().map(str::to_string).collect();
    let FeatureSection { title, feature, .. } = section;

    let features = feature
        .into_iter()
        .map(|feature| view! { <FlatFeature feature=feature icons=IconSet::Contact/> })
        .collect::<Vec<_>>();

    view! {
        <section class="container mx-auto px-4 py-16">
            <div class="flex flex-col gap-2 items-start">
                <h2 class="text-3xl md:text-4xl font-semibold tracking-tight mb-10">{title}</h2>
                <div class="flex flex-col gap-2 border border-foreground/10 p-8 relative w-full">
                    <CornerMarks/>
                    <div class="flex flex-col gap-8">
                        <Paragraphs lines=paragraphs/>
                        <div class="flex flex-col items-end justify-end">
                            <p class="text-3xl font-semibold mb-2 tracking-tight text-foreground/90">
                                "Book a "
                                <a href=format!("mailto:{SALES_EMAIL}") class="text-primary hover:underline">
                                    "meeting!"
                                </a>
                            </p>
                            <p class="text-foreground/60 max-w-sm text-right">
                                "Schedule a meeting with our team to learn more about our products and services. No additional fee required."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
            <div class="bg-neutral-100 dark:bg-neutral-900 grid grid-cols-1 lg:grid-cols-3 gap-4 border-x border-b border-foreground/10 relative">
                {features}
            </div>
            <div class="flex flex-col gap-2 items-start border-x border-b border-foreground/10 p-8 relative">
                <iframe
                    title="DBL Information System Technology Specialist Location"
                    src=MAP_EMBED
                    class="h-[300px] md:h-[600px] w-full border-0 rounded-lg"
                    allowfullscreen=true
                    loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade"
                    aria-label="Map showing the DBL Information System Technology Specialist office"
                ></iframe>
            </div>
        </section>
    }
}
