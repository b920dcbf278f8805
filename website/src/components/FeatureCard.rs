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

use dbl_cms_types::Feature;
use leptos::*;

use crate::icons::{IconGlyph, IconSet};

pub const CARD_TITLE: &str = "text-2xl font-semibold mb-2 tracking-tight bg-gradient-to-b from-slate-400 to-foreground/90 dark:from-foreground/90 dark:to-slate-500 bg-clip-text text-transparent";

/// Icon, heading and sub-heading of one feature.
#[component]
pub fn FeatureCard(
    feature: Feature,
    icons: IconSet,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="card h-full flex flex-col">
            <div class="p-6 pb-2">
                <IconGlyph icon=icons.lookup(&feature.icon) class="w-8 h-8 mb-4 text-slate-300"/>
                <h3 class=CARD_TITLE>{feature.heading.clone()}</h3>
            </div>
            <div class="p-6 pt-0 flex-1 flex flex-col">
                <p class="text-foreground/60">{feature.sub_heading.clone()}</p>
                {children.map(|children| children())}
            </div>
        </div>
    }
}

/// Centered eyebrow, title and description above a section.
#[component]
pub fn SectionHeading(
    eyebrow: &'static str,
    #[prop(into)] title: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2 items-center mb-12">
            <p class="text-primary text-lg tracking-tight font-medium leading-none">{eyebrow}</p>
            <h2 class="text-3xl md:text-4xl font-semibold tracking-tight text-center">{title}</h2>
            {children.map(|children| view! { <p class="text-foreground/60 text-center">{children()}</p> })}
        </div>
    }
}

/// Borderless feature used on the about and contact pages.
#[component]
pub fn FlatFeature(feature: Feature, icons: IconSet) -> impl IntoView {
    view! {
        <div class="p-6">
            <IconGlyph icon=icons.lookup(&feature.icon) class="w-8 h-8 mb-4 text-slate-300"/>
            <h3 class="text-2xl font-semibold mb-2 tracking-tight text-foreground/90">{feature.heading}</h3>
            <p class="text-foreground/60">{feature.sub_heading}</p>
        </div>
    }
}

/// One justified `<p>` per line.
#[component]
pub fn Paragraphs(lines: Vec<String>) -> impl IntoView {
    lines
        .into_iter()
        .map(|line| view! { <p class="text-foreground/60 text-justify">{line}</p> })
        .collect::<Vec<_>>()
}
