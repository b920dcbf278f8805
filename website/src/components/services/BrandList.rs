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

use dbl_cms_types::BrandListSection;
use leptos::*;

use crate::components::{CmsImage, CornerMarks};
use crate::icons::{Icon, IconGlyph, IconSet};
use crate::state::brands as brand_state;

#[component]
fn CategoryButton(
    icon: Icon,
    label: String,
    /// `None` is the "All" entry.
    key: Option<String>,
    active: RwSignal<Option<String>>,
) -> impl IntoView {
    let selected = {
        let key = key.clone();
        create_memo(move |_| active.with(|active| *active == key))
    };
    view! {
        <button
            type="button"
            class="flex items-center gap-3 p-3 text-sm transition-colors rounded-lg hover:bg-foreground/5 whitespace-nowrap lg:w-full lg:whitespace-normal lg:p-4"
            class=("bg-foreground/5", move || selected.get())
            class=("font-medium", move || selected.get())
            class=("text-foreground/60", move || !selected.get())
            aria-pressed=move || selected.get().to_string()
            on:click=move |_| active.set(key.clone())
        >
            <IconGlyph icon=icon class="w-4 h-4 text-foreground/60"/>
            <span class="text-sm font-medium">{label}</span>
        </button>
    }
}

/// Brand logos with a category sidebar. "All" shows each logo once.
#[island]
pub fn BrandList(section: BrandListSection) -> impl IntoView {
    let BrandListSection {
        heading,
        sub_heading,
        brands,
        ..
    } = section;
    let active = create_rw_signal(None::<String>);

    let sidebar = brand_state::categories(&brands)
        .into_iter()
        .map(|entry| {
            view! {
                <CategoryButton
                    icon=IconSet::Services.lookup(&entry.icon)
                    label=entry.category.clone()
                    key=Some(entry.category)
                    active=active
                />
            }
        })
        .collect::<Vec<_>>();

    let logos = move || {
        active.with(|active| brand_state::images_for(&brands, active.as_deref()))
            .into_iter()
            .enumerate()
            .map(|(index, image)| {
                view! {
                    <div class="relative aspect-square flex items-center justify-center p-4 hover:scale-105 transition-all duration-200">
                        <CmsImage
                            media=image
                            alt="Brand logo"
                            class="object-contain w-full h-full lg:grayscale lg:hover:grayscale-0 transition-all duration-300"
                            eager=index < 8
                        />
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="container mx-auto px-4 py-16">
            <div class="flex flex-col gap-2 items-start md:items-end mb-12">
                <p class="text-primary text-lg tracking-tight font-medium leading-none">{heading}</p>
                <h2 class="text-3xl md:text-4xl font-semibold tracking-tight">{sub_heading}</h2>
            </div>
            <div class="flex flex-col lg:flex-row p-4 gap-6 border border-foreground/10 relative md:p-6">
                <CornerMarks/>
                <div class="flex lg:flex-col gap-2 overflow-x-auto pb-2 lg:pb-0">
                    <div class="flex lg:flex-col gap-1 min-w-max lg:min-w-full">
                        <CategoryButton
                            icon=Icon::Box
                            label="All".to_string()
                            key=None
                            active=active
                        />
                        {sidebar}
                    </div>
                </div>
                <div class="flex-1">
                    <div class="card w-full h-auto lg:h-[36rem] dark:bg-white">
                        <div class="p-4 md:p-6 h-full overflow-y-auto scroll-smooth">
                            <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 xl:grid-cols-5 gap-6 min-h-min pr-2">
                                {logos}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
