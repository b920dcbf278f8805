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

use dbl_cms_types::PortfolioItem;
use leptos::*;
use leptos_router::use_params_map;

use crate::api::{get_portfolio_item, or_fallback};
use crate::components::{CmsImage, Page};
use crate::icons::{Icon, IconGlyph};
use crate::state::gallery::display_date;

/// Standalone view of one portfolio entry, addressed by CMS id or document id.
#[component]
pub fn PortfolioDetail() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|params| params.get("id").cloned().unwrap_or_default());
    let item = create_resource(id, get_portfolio_item);

    view! {
        <Page title="Portfolio">
            <Suspense fallback=|| ()>
                {move || {
                    item.get().map(|result| view! { <ItemDetail item=or_fallback(result)/> })
                }}
            </Suspense>
        </Page>
    }
}

#[component]
fn ItemDetail(item: PortfolioItem) -> impl IntoView {
    let date = display_date(&item);
    let images = item
        .image
        .into_iter()
        .map(|media| {
            view! {
                <div class="aspect-[4/3] overflow-hidden rounded-lg bg-foreground/5">
                    <CmsImage media=media class="object-cover w-full h-full"/>
                </div>
            }
        })
        .collect::<Vec<_>>();
    let has_images = !images.is_empty();

    view! {
        <section class="container mx-auto px-4 md:px-6 py-16 flex flex-col gap-8">
            <a href="/portfolio" class="inline-flex items-center gap-2 text-sm text-foreground/60 hover:text-foreground">
                <IconGlyph icon=Icon::ChevronLeft class="h-4 w-4"/>
                "Back to portfolio"
            </a>
            <div class="flex flex-col gap-2">
                {(!item.category.is_empty())
                    .then(|| {
                        view! {
                            <span class="self-start rounded-lg bg-gradient-to-b from-slate-300 to-white p-2 text-xs font-medium text-neutral-800">
                                {item.category}
                            </span>
                        }
                    })}
                <h1 class="text-3xl md:text-5xl font-bold tracking-tight">{item.heading}</h1>
                <p class="text-lg text-foreground/60">{item.sub_heading}</p>
                <p class="flex items-center gap-2 text-sm text-foreground/60">
                    <IconGlyph icon=Icon::Calendar class="w-4 h-4"/>
                    <time datetime=item.date>{date}</time>
                </p>
            </div>
            {if has_images {
                view! { <div class="grid grid-cols-1 md:grid-cols-2 gap-6">{images}</div> }
                    .into_view()
            } else {
                view! {
                    <div class="aspect-[16/9] w-full rounded-lg bg-foreground/5 flex flex-col items-center justify-center gap-2 text-foreground/50">
                        <IconGlyph icon=Icon::ImageOff class="h-12 w-12"/>
                        <p class="text-sm">"No images available"</p>
                    </div>
                }
                    .into_view()
            }}
        </section>
    }
}
