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

//! Portfolio gallery: filter bar, paged card grid and an image modal.

use dbl_cms_types::PortfolioItem;
use leptos::*;

use super::NoResults::NoResults;
use crate::components::{CmsImage, CornerMarks};
use crate::icons::{Icon, IconGlyph};
use crate::state::carousel::Carousel;
use crate::state::gallery::{categories, display_date, DateRange, GalleryFilter};
use crate::state::pagination::{PageMarker, Pagination};

const FIELD: &str = "h-10 md:h-9 w-full rounded-md border border-foreground/15 bg-transparent px-3 text-sm focus:outline-none focus-visible:ring-2 focus-visible:ring-primary/40";

/// The open modal: which item, and which of its images.
#[derive(Debug, Clone, PartialEq)]
struct Viewer {
    item: PortfolioItem,
    carousel: Carousel,
}

#[island]
pub fn Gallery(items: Vec<PortfolioItem>) -> impl IntoView {
    let category_names = categories(&items);

    let search = create_rw_signal(String::new());
    let category = create_rw_signal(None::<String>);
    let date_from = create_rw_signal(String::new());
    let date_to = create_rw_signal(String::new());
    let pagination = create_rw_signal(Pagination::new(items.len()));
    let viewer = create_rw_signal(None::<Viewer>);

    let filter = create_memo(move |_| GalleryFilter {
        search: search.get(),
        category: category.get(),
        dates: DateRange::from_inputs(&date_from.get(), &date_to.get()),
    });
    let filtered = create_memo(move |_| filter.with(|filter| filter.apply(&items)));

    // every filter edit starts over on page 1
    let refilter = move || {
        let len = filtered.with(Vec::len);
        pagination.update(|pager| *pager = pager.reset(len));
    };

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(ev::keydown, move |ev| {
            if viewer.with_untracked(Option::is_none) {
                return;
            }
            match ev.key().as_str() {
                "Escape" => viewer.set(None),
                "ArrowRight" => viewer.update(|open| {
                    if let Some(open) = open {
                        open.carousel = open.carousel.next();
                    }
                }),
                "ArrowLeft" => viewer.update(|open| {
                    if let Some(open) = open {
                        open.carousel = open.carousel.prev();
                    }
                }),
                _ => {}
            }
        });
        on_cleanup(move || handle.remove());
    }

    let category_options = category_names
        .into_iter()
        .map(|name| view! { <option value=name.clone()>{name}</option> })
        .collect::<Vec<_>>();

    let date_label = move || {
        filter.with(|filter| {
            filter
                .dates
                .map(|range| range.label())
                .unwrap_or_else(|| "Pick a date range".to_string())
        })
    };

    let page_items = move || {
        let range = pagination.get().range();
        filtered.with(|items| items.get(range).map(<[_]>::to_vec).unwrap_or_default())
    };

    view! {
        <div class="container mx-auto px-4 md:px-6">
            <div class="flex flex-col space-y-4 md:space-y-0 md:flex-row md:items-center md:space-x-4">
                <div class="w-full relative">
                    <span class="absolute left-3 top-1/2 -translate-y-1/2 text-foreground/50">
                        <IconGlyph icon=Icon::Search class="h-4 w-4"/>
                    </span>
                    <input
                        id="search"
                        type="search"
                        placeholder="Search by name..."
                        class=format!("{FIELD} pl-9")
                        prop:value=move || search.get()
                        on:input=move |ev| {
                            search.set(event_target_value(&ev));
                            refilter();
                        }
                    />
                </div>
                <div class="grid grid-cols-2 gap-4 md:flex md:gap-4 md:flex-1 md:justify-end">
                    <select
                        aria-label="Category"
                        class=format!("{FIELD} md:w-[180px]")
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            category.set((!value.is_empty()).then_some(value));
                            refilter();
                        }
                    >
                        <option value="">"All Categories"</option>
                        {category_options}
                    </select>
                    <details class="relative w-full md:w-64">
                        <summary class=format!("{FIELD} flex items-center gap-2 cursor-pointer list-none")>
                            <IconGlyph icon=Icon::Calendar class="h-4 w-4 shrink-0"/>
                            <span class="flex-1 line-clamp-1">{date_label}</span>
                        </summary>
                        <div class="absolute right-0 z-20 mt-2 w-72 card">
                            <div class="p-3 border-b border-foreground/10">
                                <h4 class="text-sm font-medium">"Select dates"</h4>
                                <p class="text-xs text-foreground/60">"Choose a start and end date"</p>
                            </div>
                            <div class="p-3 flex flex-col gap-3">
                                <label class="text-xs text-foreground/60 flex flex-col gap-1">
                                    "From"
                                    <input
                                        type="date"
                                        class=FIELD
                                        prop:value=move || date_from.get()
                                        on:input=move |ev| {
                                            date_from.set(event_target_value(&ev));
                                            refilter();
                                        }
                                    />
                                </label>
                                <label class="text-xs text-foreground/60 flex flex-col gap-1">
                                    "To"
                                    <input
                                        type="date"
                                        class=FIELD
                                        prop:value=move || date_to.get()
                                        on:input=move |ev| {
                                            date_to.set(event_target_value(&ev));
                                            refilter();
                                        }
                                    />
                                </label>
                                <button
                                    type="button"
                                    class="self-end text-xs text-primary hover:underline"
                                    on:click=move |_| {
                                        date_from.set(String::new());
                                        date_to.set(String::new());
                                        refilter();
                                    }
                                >
                                    "Clear"
                                </button>
                            </div>
                        </div>
                    </details>
                </div>
            </div>
        </div>

        <Show
            when=move || filtered.with(|items| !items.is_empty())
            fallback=|| view! { <NoResults/> }
        >
            <section class="container mx-auto px-4 py-16">
                <div class="flex flex-col gap-8">
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 p-8 border border-foreground/10 relative">
                        <CornerMarks/>
                        {move || {
                            page_items()
                                .into_iter()
                                .map(|item| view! { <PortfolioCard item=item viewer=viewer/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <Pager pagination=pagination/>
                </div>
            </section>
        </Show>

        {move || viewer.get().map(|open| view! { <ImageModal open=open viewer=viewer/> })}
    }
}

#[component]
fn PortfolioCard(item: PortfolioItem, viewer: RwSignal<Option<Viewer>>) -> impl IntoView {
    let extra_images = item.image.len().saturating_sub(1);
    let cover = item.cover().cloned();
    let date = display_date(&item);
    let heading = item.heading.clone();
    let sub_heading = item.sub_heading.clone();
    let category = item.category.clone();
    let datetime = item.date.clone();

    let open = move |_| {
        viewer.set(Some(Viewer {
            carousel: Carousel::new(item.image.len()),
            item: item.clone(),
        }))
    };

    view! {
        <button
            type="button"
            class="card group text-left cursor-pointer overflow-hidden hover:shadow-lg transition-shadow duration-300"
            on:click=open
        >
            <div class="aspect-[4/3] relative overflow-hidden bg-foreground/5">
                {match cover {
                    Some(media) => {
                        view! {
                            <CmsImage
                                media=media
                                class="object-cover w-full h-full transition-transform duration-300 group-hover:scale-105"
                            />
                        }
                            .into_view()
                    }
                    None => {
                        view! {
                            <div class="w-full h-full flex flex-col items-center justify-center gap-2 text-foreground/40">
                                <IconGlyph icon=Icon::ImageOff class="h-10 w-10"/>
                                <span class="text-xs">"No image"</span>
                            </div>
                        }
                            .into_view()
                    }
                }}
                {(extra_images > 0)
                    .then(|| {
                        view! {
                            <div class="absolute top-2 right-2 bg-gradient-to-b from-slate-300 to-white rounded-lg w-10 h-8 flex items-center justify-center shadow-sm">
                                <span class="text-sm font-medium text-neutral-800">
                                    {format!("+{extra_images}")}
                                </span>
                            </div>
                        }
                    })}
                {(!category.is_empty())
                    .then(|| {
                        view! {
                            <span class="absolute top-2 left-2 inline-flex items-center rounded-lg bg-gradient-to-b from-slate-300 to-white p-2 text-xs font-medium text-neutral-800">
                                {category}
                            </span>
                        }
                    })}
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold tracking-tight line-clamp-1 mb-2">{heading}</h3>
                <p class="text-sm text-foreground/60 line-clamp-2">{sub_heading}</p>
            </div>
            <div class="px-6 pb-4 flex justify-start items-center gap-2 text-foreground/60">
                <IconGlyph icon=Icon::Calendar class="w-4 h-4"/>
                <time datetime=datetime class="text-sm">{date}</time>
            </div>
        </button>
    }
}

#[component]
fn Pager(pagination: RwSignal<Pagination>) -> impl IntoView {
    let step = "inline-flex items-center gap-1 h-9 px-3 rounded-md text-sm hover:bg-foreground/5";

    let numbers = move || {
        let pager = pagination.get();
        pager
            .page_numbers()
            .into_iter()
            .map(|marker| match marker {
                PageMarker::Ellipsis => view! {
                    <span class="h-9 w-9 flex items-center justify-center" aria-hidden="true">"..."</span>
                }
                .into_view(),
                PageMarker::Page(page) => {
                    let current = pager.current() == page;
                    view! {
                        <button
                            type="button"
                            class="h-9 w-9 rounded-md text-sm hover:bg-foreground/5"
                            class=("border", current)
                            class=("border-foreground/20", current)
                            aria-current=current.then_some("page")
                            on:click=move |_| pagination.update(|p| *p = p.go_to(page))
                        >
                            {page}
                        </button>
                    }
                    .into_view()
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Show when=move || pagination.with(Pagination::is_paged) fallback=|| ()>
            <nav aria-label="pagination" class="flex justify-center mt-8 gap-1">
                <button
                    type="button"
                    class=step
                    class=("pointer-events-none", move || !pagination.with(Pagination::has_prev))
                    class=("opacity-50", move || !pagination.with(Pagination::has_prev))
                    aria-label="Go to previous page"
                    on:click=move |_| pagination.update(|p| *p = p.prev())
                >
                    <IconGlyph icon=Icon::ChevronLeft class="h-4 w-4"/>
                    <span>"Previous"</span>
                </button>
                {numbers}
                <button
                    type="button"
                    class=step
                    class=("pointer-events-none", move || !pagination.with(Pagination::has_next))
                    class=("opacity-50", move || !pagination.with(Pagination::has_next))
                    aria-label="Go to next page"
                    on:click=move |_| pagination.update(|p| *p = p.next())
                >
                    <span>"Next"</span>
                    <IconGlyph icon=Icon::ChevronRight class="h-4 w-4"/>
                </button>
            </nav>
        </Show>
    }
}

#[component]
fn ImageModal(open: Viewer, viewer: RwSignal<Option<Viewer>>) -> impl IntoView {
    let Viewer { item, carousel } = open;
    let close = move |_: ev::MouseEvent| viewer.set(None);
    let step = move |forward: bool| {
        viewer.update(|open| {
            if let Some(open) = open {
                open.carousel = if forward {
                    open.carousel.next()
                } else {
                    open.carousel.prev()
                };
            }
        })
    };

    let body = match item.image.get(carousel.index()).cloned() {
        None => view! {
            <div class="aspect-[16/9] w-full rounded-lg bg-foreground/5 flex flex-col items-center justify-center gap-2 text-foreground/50">
                <IconGlyph icon=Icon::ImageOff class="h-12 w-12"/>
                <p class="text-sm">"No images available"</p>
            </div>
        }
        .into_view(),
        Some(image) => {
            let alt = format!("{} - Image {}", item.heading, carousel.index() + 1);
            let fallback_alt = image.alt_or(&alt).to_string();
            view! {
                <div class="relative w-full">
                    <div class="relative aspect-[16/9] w-full overflow-hidden rounded-lg bg-foreground/5">
                        <img
                            src=image.url.clone()
                            alt=fallback_alt
                            class="object-contain w-full h-full"
                        />
                    </div>
                    <button
                        type="button"
                        class="absolute left-4 top-1/2 -translate-y-1/2 h-8 w-8 rounded-full flex items-center justify-center bg-white/80 text-neutral-900 backdrop-blur-sm"
                        aria-label="Previous image"
                        on:click=move |_| step(false)
                    >
                        <IconGlyph icon=Icon::ChevronLeft class="h-4 w-4"/>
                    </button>
                    <button
                        type="button"
                        class="absolute right-4 top-1/2 -translate-y-1/2 h-8 w-8 rounded-full flex items-center justify-center bg-white/80 text-neutral-900 backdrop-blur-sm"
                        aria-label="Next image"
                        on:click=move |_| step(true)
                    >
                        <IconGlyph icon=Icon::ChevronRight class="h-4 w-4"/>
                    </button>
                    <div class="absolute bottom-4 left-1/2 -translate-x-1/2 px-3 py-1.5 rounded-full bg-white/80 text-neutral-900 backdrop-blur-sm text-sm font-medium">
                        {carousel.counter()}
                    </div>
                </div>
            }
            .into_view()
        }
    };

    view! {
        <div class="fixed inset-0 z-50 bg-black/60" on:click=close></div>
        <div
            role="dialog"
            aria-modal="true"
            aria-labelledby="gallery-modal-title"
            class="fixed left-1/2 top-1/2 z-50 -translate-x-1/2 -translate-y-1/2 max-w-[95vw] w-full lg:max-w-5xl p-4 overflow-hidden bg-white dark:bg-neutral-950 rounded-lg lg:rounded-xl lg:border border-foreground/10"
        >
            <div class="relative flex items-start justify-between p-4 border-b border-foreground/10">
                <div class="flex-1 text-left">
                    <h2 id="gallery-modal-title" class="text-xl font-semibold leading-none">
                        {item.heading.clone()}
                    </h2>
                    <p class="text-sm text-foreground/60 mt-1.5">{item.sub_heading.clone()}</p>
                </div>
                <button
                    type="button"
                    class="h-9 w-9 shrink-0 rounded-full flex items-center justify-center hover:bg-foreground/5"
                    on:click=close
                >
                    <IconGlyph icon=Icon::Close class="h-4 w-4"/>
                    <span class="sr-only">"Close"</span>
                </button>
            </div>
            <div class="px-4 py-6 md:p-6">{body}</div>
        </div>
    }
}
