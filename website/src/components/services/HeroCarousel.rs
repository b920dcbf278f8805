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

use std::time::Duration;

use dbl_cms_types::HeroMedia;
use leptos::*;

use crate::components::{CmsImage, CornerMarks};
use crate::icons::{Icon, IconGlyph};
use crate::state::carousel::Carousel;

pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(10);

/// Looping media carousel with dot pagination. Advances every
/// [`AUTOPLAY_INTERVAL`] once hydrated.
#[island]
pub fn HeroCarousel(slides: Vec<HeroMedia>) -> impl IntoView {
    let (carousel, set_carousel) = create_signal(Carousel::new(slides.len()));

    #[cfg(feature = "hydrate")]
    {
        if let Ok(handle) = set_interval_with_handle(
            move || set_carousel.update(|c| *c = c.next()),
            AUTOPLAY_INTERVAL,
        ) {
            on_cleanup(move || handle.clear());
        }
    }

    let total = slides.len();
    let slides = slides
        .into_iter()
        .enumerate()
        .map(|(index, media)| {
            let HeroMedia {
                heading,
                sub_heading,
                date,
                image,
                ..
            } = media;
            view! {
                <div
                    class="relative rounded-xl overflow-hidden flex flex-col card h-full"
                    class:hidden=move || carousel.get().index() != index
                    aria-roledescription="slide"
                    aria-label=format!("{} of {total}", index + 1)
                >
                    <div class="aspect-[16/9] w-full relative bg-foreground/5">
                        {image.map(|media| {
                            view! {
                                <CmsImage
                                    media=media
                                    class="object-contain md:object-cover w-full h-full absolute inset-0"
                                    eager=index == 0
                                />
                            }
                        })}
                    </div>
                    <div class="p-3 sm:p-4 md:p-6 h-32 sm:h-36 md:h-40 overflow-hidden">
                        <h2 class="text-lg sm:text-xl md:text-2xl font-semibold tracking-tight line-clamp-1">
                            {heading}
                        </h2>
                        <p class="mt-1 sm:mt-2 text-sm sm:text-base text-foreground/70 line-clamp-2">
                            {sub_heading}
                        </p>
                        <p class="text-xs sm:text-sm text-foreground/50 mt-1 sm:mt-2">{date}</p>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let dots = (0..total)
        .map(|index| {
            view! {
                <button
                    type="button"
                    class="h-2 rounded-full transition-all"
                    class=("bg-primary", move || carousel.get().index() == index)
                    class=("w-4", move || carousel.get().index() == index)
                    class=("w-2", move || carousel.get().index() != index)
                    class=("bg-gray-300", move || carousel.get().index() != index)
                    aria-label=format!("Go to slide {}", index + 1)
                    on:click=move |_| set_carousel.update(|c| *c = c.go_to(index))
                ></button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="relative" aria-roledescription="carousel">
            <div class="relative p-0 sm:p-8 sm:border border-foreground/10">
                <CornerMarks class="hidden sm:block"/>
                {slides}
                <button
                    type="button"
                    class="absolute left-4 top-1/2 -translate-y-1/2 z-10 p-2 rounded-full text-white/0 hover:text-white/80"
                    aria-label="Previous slide"
                    on:click=move |_| set_carousel.update(|c| *c = c.prev())
                >
                    <IconGlyph icon=Icon::ChevronLeft/>
                </button>
                <button
                    type="button"
                    class="absolute right-4 top-1/2 -translate-y-1/2 z-10 p-2 rounded-full text-white/0 hover:text-white/80"
                    aria-label="Next slide"
                    on:click=move |_| set_carousel.update(|c| *c = c.next())
                >
                    <IconGlyph icon=Icon::ChevronRight/>
                </button>
            </div>
            <div class="flex justify-center gap-2 mt-6">{dots}</div>
        </div>
    }
}
