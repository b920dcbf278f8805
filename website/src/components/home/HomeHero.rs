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

use crate::components::{ButtonSize, ButtonVariant, CTAButton, CmsImage};

#[component]
pub fn HomeHero(hero: HeroSection) -> impl IntoView {
    let HeroSection {
        heading,
        sub_heading,
        image,
        link,
        ..
    } = hero;

    view! {
        <header class="relative min-h-[80vh] overflow-hidden bg-primary">
            {image.map(|media| {
                view! {
                    <CmsImage
                        media=media
                        alt="Hero image"
                        class="absolute inset-0 object-cover w-full h-full"
                        eager=true
                    />
                }
            })}
            <div class="container mx-auto px-4 relative z-10 flex flex-col items-start justify-center min-h-[80vh] py-16 md:py-24 gap-6 text-white">
                <div class="flex flex-col gap-4 max-w-full">
                    <h1 class="font-semibold tracking-tight text-4xl bg-gradient-to-br from-white to-neutral-200 text-transparent bg-clip-text sm:text-5xl md:text-6xl max-w-2xl">
                        {heading}
                    </h1>
                    <p class="text-base sm:text-lg md:text-xl lg:text-2xl max-w-xl text-white/90">
                        {sub_heading}
                    </p>
                </div>
                {link.map(|link| {
                    view! {
                        <CTAButton
                            link=link
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Large
                            class="bg-gradient-to-b from-slate-300 to-white text-black/80 hover:text-black"
                        />
                    }
                })}
            </div>
        </header>
    }
}
