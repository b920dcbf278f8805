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

use dbl_cms_types::Header as HeaderData;
use leptos::*;

use crate::components::{CTAButton, Logo, MobileNavigation};

#[component]
pub fn Header(header: HeaderData) -> impl IntoView {
    let HeaderData {
        logo_text,
        nav_link,
        cta_button,
    } = header;

    let desktop_links = nav_link
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.href()
                    class="text-sm font-medium text-foreground/60 transition-colors hover:text-foreground"
                >
                    {link.text.clone()}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="max-w-full flex items-center justify-between px-4 sm:px-6 md:px-12 py-4 sticky top-0 z-40 bg-background border-b border-foreground/10 max-h-[80px]">
            <Logo text=logo_text.text/>

            <div class="hidden md:flex items-center gap-6">
                <nav class="flex items-center gap-6">{desktop_links}</nav>
                <CTAButton link=cta_button.clone()/>
            </div>

            <MobileNavigation links=nav_link cta=cta_button/>
        </header>
    }
}
