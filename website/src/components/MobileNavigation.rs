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

use dbl_cms_types::Link;
use leptos::*;

use crate::icons::{Icon, IconGlyph};
use crate::state::sheet::{Sheet, SheetEvent};

/// Menu trigger and bottom sheet shown below the `md` breakpoint.
#[island]
pub fn MobileNavigation(links: Vec<Link>, cta: Link) -> impl IntoView {
    let (sheet, set_sheet) = create_signal(Sheet::Closed);
    let dispatch = move |event: SheetEvent| set_sheet.update(|sheet| *sheet = sheet.on(event));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                dispatch(SheetEvent::Escape);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let nav_links = links
        .into_iter()
        .map(|link| {
            view! {
                <a
                    href=link.href()
                    class="text-base font-medium text-foreground py-3 transition-colors hover:text-primary"
                    on:click=move |_| dispatch(SheetEvent::LinkActivated)
                >
                    {link.text}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="md:hidden">
            <button
                type="button"
                aria-label="Menu"
                aria-expanded=move || sheet.get().is_open().to_string()
                class="relative p-2 rounded-md hover:bg-foreground/5"
                on:click=move |_| dispatch(SheetEvent::Trigger)
            >
                <IconGlyph icon=Icon::Menu/>
            </button>

            <div class:hidden=move || !sheet.get().is_open()>
                <div
                    class="fixed inset-0 bg-black/60 z-50 touch-none"
                    on:click=move |_| dispatch(SheetEvent::Backdrop)
                ></div>
                <div
                    role="dialog"
                    aria-modal="true"
                    aria-label="Menu"
                    class="fixed bottom-0 left-0 right-0 z-50 bg-background rounded-t-[20px] shadow-lg overflow-hidden"
                >
                    <div class="w-full flex justify-center pt-2 pb-1">
                        <div class="w-10 h-1 bg-foreground/30 rounded-full"></div>
                    </div>
                    <div class="flex items-center justify-between px-6 py-4 border-b border-foreground/10">
                        <h2 class="text-xl font-bold">"Menu"</h2>
                        <button
                            type="button"
                            class="h-8 w-8 ml-auto flex items-center justify-center rounded-md hover:bg-foreground/5"
                            on:click=move |_| dispatch(SheetEvent::CloseButton)
                        >
                            <IconGlyph icon=Icon::Close class="w-5 h-5"/>
                            <span class="sr-only">"Close"</span>
                        </button>
                    </div>
                    <div class="max-h-[70vh] overflow-y-auto px-6 py-4">
                        <nav class="flex flex-col gap-6">
                            {nav_links}
                            <a
                                href=cta.href()
                                class="mt-4 inline-flex justify-center px-4 py-2 rounded-md bg-gradient-to-b from-primary to-blue-700 text-white/80 hover:text-white border border-blue-700 transition-colors duration-300"
                                on:click=move |_| dispatch(SheetEvent::LinkActivated)
                            >
                                {cta.text.clone()}
                            </a>
                        </nav>
                    </div>
                </div>
            </div>
        </div>
    }
}
