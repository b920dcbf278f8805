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

use leptos::*;

use crate::icons::{Icon, IconGlyph};

#[component]
pub fn NoResults() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16 px-4 text-center">
            <IconGlyph icon=Icon::FileX class="h-12 w-12 text-neutral-300 mb-4"/>
            <h3 class="text-lg font-semibold mb-2">"No results found"</h3>
            <p class="text-sm text-foreground/60 max-w-[500px]">
                "No items match your current filters. Try adjusting your search terms, category selection, or date range."
            </p>
        </div>
    }
}
