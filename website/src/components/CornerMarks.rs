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

/// Plus marks on the four corners of a bordered, `relative` frame.
#[component]
pub fn CornerMarks(#[prop(default = "")] class: &'static str) -> impl IntoView {
    ["-top-3 -left-3", "-bottom-3 -left-3 z-10", "-top-3 -right-3", "-bottom-3 -right-3 z-10"]
        .into_iter()
        .map(|position| {
            view! {
                <span class=format!("corner-plus {position} {class}")>
                    <IconGlyph icon=Icon::Plus class="h-6 w-6"/>
                </span>
            }
        })
        .collect::<Vec<_>>()
}
