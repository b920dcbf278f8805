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

#[component]
pub fn Logo(#[prop(default = "DBL ISTS Inc.".to_string(), into)] text: String) -> impl IntoView {
    view! {
        <a href="/" class="shrink-0">
            <img src="/dbl.svg" alt=text width="200" height="120" class="h-12 w-auto"/>
        </a>
    }
}
