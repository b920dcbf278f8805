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
use leptos_meta::{Meta, Title};

use crate::api::{get_global_data, get_page_metadata, or_fallback};
use crate::components::{Footer, Header};

/// Site chrome around a page: header and footer from the CMS, plus the
/// document title and description.
#[component]
pub fn Page(
    /// Prepended to the site title, e.g. `"Services | DBL ISTS Inc."`.
    #[prop(optional)]
    title: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let global = create_resource(|| (), |_| get_global_data());
    let metadata = create_resource(|| (), |_| get_page_metadata());

    let head = move || {
        metadata.get().map(|result| {
            let meta = or_fallback(result);
            let text = match title {
                Some(page) => format!("{page} | {}", meta.title),
                None => meta.title.clone(),
            };
            view! {
                <Title text=text/>
                <Meta name="description" content=meta.description/>
            }
        })
    };
    let header = move || {
        global
            .get()
            .map(|result| view! { <Header header=or_fallback(result).header()/> })
    };
    let footer = move || {
        global
            .get()
            .map(|result| view! { <Footer footer=or_fallback(result).footer()/> })
    };

    view! {
        <Suspense fallback=|| ()>{head} {header}</Suspense>
        <main class="min-h-[60vh] overflow-x-hidden">{children()}</main>
        <Suspense fallback=|| ()>{footer}</Suspense>
    }
}
