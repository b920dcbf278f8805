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

use super::PageBlocks;
use crate::api::{get_portfolio_items, get_portfolio_page, or_fallback};
use crate::blocks::PageKind;
use crate::components::{Gallery, Page};

#[component]
pub fn Portfolio() -> impl IntoView {
    let page = create_resource(|| (), |_| get_portfolio_page());
    let items = create_resource(|| (), |_| get_portfolio_items());

    view! {
        <Page title="Portfolio">
            <PageBlocks kind=PageKind::Portfolio page=page/>
            <Suspense fallback=|| ()>
                {move || {
                    items.get().map(|result| view! { <Gallery items=or_fallback(result)/> })
                }}
            </Suspense>
        </Page>
    }
}
