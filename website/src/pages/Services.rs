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
use crate::api::get_service_page;
use crate::blocks::PageKind;
use crate::components::Page;

#[component]
pub fn Services() -> impl IntoView {
    let page = create_resource(|| (), |_| get_service_page());

    view! {
        <Page title="Services">
            <PageBlocks kind=PageKind::Services page=page/>
        </Page>
    }
}
