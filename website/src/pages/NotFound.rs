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

use crate::components::{CTAButton, Page};
use crate::errors::SiteError;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(SiteError::NotFound.status_code());
        }
    }

    view! {
        <Page title="Not Found">
            <section class="container mx-auto px-4 py-24 flex flex-col items-center text-center gap-6">
                <h1 class="text-5xl md:text-7xl font-bold tracking-tight">
                    {format!("404 {}", SiteError::NotFound)}
                </h1>
                <p class="text-foreground/60 max-w-md">
                    "The page you are looking for does not exist or has been moved."
                </p>
                <CTAButton link=Link::new(0, "Go back home", "/") arrow=true/>
            </section>
        </Page>
    }
}
