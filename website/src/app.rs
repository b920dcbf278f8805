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

use crate::components::ThemeBody;
use crate::pages::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

/// Public origin of the site, provided by the server for canonical URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteUrl(pub String);

pub fn site_url() -> String {
    use_context::<SiteUrl>()
        .map(|url| url.0)
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let origin = site_url();

    let json_ld = format!(
        r#"
    {{
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": "DBL ISTS Inc.",
        "url": "{origin}/",
        "logo": "{origin}/dbl.svg",
        "email": "inquiry@dbl-ists.com",
        "areaServed": "PH"
    }}
    "#
    );

    view! {
        <Html lang="en"/>
        <ThemeBody/>
        <Stylesheet id="leptos" href="/pkg/dbl_website.css"/>
        <Link rel="icon" type_="image/svg+xml" href="/dbl.svg"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1"/>

        // Open Graph
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content="DBL ISTS Inc."/>
        <Meta property="og:url" content=format!("{origin}/")/>
        <Meta property="og:image" content=format!("{origin}/dbl.svg")/>

        <Router>
            <Routes>
                <Route path="" view=Home ssr=SsrMode::Async/>
                <Route path="/services" view=Services ssr=SsrMode::Async/>
                <Route path="/about" view=About ssr=SsrMode::Async/>
                <Route path="/contact" view=Contact ssr=SsrMode::Async/>
                <Route path="/portfolio" view=Portfolio ssr=SsrMode::Async/>
                <Route path="/portfolio/:id" view=PortfolioDetail ssr=SsrMode::Async/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>
        <script type="application/ld+json">
            {json_ld}
        </script>
    }
}
