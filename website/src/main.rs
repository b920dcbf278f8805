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

use cfg_if::cfg_if;

// boilerplate to run in different modes
cfg_if! {
    if #[cfg(feature = "ssr")] {
        use axum::{
            body::Body,
            extract::{Path, RawQuery, State},
            http::{HeaderMap, Request},
            response::IntoResponse,
            routing::{get, post},
            Router,
        };
        use dbl_cms_client::CmsClient;
        use dbl_website::app::*;
        use dbl_website::app_state::AppState;
        use dbl_website::config::SiteConfig;
        use dbl_website::fallback::file_and_error_handler;
        use dbl_website::revalidate::revalidate;
        use leptos::get_configuration;
        use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
        use tower_http::compression::CompressionLayer;

        async fn server_fn_handler(
            State(state): State<AppState>,
            path: Path<String>,
            headers: HeaderMap,
            raw_query: RawQuery,
            request: Request<Body>,
        ) -> impl IntoResponse {
            handle_server_fns_with_context(path, headers, raw_query, move || state.provide(), request)
                .await
        }

        #[tokio::main]
        async fn main() {
            simple_logger::SimpleLogger::new()
                .with_level(log::LevelFilter::Info)
                .env()
                .init()
                .expect("couldn't initialize logging");

            let config = SiteConfig::from_env().expect("invalid configuration");
            let cms = CmsClient::new(config.cms.clone()).expect("invalid content API configuration");
            if config.cms.skip_network {
                log::warn!("SKIP_BUILD_STATIC_GENERATION is set, serving fallback content");
            }

            let conf = get_configuration(None).await.expect("couldn't read Leptos options");
            let leptos_options = conf.leptos_options;
            let addr = leptos_options.site_addr;
            let routes = generate_route_list(App);
            let state = AppState::new(leptos_options, cms, &config);
            let route_state = state.clone();

            // build our application with a route
            let app = Router::new()
                .route("/api/revalidate", post(revalidate))
                .route("/api/fn/*fn_name", get(server_fn_handler).post(server_fn_handler))
                .leptos_routes_with_context(&state, routes, move || route_state.provide(), App)
                .fallback(file_and_error_handler)
                .with_state(state)
                .layer(CompressionLayer::new());

            // run our app with hyper
            // `axum::Server` is a re-export of `hyper::Server`
            log::info!("listening on http://{}", &addr);
            axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await
                .expect("server error");
        }
    } else {
        pub fn main() {
            // the browser entry point is `hydrate` in lib.rs
        }
    }
}
