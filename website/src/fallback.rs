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

cfg_if! {
if #[cfg(feature = "ssr")] {
    use axum::{
        body::{boxed, Body, BoxBody},
        extract::State,
        response::IntoResponse,
        http::{HeaderValue, Request, Response, StatusCode, Uri},
    };
    use axum::response::Response as AxumResponse;
    use tower::ServiceExt;
    use tower_http::services::ServeDir;
    use leptos::view;
    use crate::app::App;
    use crate::app_state::AppState;

    /// Serves files from the site root; anything else renders the app,
    /// whose catch-all route answers with the 404 page.
    pub async fn file_and_error_handler(uri: Uri, State(state): State<AppState>, req: Request<Body>) -> AxumResponse {
        let root = state.leptos_options.site_root.clone();
        match get_static_file(uri, &root).await {
            Ok(res) if res.status() == StatusCode::OK => res.into_response(),
            Ok(_) => {
                let context_state = state.clone();
                let handler = leptos_axum::render_app_to_stream_with_context(
                    state.leptos_options.clone(),
                    move || context_state.provide(),
                    move || view! { <App/> },
                );
                handler(req).await.into_response()
            }
            Err(err) => err.into_response(),
        }
    }

    async fn get_static_file(uri: Uri, root: &str) -> Result<Response<BoxBody>, (StatusCode, String)> {
        let req = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .map_err(|err| (StatusCode::BAD_REQUEST, format!("Invalid request: {err}")))?;
        // `ServeDir` implements `tower::Service` so we can call it with `tower::ServiceExt::oneshot`
        match ServeDir::new(root).oneshot(req).await {
            Ok(mut res) => {
                // Add no-cache headers to disable browser caching
                let headers = res.headers_mut();
                headers.insert(
                    "Cache-Control",
                    HeaderValue::from_static("no-cache, no-store, must-revalidate, max-age=0"),
                );
                headers.insert("Pragma", HeaderValue::from_static("no-cache"));
                headers.insert("Expires", HeaderValue::from_static("0"));
                Ok(res.map(boxed))
            }
            Err(err) => Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Something went wrong: {err}"),
            )),
        }
    }
}
}
