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

//! On-demand cache revalidation.
//!
//! The CMS calls `POST /api/revalidate?tag=<tag>` from a webhook after an
//! editor publishes, dropping every cached response carrying that tag.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dbl_cms_client::{CmsClient, CmsError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct RevalidateParams {
    pub tag: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Revalidated {
    pub revalidated: bool,
    /// Server time in milliseconds since the Unix epoch.
    pub now: i64,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A failed revalidation paired with its HTTP status.
#[derive(Debug)]
pub struct RevalidateError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl RevalidateError {
    pub fn missing_tag() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                message: "Missing tag parameter",
                error: None,
            },
        }
    }
}

impl From<CmsError> for RevalidateError {
    fn from(err: CmsError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorBody {
                message: "Error revalidating",
                error: Some(err.to_string()),
            },
        }
    }
}

impl IntoResponse for RevalidateError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub async fn revalidate(
    State(cms): State<CmsClient>,
    Query(params): Query<RevalidateParams>,
) -> Result<Json<Revalidated>, RevalidateError> {
    let tag = params
        .tag
        .filter(|tag| !tag.trim().is_empty())
        .ok_or_else(RevalidateError::missing_tag)?;

    let dropped = cms.revalidate_tag(&tag).map_err(|err| {
        log::error!("revalidating {tag:?} failed: {err}");
        RevalidateError::from(err)
    })?;
    log::debug!("revalidate {tag:?}: {dropped} cached responses dropped");

    Ok(Json(Revalidated {
        revalidated: true,
        now: chrono::Utc::now().timestamp_millis(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::post, Router};
    use dbl_cms_client::CmsConfig;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let cms = CmsClient::new(CmsConfig::new("http://127.0.0.1:9")).unwrap();
        Router::new()
            .route("/api/revalidate", post(revalidate))
            .with_state(cms)
    }

    async fn json_body(response: Response) -> Value {
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_to(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn revalidates_a_tag() {
        let before = chrono::Utc::now().timestamp_millis();
        let response = app()
            .oneshot(post_to("/api/revalidate?tag=strapi-data"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["revalidated"], Value::Bool(true));
        assert!(body["now"].as_i64().unwrap() >= before);
    }

    #[tokio::test]
    async fn missing_tag_is_a_bad_request() {
        for uri in ["/api/revalidate", "/api/revalidate?tag="] {
            let response = app().oneshot(post_to(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = json_body(response).await;
            assert_eq!(body["message"], "Missing tag parameter");
            assert!(body.get("error").is_none());
        }
    }

    #[tokio::test]
    async fn only_post_is_routed() {
        let request = Request::builder()
            .uri("/api/revalidate?tag=strapi-data")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn cache_failure_is_a_server_error() {
        let response = RevalidateError::from(CmsError::Cache("lock poisoned".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["message"], "Error revalidating");
        assert!(body["error"].as_str().unwrap().contains("lock poisoned"));
    }
}
