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

//! Server functions feeding pages with CMS content.
//!
//! Every function answers with usable data: the loaders already replace
//! failures with fallback content, so an `Err` here only means the content
//! client was never provided to the request.

use dbl_cms_types::{GlobalData, PageData, PageMetadata, PortfolioItem};
use leptos::*;

use crate::errors::SiteError;

#[cfg(feature = "ssr")]
fn cms() -> Result<dbl_cms_client::CmsClient, ServerFnError> {
    use_context::<dbl_cms_client::CmsClient>()
        .ok_or_else(|| ServerFnError::ServerError("content client missing from context".into()))
}

#[server(GetGlobalData, "/api/fn", "GetJSON")]
pub async fn get_global_data() -> Result<GlobalData, ServerFnError> {
    Ok(cms()?.global_data().await.into_inner())
}

#[server(GetPageMetadata, "/api/fn", "GetJSON")]
pub async fn get_page_metadata() -> Result<PageMetadata, ServerFnError> {
    Ok(cms()?.global_metadata().await.into_inner())
}

#[server(GetHomePage, "/api/fn", "GetJSON")]
pub async fn get_home_page() -> Result<PageData, ServerFnError> {
    Ok(cms()?.home_page().await.into_inner())
}

#[server(GetServicePage, "/api/fn", "GetJSON")]
pub async fn get_service_page() -> Result<PageData, ServerFnError> {
    Ok(cms()?.service_page().await.into_inner())
}

#[server(GetAboutPage, "/api/fn", "GetJSON")]
pub async fn get_about_page() -> Result<PageData, ServerFnError> {
    Ok(cms()?.about_page().await.into_inner())
}

#[server(GetContactPage, "/api/fn", "GetJSON")]
pub async fn get_contact_page() -> Result<PageData, ServerFnError> {
    Ok(cms()?.contact_page().await.into_inner())
}

#[server(GetPortfolioPage, "/api/fn", "GetJSON")]
pub async fn get_portfolio_page() -> Result<PageData, ServerFnError> {
    Ok(cms()?.portfolio_page().await.into_inner())
}

#[server(GetPortfolioItems, "/api/fn", "GetJSON")]
pub async fn get_portfolio_items() -> Result<Vec<PortfolioItem>, ServerFnError> {
    Ok(cms()?.portfolio_items().await.into_inner())
}

#[server(GetPortfolioItem, "/api/fn", "GetJSON")]
pub async fn get_portfolio_item(id: String) -> Result<PortfolioItem, ServerFnError> {
    Ok(cms()?.portfolio_item(&id).await.into_inner())
}

/// The data of a finished server call, or its default when the call itself
/// failed.
pub fn or_fallback<T: Default>(result: Result<T, ServerFnError>) -> T {
    result.unwrap_or_else(|err| {
        log::error!("{}", SiteError::Content(err.to_string()));
        T::default()
    })
}
