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

//! Shared state handed to every axum handler.

use axum::extract::FromRef;
use dbl_cms_client::CmsClient;
use leptos::{provide_context, LeptosOptions};

use crate::app::SiteUrl;
use crate::config::SiteConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub cms: CmsClient,
    pub site_url: String,
}

impl AppState {
    pub fn new(leptos_options: LeptosOptions, cms: CmsClient, config: &SiteConfig) -> Self {
        Self {
            leptos_options,
            cms,
            site_url: config.site_url.clone(),
        }
    }

    /// Expose the content client and public URL to components and server
    /// functions of one request.
    pub fn provide(&self) {
        provide_context(self.cms.clone());
        provide_context(SiteUrl(self.site_url.clone()));
    }
}

impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

impl FromRef<AppState> for CmsClient {
    fn from_ref(state: &AppState) -> Self {
        state.cms.clone()
    }
}
