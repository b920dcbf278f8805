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

use dbl_cms_types::Media;
use leptos::*;

/// An `<img>` for a CMS media record. Renders nothing when the record has
/// no URL.
#[component]
pub fn CmsImage(
    media: Media,
    /// Used when the record carries no alternative text.
    #[prop(default = "")]
    alt: &'static str,
    #[prop(default = "")] class: &'static str,
    #[prop(default = false)] eager: bool,
) -> impl IntoView {
    if media.url.is_empty() {
        return None;
    }
    let alt = media.alt_or(alt).to_string();
    Some(view! {
        <img
            src=media.url.clone()
            alt=alt
            class=class
            loading=if eager { "eager" } else { "lazy" }
            decoding="async"
        />
    })
}
