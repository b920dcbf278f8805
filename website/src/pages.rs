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

use dbl_cms_types::PageData;
use leptos::*;

use crate::api::or_fallback;
use crate::blocks::PageKind;
use crate::components::BlockRenderer;

pub mod About;
pub mod Contact;
pub mod Home;
pub mod NotFound;
pub mod Portfolio;
pub mod PortfolioDetail;
pub mod Services;

pub use self::About::*;
pub use self::Contact::*;
pub use self::Home::*;
pub use self::NotFound::*;
pub use self::Portfolio::*;
pub use self::PortfolioDetail::*;
pub use self::Services::*;

/// A CMS page's blocks once its resource resolves.
#[component]
fn PageBlocks(kind: PageKind, page: Resource<(), Result<PageData, ServerFnError>>) -> impl IntoView {
    view! {
        <Suspense fallback=|| ()>
            {move || {
                page.get()
                    .map(|result| {
                        view! { <BlockRenderer page=kind blocks=or_fallback(result).blocks/> }
                    })
            }}
        </Suspense>
    }
}
