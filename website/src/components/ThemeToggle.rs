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
use leptos_meta::Body;

use crate::icons::{Icon, IconGlyph};

pub const THEME_COOKIE: &str = "theme";

#[server(SetTheme, "/api/fn")]
pub async fn set_theme(prefers_dark: bool) -> Result<bool, ServerFnError> {
    use axum::http::{header::SET_COOKIE, HeaderMap, HeaderValue};
    use leptos_axum::{ResponseOptions, ResponseParts};

    let response = use_context::<ResponseOptions>()
        .ok_or_else(|| ServerFnError::ServerError("response options missing".into()))?;
    let mut response_parts = ResponseParts::default();
    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(&format!(
        "{THEME_COOKIE}={}; Path=/; Max-Age=31536000; SameSite=Lax",
        theme_name(prefers_dark)
    ))
    .map_err(|err| ServerFnError::ServerError(err.to_string()))?;
    headers.insert(SET_COOKIE, value);
    response_parts.headers = headers;

    response.overwrite(response_parts);
    Ok(prefers_dark)
}

pub fn theme_name(prefers_dark: bool) -> &'static str {
    if prefers_dark {
        "dark"
    } else {
        "light"
    }
}

/// Reads a stored theme; anything but `dark`/`light` counts as unset.
pub fn parse_theme(value: &str) -> Option<bool> {
    match value {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// Theme to show: the stored choice, then the system preference, then dark.
pub fn resolve_theme(stored: Option<bool>, system: Option<bool>) -> bool {
    stored.or(system).unwrap_or(true)
}

#[cfg(feature = "hydrate")]
fn stored_theme() -> Option<bool> {
    use wasm_bindgen::JsCast;

    let doc = document().unchecked_into::<web_sys::HtmlDocument>();
    let cookie = doc.cookie().unwrap_or_default();
    cookie
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == THEME_COOKIE)
        .and_then(|(_, value)| parse_theme(value))
}

#[cfg(feature = "ssr")]
fn stored_theme() -> Option<bool> {
    use axum_extra::extract::cookie::CookieJar;
    use_context::<leptos_axum::RequestParts>().and_then(|req| {
        let cookies = CookieJar::from_headers(&req.headers);
        cookies
            .get(THEME_COOKIE)
            .and_then(|cookie| parse_theme(cookie.value()))
    })
}

#[cfg(not(any(feature = "ssr", feature = "hydrate")))]
fn stored_theme() -> Option<bool> {
    None
}

#[cfg(feature = "hydrate")]
fn apply_theme(prefers_dark: bool) {
    if let Some(body) = document().body() {
        let classes = body.class_list();
        let _ = classes.toggle_with_force("dark", prefers_dark);
        let _ = classes.toggle_with_force("light", !prefers_dark);
    }
}

/// The theme the page shows once the island is live. In the browser the
/// system preference is consulted and written to `<body>`, since the server
/// render could only see the cookie.
#[cfg(feature = "hydrate")]
fn displayed_theme() -> bool {
    let system = window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches());
    let prefers_dark = resolve_theme(stored_theme(), system);
    apply_theme(prefers_dark);
    prefers_dark
}

#[cfg(not(feature = "hydrate"))]
fn displayed_theme() -> bool {
    resolve_theme(stored_theme(), None)
}

/// Puts the stored theme on `<body>` before first paint. Without a cookie
/// the server renders dark and the toggle island corrects it on hydrate.
#[component]
pub fn ThemeBody() -> impl IntoView {
    let class = theme_name(resolve_theme(stored_theme(), None));
    view! { <Body class=class/> }
}

#[island]
pub fn ThemeToggle() -> impl IntoView {
    let (prefers_dark, set_prefers_dark) = create_signal(displayed_theme());
    let set_theme_action = create_server_action::<SetTheme>();

    let toggle = move |_| {
        let dark = !prefers_dark.get_untracked();
        set_prefers_dark.set(dark);
        #[cfg(feature = "hydrate")]
        {
            apply_theme(dark);
        }
        set_theme_action.dispatch(SetTheme { prefers_dark: dark });
    };

    view! {
        <button
            type="button"
            class="p-2 rounded-md text-foreground/60 hover:text-foreground hover:bg-foreground/5 transition-colors"
            aria-label=move || {
                if prefers_dark.get() { "Switch to light mode" } else { "Switch to dark mode" }
            }
            on:click=toggle
        >
            <span class="hidden dark:block">
                <IconGlyph icon=Icon::Sun class="h-5 w-5"/>
            </span>
            <span class="block dark:hidden">
                <IconGlyph icon=Icon::Moon class="h-5 w-5"/>
            </span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_cookie_round_trips() {
        assert_eq!(parse_theme(theme_name(true)), Some(true));
        assert_eq!(parse_theme(theme_name(false)), Some(false));
        assert_eq!(parse_theme("purple"), None);
    }

    #[test]
    fn stored_choice_beats_system_preference() {
        assert!(!resolve_theme(Some(false), Some(true)));
        assert!(resolve_theme(Some(true), Some(false)));
    }

    #[test]
    fn light_system_without_cookie_shows_light_and_first_toggle_goes_dark() {
        let shown = resolve_theme(None, Some(false));
        assert_eq!(theme_name(shown), "light");
        assert_eq!(theme_name(!shown), "dark");
    }

    #[test]
    fn nothing_known_defaults_to_dark() {
        assert!(resolve_theme(None, None));
        assert_eq!(theme_name(resolve_theme(None, None)), "dark");
    }
}
