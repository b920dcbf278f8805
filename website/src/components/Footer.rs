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

use dbl_cms_types::Footer as FooterData;
use leptos::*;

use crate::components::{Logo, ThemeToggle};
use crate::icons::{social_icon, IconGlyph};

/// A line of the office contact list.
struct ContactLine {
    text: &'static str,
    href: Option<&'static str>,
}

const ADDRESS: &str =
    "76 P. Faustino Street, William Ville, Punturin, Valenzuela City, Philippines";

const MOBILE: &[ContactLine] = &[
    ContactLine {
        text: "+63 922 803 7220",
        href: Some("tel:+639228037220"),
    },
    ContactLine {
        text: "+63 917 880 3757",
        href: Some("tel:+639178803757"),
    },
];

const TELEPHONE: &[ContactLine] = &[
    ContactLine {
        text: "(02) 8990 7902",
        href: Some("tel:+63289907902"),
    },
    ContactLine {
        text: "(02) 8706 3846",
        href: Some("tel:+63287063846"),
    },
    ContactLine {
        text: "(02) 8775 2971",
        href: Some("tel:+63287752971"),
    },
];

const EMAIL: &[ContactLine] = &[
    ContactLine {
        text: "clerk@dbl-ists.com",
        href: Some("mailto:clerk@dbl-ists.com"),
    },
    ContactLine {
        text: "sales@dbl-ists.com",
        href: Some("mailto:sales@dbl-ists.com"),
    },
];

fn contact_group(lines: &'static [ContactLine]) -> impl IntoView {
    let lines = lines
        .iter()
        .map(|line| {
            view! {
                <a
                    href=line.href
                    class="text-sm text-foreground/60 hover:text-foreground transition-colors duration-300"
                >
                    {line.text}
                </a>
            }
        })
        .collect::<Vec<_>>();
    view! { <div class="flex flex-col gap-2 w-fit">{lines}</div> }
}

#[component]
pub fn Footer(footer: FooterData) -> impl IntoView {
    let FooterData {
        logo_text,
        external_link,
        footer_text,
    } = footer;

    let social_links = external_link
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.href()
                    target=link.target()
                    rel=link.rel()
                    class="text-foreground/60 hover:text-foreground transition-colors duration-300 h-[24px] w-[24px] flex items-center justify-center"
                >
                    <IconGlyph icon=social_icon(&link.url)/>
                    <span class="sr-only">{format!("Visit us at {}", link.text)}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class="container mx-auto px-4 py-4 overflow-hidden">
            <div class="flex flex-col md:flex-row justify-between gap-6 py-6 items-start md:items-center">
                <Logo text=logo_text.text/>
                <div class="flex flex-col lg:flex-row gap-6 items-start lg:items-center">
                    <p class="text-sm text-foreground/60">{footer_text}</p>
                    <ThemeToggle/>
                </div>
            </div>
            <hr class="my-8 border-foreground/10"/>
            <div class="py-4 flex flex-col items-left gap-6">
                <address class="not-italic text-sm text-foreground/60 max-w-xs leading-[20px] break-words">
                    {ADDRESS}
                </address>
                {contact_group(MOBILE)}
                {contact_group(TELEPHONE)}
                {contact_group(EMAIL)}
                <hr class="w-full max-w-[100px] border-foreground/10"/>
                <div class="flex gap-6">{social_links}</div>
            </div>
        </footer>
    }
}
