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

use dbl_cms_types::Link;
use leptos::*;

use crate::icons::{Icon, IconGlyph};

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Blue gradient, used for the header and hero calls to action.
    Primary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

/// A CMS link rendered as a button.
#[component]
pub fn CTAButton(
    link: Link,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    #[prop(default = String::new(), into)] class: String,
    #[prop(default = false)] arrow: bool,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center gap-2 font-medium transition-colors duration-300 focus:outline-none focus-visible:ring-2 focus-visible:ring-primary/40";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-gradient-to-b from-primary to-blue-700 hover:from-blue-400 hover:to-blue-700 text-white/80 hover:text-white border border-blue-700",
        ButtonVariant::Outline => "border border-foreground/20 text-foreground hover:bg-foreground/5",
        ButtonVariant::Ghost => "text-primary hover:text-blue-400",
    };

    let size_classes = match size {
        ButtonSize::Small => "px-3 py-1.5 text-sm rounded-md",
        ButtonSize::Medium => "px-4 py-2 text-sm rounded-md",
        ButtonSize::Large => "px-6 py-3 text-base rounded-lg",
    };

    let combined_class = format!("{base_classes} {variant_classes} {size_classes} {class}");

    view! {
        <a href=link.href() target=link.target() rel=link.rel() class=combined_class>
            <span>{link.text.clone()}</span>
            {arrow.then(|| view! { <IconGlyph icon=Icon::ArrowRight class="w-4 h-4"/> })}
        </a>
    }
}
