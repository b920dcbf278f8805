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

//! Line icons and the CMS icon-tag tables.
//!
//! Editors pick a card icon by typing a tag such as `SECURITY_ICON`. Each
//! section has its own table; a tag a section does not know renders as
//! [`Icon::Box`].

use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Icon {
    Box,
    FolderTree,
    Fingerprint,
    FileLock,
    MessageCircle,
    EthernetPort,
    Cpu,
    Peso,
    Headphones,
    Layers,
    Target,
    Telescope,
    Database,
    LayoutDashboard,
    Leaf,
    Clock,
    MapPin,
    Smartphone,
    Mail,
    PhoneCall,
    Search,
    Calendar,
    ChevronLeft,
    ChevronRight,
    ChevronDown,
    ArrowRight,
    Close,
    Menu,
    Plus,
    FileX,
    ImageOff,
    Sun,
    Moon,
    Facebook,
    ExternalLink,
}

/// Sections that map CMS icon tags to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSet {
    /// Home page services list.
    ServicesList,
    /// Home page benefits grid.
    Benefits,
    /// Services page grid and brand sidebar.
    Services,
    About,
    Contact,
}

impl IconSet {
    pub fn lookup(self, tag: &str) -> Icon {
        let icon = match self {
            IconSet::ServicesList => match tag {
                "DEFAULT_ICON" => Some(Icon::Box),
                "WORKFLOW_ICON" => Some(Icon::FolderTree),
                "SECURE_ICON" => Some(Icon::Fingerprint),
                "CYBER_ICON" => Some(Icon::FileLock),
                "COMMUNICATION_ICON" => Some(Icon::MessageCircle),
                "CONNECTION_ICON" => Some(Icon::EthernetPort),
                "HARDWARE_ICON" => Some(Icon::Cpu),
                _ => None,
            },
            IconSet::Benefits => match tag {
                "PESO_ICON" => Some(Icon::Peso),
                "HEADPHONES_ICON" => Some(Icon::Headphones),
                "STACK_ICON" => Some(Icon::Layers),
                _ => None,
            },
            IconSet::Services => match tag {
                "SECURITY_ICON" => Some(Icon::Fingerprint),
                "CYBERSECURITY_ICON" => Some(Icon::FileLock),
                "HARDWARE_ICON" => Some(Icon::Cpu),
                "SERVER_ICON" => Some(Icon::Database),
                "NETWORK_ICON" => Some(Icon::EthernetPort),
                "MANAGEMENT_ICON" => Some(Icon::LayoutDashboard),
                "COMMUNICATION_ICON" => Some(Icon::MessageCircle),
                "HEADPHONES_ICON" => Some(Icon::Headphones),
                "STACK_ICON" => Some(Icon::Layers),
                "SUSTAINABLE_ICON" => Some(Icon::Leaf),
                _ => None,
            },
            IconSet::About => match tag {
                "DEFAULT_ICON" => Some(Icon::Box),
                "TARGET_ICON" => Some(Icon::Target),
                "TELESCOPE_ICON" => Some(Icon::Telescope),
                _ => None,
            },
            IconSet::Contact => match tag {
                "CLOCK_ICON" => Some(Icon::Clock),
                "ADDRESS_ICON" => Some(Icon::MapPin),
                "PHONE_ICON" => Some(Icon::Smartphone),
                "EMAIL_ICON" => Some(Icon::Mail),
                "TELEPHONE_ICON" => Some(Icon::PhoneCall),
                _ => None,
            },
        };
        icon.unwrap_or(Icon::Box)
    }
}

/// Social glyph for a footer link, chosen from its URL.
pub fn social_icon(url: &str) -> Icon {
    if url.contains("facebook") {
        Icon::Facebook
    } else {
        Icon::ExternalLink
    }
}

impl Icon {
    /// SVG path data on a 24x24 stroke grid.
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Box => &[
                "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z",
                "m3.3 7 8.7 5 8.7-5",
                "M12 22V12",
            ],
            Icon::FolderTree => &[
                "M20 10a1 1 0 0 0 1-1V6a1 1 0 0 0-1-1h-2.5a1 1 0 0 1-.8-.4l-.9-1.2A1 1 0 0 0 15 3h-2a1 1 0 0 0-1 1v5a1 1 0 0 0 1 1Z",
                "M20 21a1 1 0 0 0 1-1v-3a1 1 0 0 0-1-1h-2.9a1 1 0 0 1-.88-.55l-.42-.85a1 1 0 0 0-.92-.6H13a1 1 0 0 0-1 1v5a1 1 0 0 0 1 1Z",
                "M3 5a2 2 0 0 0 2 2h3",
                "M3 3v13a2 2 0 0 0 2 2h3",
            ],
            Icon::Fingerprint => &[
                "M12 10a2 2 0 0 0-2 2c0 1.02-.1 2.51-.26 4",
                "M14 13.12c0 2.38 0 6.38-1 8.88",
                "M2 12a10 10 0 0 1 18-6",
                "M2 16h.01",
                "M5 19.5C5.5 18 6 15 6 12a6 6 0 0 1 .34-2",
                "M8.65 22c.21-.66.45-1.32.57-2",
                "M9 6.8a6 6 0 0 1 9 5.2v2",
                "M21.8 16c.2-2 .13-5.35 0-6",
            ],
            Icon::FileLock => &[
                "M4 22h14a2 2 0 0 0 2-2V7l-5-5H6a2 2 0 0 0-2 2v6",
                "M14 2v4a2 2 0 0 0 2 2h4",
                "M3 14h8v8H3z",
                "M5 14v-2a2 2 0 0 1 4 0v2",
            ],
            Icon::MessageCircle => &["M7.9 20A9 9 0 1 0 4 16.1L2 22Z"],
            Icon::EthernetPort => &[
                "m15 20 3-3h2a2 2 0 0 0 2-2V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h2l3 3z",
                "M6 8v1",
                "M10 8v1",
                "M14 8v1",
                "M18 8v1",
            ],
            Icon::Cpu => &[
                "M4 4h16v16H4z",
                "M9 9h6v6H9z",
                "M15 2v2",
                "M15 20v2",
                "M2 15h2",
                "M2 9h2",
                "M20 15h2",
                "M20 9h2",
                "M9 2v2",
                "M9 20v2",
            ],
            Icon::Peso => &[
                "M20 11H4",
                "M20 7H4",
                "M7 21V4a1 1 0 0 1 1-1h4a1 1 0 0 1 0 12H7",
            ],
            Icon::Headphones => &[
                "M3 14h3a2 2 0 0 1 2 2v3a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a9 9 0 0 1 18 0v7a2 2 0 0 1-2 2h-1a2 2 0 0 1-2-2v-3a2 2 0 0 1 2-2h3",
            ],
            Icon::Layers => &[
                "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
                "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
                "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
            ],
            Icon::Target => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20",
                "M12 6a6 6 0 1 0 0 12 6 6 0 1 0 0-12",
                "M12 10a2 2 0 1 0 0 4 2 2 0 1 0 0-4",
            ],
            Icon::Telescope => &[
                "m10.07 11.55-4.24 2.45",
                "m13.56 11.7 4.13 7.3",
                "m16 16-2.5-4.4",
                "m4.4 13.13 2 3.46 9.82-5.67-2-3.46z",
                "m12 5.3 8.42-4.86 3 5.2-8.42 4.86",
                "M12 13a1 1 0 1 0 0 .01",
            ],
            Icon::Database => &[
                "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0",
                "M3 5v14a9 3 0 0 0 18 0V5",
                "M3 12a9 3 0 0 0 18 0",
            ],
            Icon::LayoutDashboard => &[
                "M3 3h7v9H3z",
                "M14 3h7v5h-7z",
                "M14 12h7v9h-7z",
                "M3 16h7v5H3z",
            ],
            Icon::Leaf => &[
                "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z",
                "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
            ],
            Icon::Clock => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20",
                "M12 6v6l4 2",
            ],
            Icon::MapPin => &[
                "M20 10c0 4.99-5.54 10.19-7.4 11.8a1 1 0 0 1-1.2 0C9.54 20.19 4 14.99 4 10a8 8 0 0 1 16 0",
                "M12 7a3 3 0 1 0 0 6 3 3 0 1 0 0-6",
            ],
            Icon::Smartphone => &["M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z", "M12 18h.01"],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Icon::PhoneCall => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
                "M14.05 2a9 9 0 0 1 8 7.94",
                "M14.05 6A5 5 0 0 1 18 10",
            ],
            Icon::Search => &["M11 3a8 8 0 1 0 0 16 8 8 0 1 0 0-16", "m21 21-4.3-4.3"],
            Icon::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M3 10h18",
            ],
            Icon::ChevronLeft => &["m15 18-6-6 6-6"],
            Icon::ChevronRight => &["m9 18 6-6-6-6"],
            Icon::ChevronDown => &["m6 9 6 6 6-6"],
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Plus => &["M5 12h14", "M12 5v14"],
            Icon::FileX => &[
                "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z",
                "M14 2v4a2 2 0 0 0 2 2h4",
                "m14.5 12.5-5 5",
                "m9.5 12.5 5 5",
            ],
            Icon::ImageOff => &[
                "M2 2l20 20",
                "M10.41 10.41a2 2 0 1 1-2.83-2.83",
                "M13.5 13.5 6 21",
                "M18 12l3 3",
                "M3.59 3.59A1.99 1.99 0 0 0 3 5v14a2 2 0 0 0 2 2h14c.55 0 1.05-.22 1.41-.59",
                "M21 15V5a2 2 0 0 0-2-2H9",
            ],
            Icon::Sun => &[
                "M12 8a4 4 0 1 0 0 8 4 4 0 1 0 0-8",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Icon::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            Icon::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
            Icon::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
        }
    }
}

#[component]
pub fn IconGlyph(icon: Icon, #[prop(default = "w-6 h-6")] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_map_per_section() {
        assert_eq!(IconSet::Services.lookup("SERVER_ICON"), Icon::Database);
        assert_eq!(IconSet::Contact.lookup("EMAIL_ICON"), Icon::Mail);
        assert_eq!(IconSet::Benefits.lookup("PESO_ICON"), Icon::Peso);
    }

    #[test]
    fn unknown_tags_fall_back_to_box() {
        assert_eq!(IconSet::About.lookup("ROCKET_ICON"), Icon::Box);
        assert_eq!(IconSet::Contact.lookup(""), Icon::Box);
        // Tags are per section: a services tag means nothing on the contact page.
        assert_eq!(IconSet::Contact.lookup("SERVER_ICON"), Icon::Box);
    }

    #[test]
    fn social_glyph_comes_from_url() {
        assert_eq!(social_icon("https://www.facebook.com/dbl"), Icon::Facebook);
        assert_eq!(social_icon("https://linkedin.com"), Icon::ExternalLink);
    }
}
