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

use dbl_cms_types::FeatureSection;
use leptos::*;

use crate::components::FeatureCard;
use crate::icons::IconSet;

struct Stat {
    value: &'static str,
    label: &'static str,
}

const STATS: &[Stat] = &[
    Stat {
        value: "25+",
        label: "Years of Experience",
    },
    Stat {
        value: "20+",
        label: "Active Company Clients",
    },
    Stat {
        value: "100+",
        label: "Projects Completed",
    },
    Stat {
        value: "10,000+",
        label: "Hours of Support",
    },
];

/// `(src, alt, wide)`
const BRAND_LOGOS: &[(&str, &str, bool)] = &[
    ("/logos/Dahua_logo.svg", "Dahua", false),
    ("/logos/Hikvision_logo.svg", "Hikvision", true),
    ("/logos/ESET_logo.svg", "ESET", false),
    ("/logos/Ruijie_logo.svg", "Ruijie", false),
    ("/logos/Synology_logo.svg", "Synology", false),
    ("/logos/Dell_logo.svg", "Dell", true),
];

/// Two copies of the logo strip scroll left in a loop; the second copy is
/// hidden from assistive technology.
#[component]
fn BrandMarquee() -> impl IntoView {
    let strip = |hidden: bool| {
        BRAND_LOGOS
            .iter()
            .map(|(src, alt, wide)| {
                view! {
                    <img
                        src=*src
                        alt=if hidden { "" } else { *alt }
                        width=if *wide { "240" } else { "120" }
                        height="120"
                        loading="eager"
                        class="h-16 w-auto object-contain dark:brightness-0 dark:invert"
                    />
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="overflow-hidden">
            <div class="marquee-track flex w-max gap-6">
                {strip(false)}
                <div class="contents" aria-hidden="true">{strip(true)}</div>
            </div>
        </div>
    }
}

#[component]
pub fn Benefits(section: FeatureSection) -> impl IntoView {
    let FeatureSection { title, feature, .. } = section;
    let mut features = feature.into_iter();
    let left = features.next();

    let right = features
        .map(|feature| view! { <FeatureCard feature=feature icons=IconSet::Benefits/> })
        .collect::<Vec<_>>();

    let stats = STATS
        .iter()
        .map(|stat| {
            view! {
                <div class="flex flex-col items-center justify-center text-center">
                    <p class="text-4xl md:text-6xl font-semibold tracking-tight leading-none bg-gradient-to-b from-yellow-300 to-yellow-700 bg-clip-text text-transparent mb-2">
                        {stat.value}
                    </p>
                    <p class="text-sm text-foreground/60">{stat.label}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="container mx-auto px-4 py-16 overflow-hidden">
            <div class="flex flex-col gap-2 items-start mb-12">
                <p class="text-primary text-lg tracking-tight font-medium leading-none">"Benefits"</p>
                <h2 class="text-3xl md:text-4xl font-semibold tracking-tight">{title}</h2>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {left.map(|feature| {
                    view! {
                        <FeatureCard feature=feature icons=IconSet::Benefits>
                            <div class="mt-12 flex-1">
                                <BrandMarquee/>
                            </div>
                            <p class="text-foreground/60 mt-auto pt-6">
                                "More brands can be found "
                                <a
                                    href="/services"
                                    class="text-primary underline dark:text-white/80 hover:text-blue-400 dark:hover:text-white transition-colors"
                                >
                                    "here"
                                </a>
                                "."
                            </p>
                        </FeatureCard>
                    }
                })}
                <div class="space-y-6">{right}</div>
            </div>
            <div class="grid grid-cols-2 lg:grid-cols-4 gap-8 w-full mt-16">{stats}</div>
        </section>
    }
}
