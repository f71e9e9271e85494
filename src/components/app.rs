use dioxus::prelude::*;

use crate::components::audio_manager::attach_players;
use crate::components::reveal::observe_sections;
use crate::components::{AudioPlayer, ContactForm, Icon, NavLink};
use crate::config::site_config;

#[derive(Routable, Clone, PartialEq)]
pub enum SiteRoute {
    #[route("/")]
    Home {},
    #[route("/thank-you")]
    ThankYou {},
}

const NAV_LINKS: [(&str, &str); 3] = [("#about", "About"), ("#music", "Music"), ("#contact", "Contact")];

#[component]
fn SiteNav() -> Element {
    let config = site_config();
    rsx! {
        nav { class: "fixed top-0 left-0 right-0 z-50 h-20 border-b border-zinc-800/60 bg-zinc-950/90 backdrop-blur-xl",
            div { class: "mx-auto flex h-full max-w-5xl items-center justify-between px-6",
                NavLink {
                    href: "#home".to_string(),
                    class: "text-lg font-semibold text-white".to_string(),
                    "{config.owner}"
                }
                div { class: "flex items-center gap-6",
                    for (href , label) in NAV_LINKS {
                        NavLink {
                            key: "{href}",
                            href: href.to_string(),
                            class: "text-sm text-zinc-400 hover:text-white transition-colors".to_string(),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let config = site_config();

    // The page is static once mounted: wire players and reveal animations once.
    use_effect(move || {
        attach_players();
        observe_sections(&site_config().reveal);
    });

    rsx! {
        SiteNav {}
        main { class: "mx-auto max-w-5xl px-6",
            section { id: "home", class: "flex min-h-screen flex-col justify-center gap-6",
                h1 { class: "text-5xl font-bold text-white", "{config.owner}" }
                if !config.tagline.is_empty() {
                    p { class: "text-xl text-zinc-400", "{config.tagline}" }
                }
                NavLink {
                    href: "#music".to_string(),
                    class: "inline-flex w-fit items-center gap-2 rounded-lg bg-amber-600 px-5 py-3 font-medium text-zinc-950 hover:bg-amber-500 transition-colors".to_string(),
                    "Listen"
                    Icon { name: "chevron-down".to_string(), class: "w-4 h-4".to_string() }
                }
            }
            section { id: "about", class: "py-24",
                h2 { class: "mb-6 text-3xl font-semibold text-white", "About" }
                p { class: "max-w-2xl leading-relaxed text-zinc-300", "{config.about}" }
            }
            section { id: "music", class: "py-24",
                h2 { class: "mb-6 flex items-center gap-3 text-3xl font-semibold text-white",
                    Icon { name: "music".to_string(), class: "w-7 h-7".to_string() }
                    "Music"
                }
                div { class: "grid gap-4 md:grid-cols-2",
                    for track in config.tracks.iter().cloned() {
                        AudioPlayer { key: "{track.id}", track }
                    }
                }
            }
            section { id: "contact", class: "py-24",
                h2 { class: "mb-6 text-3xl font-semibold text-white", "Contact" }
                div { class: "max-w-xl", ContactForm {} }
            }
        }
    }
}

#[component]
pub fn ThankYou() -> Element {
    rsx! {
        main { class: "flex min-h-screen flex-col items-center justify-center gap-6 px-6 text-center",
            div { class: "flex h-16 w-16 items-center justify-center rounded-full bg-amber-600 text-zinc-950",
                Icon { name: "check".to_string(), class: "w-8 h-8".to_string() }
            }
            h1 { class: "text-4xl font-bold text-white", "Thank you!" }
            p { class: "max-w-md text-zinc-400",
                "Your message is on its way. I'll get back to you as soon as I can."
            }
            Link {
                to: SiteRoute::Home {},
                class: "rounded-lg border border-zinc-700 px-5 py-3 text-zinc-200 hover:border-amber-500 transition-colors",
                "Back to the site"
            }
        }
    }
}
