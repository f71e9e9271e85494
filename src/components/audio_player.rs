use dioxus::prelude::*;

use crate::components::audio_manager::{HIDDEN_CLASS, ZERO_TIME};
use crate::components::Icon;
use crate::config::TrackConfig;

/// Markup for one audio player widget. Behavior is attached afterwards by
/// `audio_manager::attach_players`, which finds these elements by class.
#[component]
pub fn AudioPlayer(track: TrackConfig) -> Element {
    let id = track.id.clone();

    rsx! {
        div {
            class: "audio-player flex flex-col gap-3 rounded-xl border border-zinc-800 bg-zinc-900/60 p-4",
            div { class: "flex items-center gap-4",
                button {
                    r#type: "button",
                    class: "play-btn flex h-12 w-12 items-center justify-center rounded-full bg-amber-600 text-zinc-950 hover:bg-amber-500 transition-colors",
                    aria_label: "Play {track.title}",
                    "data-audio": "{id}",
                    span { class: "play-icon",
                        Icon { name: "play".to_string(), class: "w-5 h-5".to_string() }
                    }
                    span { class: "pause-icon {HIDDEN_CLASS}",
                        Icon { name: "pause".to_string(), class: "w-5 h-5".to_string() }
                    }
                }
                div { class: "min-w-0 flex-1",
                    p { class: "truncate font-medium text-white",
                        "{track.title}"
                        if track.sample {
                            span { class: "ml-2 rounded bg-zinc-800 px-1.5 py-0.5 text-xs text-zinc-400",
                                "sample"
                            }
                        }
                    }
                    if let Some(blurb) = track.blurb.as_ref() {
                        p { class: "truncate text-sm text-zinc-400", "{blurb}" }
                    }
                }
            }
            div { class: "progress-bar h-1.5 w-full cursor-pointer rounded-full bg-zinc-800",
                div { class: "progress-fill h-full rounded-full bg-amber-500", style: "width: 0%" }
            }
            div { class: "flex justify-between text-xs tabular-nums text-zinc-500",
                span { class: "current-time", "{ZERO_TIME}" }
                span { class: "total-time", "{ZERO_TIME}" }
            }
            audio {
                preload: "metadata",
                src: "{track.src}",
                "data-id": "{id}",
            }
        }
    }
}
