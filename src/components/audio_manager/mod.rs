//! Audio Manager - per-widget audio players with page-wide exclusive playback.
//! The controller is a plain model over `MediaHandle`; the browser binding
//! only translates DOM events into controller calls and renders the result.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

// `m:ss` formatting and duration sanity checks.
mod time;
// Media element seam.
mod media;
// Per-widget display model and playback state.
mod widget;
// Registry enforcing single playback, progress, seek and error handling.
mod controller;
// Selectors and attributes the player markup must provide.
mod markup;
// Browser (wasm) binding.
#[cfg(target_arch = "wasm32")]
mod web;

pub use markup::HIDDEN_CLASS;
pub use time::ZERO_TIME;

#[cfg(target_arch = "wasm32")]
pub use web::attach_players;

/// Attach players to the page; no-op off the web.
#[cfg(not(target_arch = "wasm32"))]
pub fn attach_players() -> usize {
    0
}
