//! The components module contains all shared components for the site.

mod app;
pub mod audio_manager;
mod audio_player;
mod contact_form;
mod icons;
pub mod reveal;
mod smooth_scroll;

pub use app::*;
pub use audio_player::*;
pub use contact_form::*;
pub use icons::*;
pub use smooth_scroll::*;
