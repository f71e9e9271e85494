//! Structural contract between the rendered player markup and the controller.

use std::fmt::Display;

use dioxus::logger::tracing::warn;

pub const PLAYER_SELECTOR: &str = ".audio-player";
pub const TOGGLE_SELECTOR: &str = ".play-btn";
pub const PLAY_ICON_SELECTOR: &str = ".play-icon";
pub const PAUSE_ICON_SELECTOR: &str = ".pause-icon";
pub const MEDIA_SELECTOR: &str = "audio";
pub const TRACK_SELECTOR: &str = ".progress-bar";
pub const FILL_SELECTOR: &str = ".progress-fill";
pub const ELAPSED_SELECTOR: &str = ".current-time";
pub const TOTAL_SELECTOR: &str = ".total-time";

/// Carried by the toggle button.
pub const TOGGLE_ID_ATTR: &str = "data-audio";
/// Carried by the audio element.
pub const MEDIA_ID_ATTR: &str = "data-id";

pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MarkupError {
    #[error("player #{index} is missing `{selector}`")]
    MissingPart {
        index: usize,
        selector: &'static str,
    },
    #[error("player #{index}: `{selector}` has no `{attr}` attribute")]
    MissingId {
        index: usize,
        selector: &'static str,
        attr: &'static str,
    },
    #[error("player #{index}: toggle targets `{toggle}` but its audio is `{media}`")]
    IdMismatch {
        index: usize,
        toggle: String,
        media: String,
    },
}

/// Resolve the widget id from the toggle's and the media element's id attributes.
pub fn resolve_widget_id(
    index: usize,
    toggle_id: Option<String>,
    media_id: Option<String>,
) -> Result<String, MarkupError> {
    let toggle = toggle_id
        .filter(|id| !id.trim().is_empty())
        .ok_or(MarkupError::MissingId {
            index,
            selector: TOGGLE_SELECTOR,
            attr: TOGGLE_ID_ATTR,
        })?;
    let media = media_id
        .filter(|id| !id.trim().is_empty())
        .ok_or(MarkupError::MissingId {
            index,
            selector: MEDIA_SELECTOR,
            attr: MEDIA_ID_ATTR,
        })?;
    if toggle != media {
        return Err(MarkupError::IdMismatch {
            index,
            toggle,
            media,
        });
    }
    Ok(toggle)
}

/// The required elements of one player container, whatever an element is
/// on the current platform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerParts<T> {
    pub toggle: T,
    pub play_icon: T,
    pub pause_icon: T,
    pub media: T,
    pub track: T,
    pub fill: T,
    pub elapsed: T,
    pub total: T,
}

impl<T> PlayerParts<T> {
    /// Look up every required part of container `index`, failing on the first
    /// one `lookup` cannot find.
    pub fn discover(
        index: usize,
        lookup: impl Fn(&'static str) -> Option<T>,
    ) -> Result<Self, MarkupError> {
        let find = |selector: &'static str| {
            lookup(selector).ok_or(MarkupError::MissingPart { index, selector })
        };
        Ok(Self {
            toggle: find(TOGGLE_SELECTOR)?,
            play_icon: find(PLAY_ICON_SELECTOR)?,
            pause_icon: find(PAUSE_ICON_SELECTOR)?,
            media: find(MEDIA_SELECTOR)?,
            track: find(TRACK_SELECTOR)?,
            fill: find(FILL_SELECTOR)?,
            elapsed: find(ELAPSED_SELECTOR)?,
            total: find(TOTAL_SELECTOR)?,
        })
    }
}

/// Run `attach` over every container in order. A container that fails is
/// logged and skipped; the rest still attach. Returns how many attached.
pub fn attach_each<C, E: Display>(
    containers: impl IntoIterator<Item = C>,
    mut attach: impl FnMut(usize, C) -> Result<(), E>,
) -> usize {
    let mut attached = 0;
    for (index, container) in containers.into_iter().enumerate() {
        match attach(index, container) {
            Ok(()) => attached += 1,
            Err(err) => warn!("skipping audio player: {err}"),
        }
    }
    attached
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::audio_manager::controller::{ControllerError, PlayerController};
    use crate::components::audio_manager::media::MediaHandle;
    use std::collections::HashMap;

    /// A container as a map from selector to element name, plus id attributes.
    struct FakeContainer {
        parts: HashMap<&'static str, String>,
        toggle_id: Option<String>,
        media_id: Option<String>,
    }

    const ALL_PARTS: [&str; 8] = [
        TOGGLE_SELECTOR,
        PLAY_ICON_SELECTOR,
        PAUSE_ICON_SELECTOR,
        MEDIA_SELECTOR,
        TRACK_SELECTOR,
        FILL_SELECTOR,
        ELAPSED_SELECTOR,
        TOTAL_SELECTOR,
    ];

    fn container(id: &str, without: &[&str]) -> FakeContainer {
        FakeContainer {
            parts: ALL_PARTS
                .into_iter()
                .filter(|selector| !without.contains(selector))
                .map(|selector| (selector, format!("{id}{selector}")))
                .collect(),
            toggle_id: Some(id.to_string()),
            media_id: Some(id.to_string()),
        }
    }

    struct SilentMedia;

    impl MediaHandle for SilentMedia {
        type PlayRequest = ();

        fn paused(&self) -> bool {
            true
        }
        fn play(&self) {}
        fn pause(&self) {}
        fn duration(&self) -> f64 {
            f64::NAN
        }
        fn current_time(&self) -> f64 {
            0.0
        }
        fn set_current_time(&self, _seconds: f64) {}
    }

    #[derive(Debug, thiserror::Error)]
    enum AttachError {
        #[error(transparent)]
        Markup(#[from] MarkupError),
        #[error(transparent)]
        Controller(#[from] ControllerError),
    }

    fn attach_all(
        containers: Vec<FakeContainer>,
        controller: &mut PlayerController<SilentMedia>,
    ) -> usize {
        attach_each(containers, |index, c: FakeContainer| -> Result<(), AttachError> {
            PlayerParts::discover(index, |selector| c.parts.get(selector).cloned())?;
            let id = resolve_widget_id(index, c.toggle_id, c.media_id)?;
            controller.register(id, SilentMedia, "0:00")?;
            Ok(())
        })
    }

    #[test]
    fn matching_ids_resolve() {
        let id = resolve_widget_id(0, Some("track-1".into()), Some("track-1".into()));
        assert_eq!(id, Ok("track-1".to_string()));
    }

    #[test]
    fn blank_toggle_id_is_missing() {
        let err = resolve_widget_id(2, Some("  ".into()), Some("track-1".into())).unwrap_err();
        assert_eq!(
            err,
            MarkupError::MissingId {
                index: 2,
                selector: TOGGLE_SELECTOR,
                attr: TOGGLE_ID_ATTR,
            }
        );
    }

    #[test]
    fn missing_media_id_is_reported() {
        let err = resolve_widget_id(1, Some("a".into()), None).unwrap_err();
        assert!(matches!(err, MarkupError::MissingId { attr: MEDIA_ID_ATTR, .. }));
    }

    #[test]
    fn mismatched_ids_are_rejected() {
        let err = resolve_widget_id(0, Some("a".into()), Some("b".into())).unwrap_err();
        assert_eq!(err.to_string(), "player #0: toggle targets `a` but its audio is `b`");
    }

    #[test]
    fn complete_container_discovers_every_part() {
        let c = container("a", &[]);
        let parts = PlayerParts::discover(0, |selector| c.parts.get(selector).cloned()).unwrap();
        assert_eq!(parts.fill, "a.progress-fill");
        assert_eq!(parts.media, "aaudio");
    }

    #[test]
    fn container_without_fill_reports_missing_part() {
        let c = container("a", &[FILL_SELECTOR]);
        let err = PlayerParts::discover(3, |selector| c.parts.get(selector).cloned()).unwrap_err();
        assert_eq!(
            err,
            MarkupError::MissingPart {
                index: 3,
                selector: FILL_SELECTOR,
            }
        );
    }

    #[test]
    fn malformed_container_does_not_block_siblings() {
        let mut controller = PlayerController::new();
        let containers = vec![
            container("a", &[]),
            container("b", &[FILL_SELECTOR]),
            container("c", &[]),
        ];

        let attached = attach_all(containers, &mut controller);

        assert_eq!(attached, 2);
        assert!(controller.widget("a").is_some());
        assert!(controller.widget("b").is_none());
        assert!(controller.widget("c").is_some());
    }

    #[test]
    fn duplicate_id_skips_only_the_repeat() {
        let mut controller = PlayerController::new();
        let containers = vec![container("a", &[]), container("a", &[]), container("b", &[])];

        assert_eq!(attach_all(containers, &mut controller), 2);
        assert!(controller.widget("b").is_some());
    }
}
