use dioxus::logger::tracing::{debug, warn};

use super::media::MediaHandle;
use super::time::{format_time, usable_duration};
use super::widget::{Glyph, PlaybackState, PlayerWidget, WidgetDisplay, ERROR_LABEL};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("no player widget registered with id `{0}`")]
    UnknownWidget(String),
    #[error("a player widget with id `{0}` is already registered")]
    DuplicateWidget(String),
}

/// Why a playback start request did not go through.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("playback was refused: {0}")]
pub struct PlaybackRejected(pub String);

/// What a toggle did to the activated widget.
#[derive(Debug)]
pub enum Toggle<R> {
    /// Playback was requested; await `R` and report back via `play_settled`.
    Requested(R),
    /// The widget was playing and is now paused.
    Paused,
    /// The widget errored earlier and no longer accepts playback.
    Unavailable,
}

/// Page-scoped registry of every audio player widget.
///
/// Holds the at-most-one-playing invariant: activating any widget first
/// pauses every other audible widget.
pub struct PlayerController<M: MediaHandle> {
    widgets: Vec<PlayerWidget<M>>,
}

impl<M: MediaHandle> Default for PlayerController<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MediaHandle> PlayerController<M> {
    pub fn new() -> Self {
        Self {
            widgets: Vec::new(),
        }
    }

    pub fn register(
        &mut self,
        id: impl Into<String>,
        media: M,
        initial_total: &str,
    ) -> Result<(), ControllerError> {
        let id = id.into();
        if self.widgets.iter().any(|w| w.id() == id) {
            return Err(ControllerError::DuplicateWidget(id));
        }
        self.widgets
            .push(PlayerWidget::new(id, media, WidgetDisplay::new(initial_total)));
        Ok(())
    }

    #[allow(dead_code)]
    pub fn widgets(&self) -> impl Iterator<Item = &PlayerWidget<M>> {
        self.widgets.iter()
    }

    pub fn widget(&self, id: &str) -> Option<&PlayerWidget<M>> {
        self.widgets.iter().find(|w| w.id() == id)
    }

    pub fn display(&self, id: &str) -> Option<&WidgetDisplay> {
        self.widget(id).map(PlayerWidget::display)
    }

    #[allow(dead_code)]
    pub fn state(&self, id: &str) -> Option<PlaybackState> {
        self.widget(id).map(PlayerWidget::state)
    }

    fn widget_mut(&mut self, id: &str) -> Result<&mut PlayerWidget<M>, ControllerError> {
        self.widgets
            .iter_mut()
            .find(|w| w.id() == id)
            .ok_or_else(|| ControllerError::UnknownWidget(id.to_string()))
    }

    /// Toggle button activation.
    pub fn toggle(&mut self, id: &str) -> Result<Toggle<M::PlayRequest>, ControllerError> {
        // Validate before touching any sibling.
        self.widget_mut(id)?;

        for other in self.widgets.iter_mut().filter(|w| w.id() != id) {
            if other.is_audible() {
                other.media.pause();
                other.display.glyph = Glyph::Play;
            }
        }

        let widget = self.widget_mut(id)?;
        if widget.errored {
            if widget.is_audible() {
                widget.media.pause();
            }
            widget.display.glyph = Glyph::Play;
            return Ok(Toggle::Unavailable);
        }

        if widget.media.paused() {
            Ok(Toggle::Requested(widget.media.play()))
        } else {
            widget.media.pause();
            widget.display.glyph = Glyph::Play;
            Ok(Toggle::Paused)
        }
    }

    /// Outcome of a playback request issued by `toggle`.
    pub fn play_settled(
        &mut self,
        id: &str,
        outcome: Result<(), PlaybackRejected>,
    ) -> Result<(), ControllerError> {
        let widget = self.widget_mut(id)?;
        match outcome {
            // The widget may have been paused again while the request was pending.
            Ok(()) if widget.is_audible() && !widget.errored => {
                widget.display.glyph = Glyph::Pause;
            }
            Ok(()) => {}
            Err(err) => {
                warn!("player `{id}`: {err}");
                widget.display.glyph = Glyph::Play;
            }
        }
        Ok(())
    }

    /// `timeupdate`: move the fill and the elapsed label.
    pub fn time_update(&mut self, id: &str) -> Result<(), ControllerError> {
        let widget = self.widget_mut(id)?;
        if widget.errored {
            return Ok(());
        }
        let Some(duration) = usable_duration(widget.media.duration()) else {
            return Ok(());
        };
        let elapsed = widget.media.current_time();
        widget.display.fill_percent = elapsed / duration * 100.0;
        widget.display.elapsed = format_time(elapsed);
        Ok(())
    }

    /// `loadedmetadata` and `canplaythrough`: fill in the total label once.
    pub fn duration_ready(&mut self, id: &str) -> Result<(), ControllerError> {
        let widget = self.widget_mut(id)?;
        if widget.errored || !widget.display.total_unresolved() {
            return Ok(());
        }
        if let Some(duration) = usable_duration(widget.media.duration()) {
            widget.display.total = format_time(duration);
        }
        Ok(())
    }

    /// Media `error`. Terminal for the widget.
    pub fn media_error(&mut self, id: &str) -> Result<(), ControllerError> {
        let widget = self.widget_mut(id)?;
        warn!("player `{id}`: media failed to load or decode");
        widget.errored = true;
        widget.display.total = ERROR_LABEL.to_string();
        widget.display.glyph = Glyph::Play;
        Ok(())
    }

    /// Media `ended`.
    pub fn ended(&mut self, id: &str) -> Result<(), ControllerError> {
        let widget = self.widget_mut(id)?;
        if widget.errored {
            return Ok(());
        }
        widget.display.reset_to_start();
        Ok(())
    }

    /// Click on the seek track. Positions are in the same coordinate space
    /// (client pixels); the fraction is not clamped.
    pub fn seek(
        &mut self,
        id: &str,
        pointer_x: f64,
        track_left: f64,
        track_width: f64,
    ) -> Result<Option<f64>, ControllerError> {
        let widget = self.widget_mut(id)?;
        if widget.errored || !(track_width.is_finite() && track_width > 0.0) {
            return Ok(None);
        }
        let Some(duration) = usable_duration(widget.media.duration()) else {
            return Ok(None);
        };
        let fraction = (pointer_x - track_left) / track_width;
        let position = fraction * duration;
        debug!("player `{id}`: seek to {position:.2}s ({fraction:.3} of track)");
        widget.media.set_current_time(position);
        Ok(Some(position))
    }
}
