use super::media::MediaHandle;
use super::time::ZERO_TIME;

/// Which of the two toggle icons is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyph {
    #[default]
    Play,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum PlaybackState {
    Paused,
    Playing,
    Errored,
}

pub const ERROR_LABEL: &str = "Error";

/// Everything the page shows for one widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetDisplay {
    pub glyph: Glyph,
    pub fill_percent: f64,
    pub elapsed: String,
    pub total: String,
}

impl WidgetDisplay {
    pub fn new(total: impl Into<String>) -> Self {
        Self {
            glyph: Glyph::Play,
            fill_percent: 0.0,
            elapsed: ZERO_TIME.to_string(),
            total: total.into(),
        }
    }

    /// True while the total label still shows its placeholder or a broken value.
    pub fn total_unresolved(&self) -> bool {
        let total = self.total.trim();
        total.is_empty() || total == ZERO_TIME || total.contains("NaN")
    }

    pub(super) fn reset_to_start(&mut self) {
        self.glyph = Glyph::Play;
        self.fill_percent = 0.0;
        self.elapsed = ZERO_TIME.to_string();
    }
}

impl Default for WidgetDisplay {
    fn default() -> Self {
        Self::new(ZERO_TIME)
    }
}

pub struct PlayerWidget<M: MediaHandle> {
    id: String,
    pub(super) media: M,
    pub(super) display: WidgetDisplay,
    pub(super) errored: bool,
}

impl<M: MediaHandle> PlayerWidget<M> {
    pub fn new(id: impl Into<String>, media: M, display: WidgetDisplay) -> Self {
        Self {
            id: id.into(),
            media,
            display,
            errored: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display(&self) -> &WidgetDisplay {
        &self.display
    }

    /// Playing/paused is read from the media element every time, never cached.
    #[allow(dead_code)]
    pub fn state(&self) -> PlaybackState {
        if self.errored {
            PlaybackState::Errored
        } else if self.media.paused() {
            PlaybackState::Paused
        } else {
            PlaybackState::Playing
        }
    }

    pub(super) fn is_audible(&self) -> bool {
        !self.media.paused()
    }
}
