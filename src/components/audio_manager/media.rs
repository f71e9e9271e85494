/// The slice of an audio element the player controller drives.
///
/// Starting playback is asynchronous in browsers, so `play` hands back
/// whatever pending request the platform produces; the caller awaits it and
/// reports the outcome through `PlayerController::play_settled`.
pub trait MediaHandle {
    type PlayRequest;

    fn paused(&self) -> bool;
    fn play(&self) -> Self::PlayRequest;
    fn pause(&self);
    fn duration(&self) -> f64;
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64);
}
