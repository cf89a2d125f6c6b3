use anyhow::Result;
use std::time::Duration;

/// Seam between the engine thread and the audio output device. The
/// engine owns exactly one backend and is the only code that touches
/// it; tests substitute a scripted implementation.
pub trait MediaBackend {
    /// Replace the current source with the stream at `url`, leaving
    /// playback paused at the start of the new track. The previous
    /// source is gone even when loading fails.
    fn load(&mut self, url: &str) -> Result<()>;

    fn play(&mut self);
    fn pause(&mut self);
    fn is_paused(&self) -> bool;

    /// True when no source is loaded.
    fn is_stopped(&self) -> bool;

    fn position(&self) -> Duration;
    fn duration(&self) -> Option<Duration>;
    fn try_seek(&mut self, pos: Duration) -> Result<()>;

    /// Output gain in `[0, 1]`, applied immediately.
    fn set_gain(&mut self, gain: f32);

    /// True once the loaded source has played to exhaustion.
    fn track_ended(&self) -> bool;
}
