use super::VolumeControl;
use crate::{
    domain::TrackInfo,
    player::{MediaEvent, PlayerHandle},
};
use anyhow::Result;
use std::{collections::VecDeque, sync::Arc, time::Duration};

/// Screen-side view of the engine: what the listener selected, how far
/// it has played, and what is lined up next.
///
/// Writes here are optimistic. Every mutation that matters to the
/// device also sends a command through the handle, and the engine's
/// events later overwrite whatever was assumed.
pub struct PlaybackCoordinator {
    handle: PlayerHandle,
    now_playing: Option<Arc<TrackInfo>>,
    queue: VecDeque<Arc<TrackInfo>>,
    is_playing: bool,
    finished: bool,
    duration: Option<Duration>,
    elapsed: Duration,
    seek_drag: Option<f32>,
    volume: VolumeControl,
}

impl PlaybackCoordinator {
    pub fn new(handle: PlayerHandle, volume_level: f32) -> Self {
        Self {
            handle,
            now_playing: None,
            queue: VecDeque::new(),
            is_playing: false,
            finished: false,
            duration: None,
            elapsed: Duration::ZERO,
            seek_drag: None,
            volume: VolumeControl::new(volume_level),
        }
    }

    pub fn now_playing(&self) -> Option<&Arc<TrackInfo>> {
        self.now_playing.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// True once the loaded track has played to the end and nothing
    /// has replaced it.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    pub fn events(&self) -> &crossbeam_channel::Receiver<MediaEvent> {
        self.handle.events()
    }

    /// Hand a track to the engine and show it as playing right away.
    /// Re-selecting the stream that is already loaded does nothing,
    /// unless that stream has finished, in which case it restarts.
    pub fn select_track(&mut self, track: &Arc<TrackInfo>) -> Result<()> {
        if !self.finished
            && self
                .now_playing
                .as_ref()
                .is_some_and(|current| current.same_stream(track))
        {
            return Ok(());
        }

        self.play_now(track)
    }

    /// Start a track unconditionally. Queue advancement goes through
    /// here so a stream can follow itself.
    pub fn play_now(&mut self, track: &Arc<TrackInfo>) -> Result<()> {
        self.now_playing = Some(Arc::clone(track));
        self.duration = None;
        self.elapsed = Duration::ZERO;
        self.seek_drag = None;
        self.is_playing = true;
        self.finished = false;

        self.handle.play(Arc::clone(track))
    }

    pub fn toggle_playback(&mut self) -> Result<()> {
        // After the end of the track there is nothing left to resume;
        // play it again from the start instead.
        if self.finished {
            return match self.now_playing.clone() {
                Some(track) => self.play_now(&track),
                None => Ok(()),
            };
        }

        if self.now_playing.is_none() {
            return Ok(());
        }

        // Optimistic flip; the engine's StateChanged corrects it if
        // the device disagrees.
        self.is_playing = !self.is_playing;
        self.handle.toggle_playback()
    }

    // ===== SEEKING =====

    pub fn is_seeking(&self) -> bool {
        self.seek_drag.is_some()
    }

    pub fn begin_seek_drag(&mut self, fraction: f32) {
        self.seek_drag = Some(fraction.clamp(0.0, 1.0));
    }

    pub fn update_seek_drag(&mut self, fraction: f32) {
        if self.seek_drag.is_some() {
            self.seek_drag = Some(fraction.clamp(0.0, 1.0));
        }
    }

    /// Let go of the bar: the held fraction becomes a real seek and
    /// position reports start landing again.
    pub fn end_seek_drag(&mut self) -> Result<()> {
        match self.seek_drag.take() {
            Some(fraction) => self.seek_to_fraction(fraction),
            None => Ok(()),
        }
    }

    /// Seeks need a real duration to aim at. Until metadata arrives,
    /// or for a zero-length source, this does nothing.
    pub fn seek_to_fraction(&mut self, fraction: f32) -> Result<()> {
        let Some(duration) = self.duration.filter(|total| !total.is_zero()) else {
            return Ok(());
        };

        let target = duration.mul_f32(fraction.clamp(0.0, 1.0));
        self.elapsed = target;
        self.handle.seek(target)
    }

    pub fn seek_forward(&mut self, secs: u64) -> Result<()> {
        let Some(duration) = self.duration.filter(|total| !total.is_zero()) else {
            return Ok(());
        };

        let target = (self.elapsed + Duration::from_secs(secs)).min(duration);
        self.elapsed = target;
        self.handle.seek(target)
    }

    pub fn seek_back(&mut self, secs: u64) -> Result<()> {
        if self.duration.filter(|total| !total.is_zero()).is_none() {
            return Ok(());
        }

        let target = self.elapsed.saturating_sub(Duration::from_secs(secs));
        self.elapsed = target;
        self.handle.seek(target)
    }

    // ===== VOLUME =====

    pub fn volume(&self) -> &VolumeControl {
        &self.volume
    }

    pub fn set_volume(&mut self, level: f32) -> Result<()> {
        self.volume.set_level(level);
        self.push_gain()
    }

    pub fn adjust_volume(&mut self, delta: f32) -> Result<()> {
        self.set_volume(self.volume.level() + delta)
    }

    pub fn toggle_mute(&mut self) -> Result<()> {
        self.volume.toggle_mute();
        self.push_gain()
    }

    /// Send the effective gain to the engine, e.g. after loading the
    /// configured startup volume.
    pub fn push_gain(&mut self) -> Result<()> {
        self.handle.set_gain(self.volume.gain())
    }

    // ===== QUEUE =====

    pub fn queue_track(&mut self, track: &Arc<TrackInfo>) {
        self.queue.push_back(Arc::clone(track));
    }

    pub fn pop_queue(&mut self) -> Option<Arc<TrackInfo>> {
        self.queue.pop_front()
    }

    pub fn peek_queue(&self) -> Option<&Arc<TrackInfo>> {
        self.queue.front()
    }

    pub fn is_queued(&self, track: &TrackInfo) -> bool {
        self.queue.iter().any(|queued| queued.same_stream(track))
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    // ===== EVENT INTAKE =====

    /// Fold one engine report into the view. Arrival order is the
    /// engine's order, so the last word always belongs to the device.
    pub fn apply_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::MetadataLoaded(duration) => self.duration = duration,
            MediaEvent::Position(elapsed) => {
                // A held drag owns the bar until it is released.
                if self.seek_drag.is_none() {
                    self.elapsed = elapsed;
                }
            }
            MediaEvent::StateChanged(playing) => self.is_playing = playing,
            MediaEvent::TrackEnded => {
                self.is_playing = false;
                self.finished = true;
            }
            MediaEvent::Error(_) => (),
        }
    }

    // ===== READOUT =====

    /// Elapsed time to print, substituting the drag target while the
    /// listener is scrubbing.
    pub fn display_position(&self) -> Duration {
        match (self.seek_drag, self.duration) {
            (Some(fraction), Some(duration)) => duration.mul_f32(fraction),
            _ => self.elapsed,
        }
    }

    /// Fill ratio for the progress bar. Always finite, always within
    /// the unit interval, even when the duration is unknown or zero.
    pub fn progress_fraction(&self) -> f64 {
        if let Some(fraction) = self.seek_drag {
            return f64::from(fraction);
        }

        match self.duration {
            Some(duration) if !duration.is_zero() => {
                (self.elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
            }
            _ => 0.0,
        }
    }
}
