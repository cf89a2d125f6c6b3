use crate::{
    domain::TrackInfo,
    player::{MediaBackend, MediaEvent, PlayerCommand},
    REFRESH_RATE,
};
use anyhow::Result;
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::Duration,
};

pub struct PlayerCore {
    backend: Box<dyn MediaBackend>,
    commands: Receiver<PlayerCommand>,
    events: Sender<MediaEvent>,

    current: Option<Arc<TrackInfo>>,
}

impl PlayerCore {
    /// The factory runs on the engine thread; the backend never
    /// leaves it.
    pub fn spawn<F>(
        make_backend: F,
        commands: Receiver<PlayerCommand>,
        events: Sender<MediaEvent>,
    ) -> JoinHandle<()>
    where
        F: FnOnce() -> Result<Box<dyn MediaBackend>> + Send + 'static,
    {
        thread::spawn(move || {
            let backend = match make_backend() {
                Ok(backend) => backend,
                Err(e) => {
                    let _ = events.send(MediaEvent::Error(format!("audio output unavailable: {e:#}")));
                    return;
                }
            };

            let mut core = PlayerCore {
                backend,
                commands,
                events,

                current: None,
            };

            core.run();
        })
    }

    fn run(&mut self) {
        // Exits once every command sender is gone.
        while self.drain_commands() {
            self.check_track_end();
            self.tick_position();
            thread::sleep(REFRESH_RATE);
        }
    }

    fn drain_commands(&mut self) -> bool {
        loop {
            match self.commands.try_recv() {
                Ok(PlayerCommand::Play(track)) => self.play_track(track),
                Ok(PlayerCommand::TogglePlayback) => self.toggle_playback(),
                Ok(PlayerCommand::Seek(pos)) => self.seek(pos),
                Ok(PlayerCommand::SetGain(gain)) => self.backend.set_gain(gain),
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => return false,
            }
        }
    }

    fn check_track_end(&mut self) {
        // Checking `current` ensures the end event is sent once
        if self.backend.track_ended() && self.current.is_some() {
            self.current = None;
            self.emit(MediaEvent::TrackEnded);
        }
    }

    fn tick_position(&mut self) {
        if self.current.is_some() {
            self.emit(MediaEvent::Position(self.backend.position()));
        }
    }

    fn play_track(&mut self, track: Arc<TrackInfo>) {
        tracing::info!("loading stream {}", track.stream_url);

        if let Err(e) = self.backend.load(&track.stream_url) {
            tracing::warn!("stream load failed: {e:#}");
            self.current = None;
            self.emit(MediaEvent::Error(format!("{e:#}")));
            self.emit(MediaEvent::StateChanged(false));
            return;
        }

        self.current = Some(track);
        self.emit(MediaEvent::MetadataLoaded(self.backend.duration()));
        self.backend.play();
        self.emit(MediaEvent::StateChanged(true));
    }

    fn toggle_playback(&mut self) {
        // Every toggle gets an answer, even with nothing loaded.
        if self.backend.is_stopped() {
            self.emit(MediaEvent::StateChanged(false));
            return;
        }

        // Direction comes from the device's own pause flag, not from
        // the UI's copy of it.
        match self.backend.is_paused() {
            true => {
                self.backend.play();
                self.emit(MediaEvent::StateChanged(true));
            }
            false => {
                self.backend.pause();
                self.emit(MediaEvent::StateChanged(false));
            }
        }
    }

    fn seek(&mut self, pos: Duration) {
        if self.backend.is_stopped() {
            return;
        }

        if let Err(e) = self.backend.try_seek(pos) {
            self.emit(MediaEvent::Error(format!("{e:#}")));
        }
    }

    fn emit(&self, event: MediaEvent) {
        let _ = self.events.send(event);
    }
}
