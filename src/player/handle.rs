use std::{sync::Arc, time::Duration};

use anyhow::Result;
use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::{
    domain::TrackInfo,
    player::{core::PlayerCore, MediaBackend, MediaEvent, PlayerCommand, RodioBackend},
};

/// Owning side of the engine channel pair. Dropping the handle closes
/// the command channel, which shuts the engine thread down.
pub struct PlayerHandle {
    commands: Sender<PlayerCommand>,
    events: Receiver<MediaEvent>,
}

impl PlayerHandle {
    pub fn spawn() -> Self {
        Self::spawn_with(|| Ok(Box::new(RodioBackend::new()?) as Box<dyn MediaBackend>))
    }

    /// Starts the engine with a caller-supplied backend.
    pub fn spawn_with<F>(make_backend: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn MediaBackend>> + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = unbounded();
        let (evt_tx, evt_rx) = unbounded();

        PlayerCore::spawn(make_backend, cmd_rx, evt_tx);

        Self {
            commands: cmd_tx,
            events: evt_rx,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        commands: Sender<PlayerCommand>,
        events: Receiver<MediaEvent>,
    ) -> Self {
        Self {
            commands,
            events,
        }
    }

    pub fn events(&self) -> &Receiver<MediaEvent> {
        &self.events
    }
}

// =====================
//    COMMAND HANDLER
// =====================
impl PlayerHandle {
    pub fn play(&self, track: Arc<TrackInfo>) -> Result<()> {
        self.commands.send(PlayerCommand::Play(track))?;
        Ok(())
    }

    pub fn toggle_playback(&self) -> Result<()> {
        self.commands.send(PlayerCommand::TogglePlayback)?;
        Ok(())
    }

    pub fn seek(&self, pos: Duration) -> Result<()> {
        self.commands.send(PlayerCommand::Seek(pos))?;
        Ok(())
    }

    pub fn set_gain(&self, gain: f32) -> Result<()> {
        self.commands.send(PlayerCommand::SetGain(gain))?;
        Ok(())
    }
}
