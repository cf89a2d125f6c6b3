use crate::{app_core::Ostinato, player::MediaEvent};
use anyhow::{Result, anyhow};

impl Ostinato {
    pub(crate) fn play_selected_track(&mut self) -> Result<()> {
        let track = self.ui.get_selected_track()?;
        self.ui.playback.select_track(&track)
    }

    pub(crate) fn queue_selected_track(&mut self) -> Result<()> {
        let track = self.ui.get_selected_track()?;

        // Queueing onto silence or onto a finished track just starts it.
        match self.ui.playback.now_playing().is_none() || self.ui.playback.is_finished() {
            true => self.ui.playback.select_track(&track),
            false => {
                self.ui.playback.queue_track(&track);
                Ok(())
            }
        }
    }

    fn advance_queue(&mut self) -> Result<()> {
        match self.ui.playback.pop_queue() {
            Some(next) => self.ui.playback.play_now(&next),
            None => Ok(()),
        }
    }

    pub(super) fn handle_player_events(&mut self, event: MediaEvent) -> Result<()> {
        match event {
            MediaEvent::Error(e) => {
                self.ui.set_error(anyhow!(e));
                Ok(())
            }
            MediaEvent::TrackEnded => {
                self.ui.playback.apply_event(MediaEvent::TrackEnded);
                self.advance_queue()
            }
            other => {
                self.ui.playback.apply_event(other);
                Ok(())
            }
        }
    }
}
