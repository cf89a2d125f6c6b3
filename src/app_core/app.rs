use crate::{
    Config, RemoteClient,
    domain::{Catalog, TrackInfo},
    overwrite_line,
    player::PlayerHandle,
    tui,
    ui_state::{Mode, PlaybackCoordinator, UiState},
};
use anyhow::Result;
use crossbeam_channel::{Receiver, unbounded};
use ratatui::crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
};
use std::{io::stdout, sync::Arc, thread};

pub struct Ostinato {
    pub(crate) ui: UiState,
    pub(super) remote: RemoteClient,
    pub(super) catalog_rec: Option<Receiver<Result<Vec<Arc<TrackInfo>>>>>,
}

impl Ostinato {
    pub fn new(config: Config) -> Result<Self> {
        let remote = RemoteClient::new(&config.api_url)?;

        let mut playback = PlaybackCoordinator::new(PlayerHandle::spawn(), config.volume);
        playback.push_gain()?;

        Ok(Ostinato {
            ui: UiState::new(playback),
            remote,
            catalog_rec: None,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_ui(ui: UiState) -> Self {
        Ostinato {
            ui,
            remote: RemoteClient::new(crate::config::DEFAULT_API_URL).unwrap(),
            catalog_rec: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        execute!(stdout(), EnableMouseCapture)?;
        terminal.clear()?;

        self.request_catalog();
        let input_rec = spawn_input_listener();

        // MAIN ROUTINE
        loop {
            self.select_input(&input_rec);

            terminal.draw(|f| tui::render(f, &mut self.ui))?;

            if self.ui.mode == Mode::QUIT {
                break;
            }
        }

        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        overwrite_line("Thank you for using ostinato!\n\n");

        Ok(())
    }

    pub(crate) fn request_catalog(&mut self) {
        // One fetch at a time.
        if self.catalog_rec.is_some() {
            return;
        }

        tracing::info!("requesting track list");
        self.ui.catalog_loading = true;
        self.catalog_rec = Some(self.remote.fetch_tracks_bg());
    }

    pub(super) fn handle_catalog_result(&mut self, result: Result<Vec<Arc<TrackInfo>>>) {
        self.catalog_rec = None;

        match result {
            Ok(tracks) => {
                tracing::info!("track list refreshed: {} entries", tracks.len());

                let mut catalog = Catalog::default();
                catalog.replace(tracks);
                self.ui.set_catalog(catalog);
            }
            Err(e) => {
                self.ui.catalog_loading = false;
                self.ui.set_error(e);
            }
        }
    }
}

/// Terminal input arrives on its own thread so the main loop can wait
/// on every source at once.
fn spawn_input_listener() -> Receiver<Event> {
    let (input_tx, input_rec) = unbounded();

    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if input_tx.send(ev).is_err() {
                break;
            }
        }
    });

    input_rec
}
