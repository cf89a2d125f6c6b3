use crossbeam_channel::{Receiver, select};
use ratatui::crossterm::event::{Event, KeyEventKind};

use crate::{REFRESH_RATE, app_core::Ostinato, key_handler};

impl Ostinato {
    #[inline]
    pub(super) fn select_input(&mut self, input_rec: &Receiver<Event>) {
        let idle = never();
        let catalog_rec = self.catalog_rec.as_ref().unwrap_or(&idle);

        select! {
            recv(self.ui.playback.events()) -> event => {
                if let Ok(event) = event {
                    if let Err(e) = self.handle_player_events(event) {
                        self.ui.set_error(e);
                    }
                }
            }

            recv(catalog_rec) -> result => {
                if let Ok(result) = result {
                    self.handle_catalog_result(result);
                }
            }

            recv(input_rec) -> input => {
                if let Ok(input) = input {
                    self.handle_input(input);
                }
            }

            default(REFRESH_RATE) => {}
        }
    }

    fn handle_input(&mut self, input: Event) {
        let action = match input {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                key_handler::handle_key_event(key, &self.ui)
            }
            Event::Mouse(mouse) => key_handler::handle_mouse_event(mouse, &self.ui),
            _ => None,
        };

        if let Some(action) = action {
            if let Err(e) = self.handle_action(action) {
                self.ui.set_error(e);
            }
        }
    }
}

fn never<T>() -> Receiver<T> {
    crossbeam_channel::never()
}
