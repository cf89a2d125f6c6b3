use super::{DisplayState, Mode, PlaybackCoordinator, PopupState, PopupType};
use crate::{
    domain::{Catalog, TrackInfo},
    key_handler::Director,
};
use anyhow::{Result, anyhow};
use std::sync::Arc;

pub struct UiState {
    pub mode: Mode,
    pub catalog: Catalog,
    pub playback: PlaybackCoordinator,
    pub popup: PopupState,
    pub display_state: DisplayState,
    pub catalog_loading: bool,
}

impl UiState {
    pub fn new(playback: PlaybackCoordinator) -> Self {
        Self {
            mode: Mode::Browse,
            catalog: Catalog::default(),
            playback,
            popup: PopupState::default(),
            display_state: DisplayState::default(),
            catalog_loading: true,
        }
    }

    /// Swap in a fresh listing and keep the cursor on a valid row.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.catalog_loading = false;

        let selected = match self.catalog.len() {
            0 => None,
            len => {
                let current = self.display_state.table_pos.selected().unwrap_or(0);
                Some(current.min(len - 1))
            }
        };
        self.display_state.table_pos.select(selected);
    }

    pub fn get_selected_track(&self) -> Result<Arc<TrackInfo>> {
        let index = self
            .display_state
            .table_pos
            .selected()
            .ok_or_else(|| anyhow!("Nothing selected!"))?;

        self.catalog
            .get_by_index(index)
            .map(Arc::clone)
            .ok_or_else(|| anyhow!("Selection fell outside the catalog"))
    }

    pub fn scroll(&mut self, director: Director) {
        let len = self.catalog.len();
        if len == 0 {
            self.display_state.table_pos.select(None);
            return;
        }

        let max = len - 1;
        let current = self.display_state.table_pos.selected().unwrap_or(0);
        let next = match director {
            Director::Up(n) => current.saturating_sub(n),
            Director::Down(n) => (current + n).min(max),
            Director::Top => 0,
            Director::Bottom => max,
        };

        self.display_state.table_pos.select(Some(next));
    }

    // ===== POPUP CONTROLS =====

    pub fn set_error(&mut self, error: anyhow::Error) {
        tracing::error!("{error:#}");
        self.popup.open(PopupType::Error(format!("{error:#}")));
    }

    pub fn get_error(&self) -> Option<&str> {
        match self.popup.current() {
            PopupType::Error(message) => Some(message),
            PopupType::None => None,
        }
    }

    /// Escape hatch: drop whatever transient surface is up.
    pub fn soft_reset(&mut self) {
        self.popup.close();
    }
}
