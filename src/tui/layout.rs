use crate::ui_state::UiState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub track_table: Rect,
    pub progress_bar: Rect,
    pub buffer_line: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, state: &UiState) -> Self {
        let occupied = state.playback.now_playing().is_some();

        let progress_height = match occupied {
            true => 2,
            false => 0,
        };

        let buffer_line_height = match occupied || state.playback.queue_len() > 0 {
            true => 1,
            false => 0,
        };

        let [track_table, progress_bar, buffer_line] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(16),
                Constraint::Length(progress_height),
                Constraint::Length(buffer_line_height),
            ])
            .areas(area);

        AppLayout {
            track_table,
            progress_bar,
            buffer_line,
        }
    }
}
