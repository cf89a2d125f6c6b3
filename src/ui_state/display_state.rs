use ratatui::{layout::Rect, widgets::TableState};

/// Widget state that outlives a single frame: the catalog cursor and
/// the region the progress bar last occupied, which mouse handling
/// uses to turn click columns into fractions.
#[derive(Debug, Default)]
pub struct DisplayState {
    pub table_pos: TableState,
    pub progress_area: Rect,
}
