use crate::{
    tui::widgets::{DECORATOR, GOLD_FADED, MUSIC_NOTE, QUEUED},
    ui_state::UiState,
};
use ratatui::{
    layout::{Alignment, Constraint, Flex},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Cell, Padding, Row, StatefulWidget, Table, Widget},
};

const COLUMN_SPACING: u16 = 2;

const PADDING: Padding = Padding {
    left: 4,
    right: 4,
    top: 2,
    bottom: 1,
};

const KEYMAPS: &str = " [enter] play ✧ [q]ueue ✧ [space] pause ✧ [m]ute ";

pub struct TrackTable;

impl StatefulWidget for TrackTable {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        if state.catalog_loading {
            empty_block("Fetching the track list...").render(area, buf);
            return;
        }

        if state.catalog.is_empty() {
            empty_block("No tracks found ✧ [F5] to retry").render(area, buf);
            return;
        }

        let title = Line::from_iter([
            Span::from(DECORATOR),
            Span::from("Stock Library").italic(),
            Span::from(DECORATOR),
            Span::from(format!("[{} Tracks] ", state.catalog.len())).fg(Color::DarkGray),
        ]);

        let rows = state
            .catalog
            .iter()
            .enumerate()
            .map(|(index, track)| {
                let status = match state.playback.now_playing() {
                    Some(playing) if playing.same_stream(track) => {
                        Span::from(MUSIC_NOTE).fg(Color::Cyan)
                    }
                    _ if state.playback.is_queued(track) => Span::from(QUEUED).fg(GOLD_FADED),
                    _ => Span::from(""),
                };

                Row::new([
                    Cell::from(format!("{:>2}", index + 1)).fg(Color::DarkGray),
                    Cell::from(status),
                    Cell::from(track.title.to_owned()),
                    Cell::from(track.artist.to_owned()).fg(Color::Gray),
                    Cell::from(track.album.clone().unwrap_or_default()).fg(Color::DarkGray),
                ])
            })
            .collect::<Vec<Row>>();

        let widths = [
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Min(25),
            Constraint::Max(20),
            Constraint::Max(20),
        ];

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title_top(title.alignment(Alignment::Center))
            .title_bottom(Line::from(KEYMAPS.fg(Color::DarkGray)))
            .title_alignment(Alignment::Center)
            .padding(PADDING);

        let table = Table::new(rows, widths)
            .block(block)
            .column_spacing(COLUMN_SPACING)
            .flex(Flex::Start)
            .row_highlight_style(Style::new().fg(Color::Black).bg(Color::Cyan));

        StatefulWidget::render(table, area, buf, &mut state.display_state.table_pos);
    }
}

fn empty_block(title: &str) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .title_top(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .padding(PADDING)
}
