use crate::{
    truncate_at_last_space,
    tui::widgets::{GOLD_FADED, PAUSE_ICON, VOL_HIGH, VOL_LOW, VOL_MEDIUM, VOL_MUTED},
    ui_state::{UiState, VolumeTier},
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Stylize},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

pub struct BufferLine;

impl StatefulWidget for BufferLine {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let separator = match state.playback.is_playing() {
            true => Span::from(" ✧ ").fg(Color::DarkGray),
            false => Span::from(format!(" {PAUSE_ICON} ")).fg(Color::Yellow),
        };

        let playing_title = match state.playback.now_playing() {
            Some(track) => {
                let title = truncate_at_last_space(&track.title, (area.width / 3) as usize);

                Line::from_iter([
                    Span::from(title),
                    separator,
                    Span::from(track.artist.to_owned()).fg(Color::DarkGray),
                ])
                .centered()
            }
            None => "".into(),
        };

        let [left, center, right] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
            ])
            .areas(area);

        volume_display(state).render(left, buf);
        playing_title.render(center, buf);
        queue_display(state).render(right, buf);
    }
}

fn volume_display(state: &UiState) -> Line<'static> {
    let volume = state.playback.volume();

    let (glyph, color) = match volume.tier() {
        VolumeTier::Muted => (VOL_MUTED, Color::Red),
        VolumeTier::Low => (VOL_LOW, Color::DarkGray),
        VolumeTier::Medium => (VOL_MEDIUM, Color::DarkGray),
        VolumeTier::High => (VOL_HIGH, Color::DarkGray),
    };

    let percent = (volume.level() * 100.0).round() as u16;

    Line::from_iter([
        Span::from(format!("  {glyph} ")).fg(color),
        Span::from(format!("{percent:>3}%")).fg(Color::DarkGray),
    ])
}

fn queue_display(state: &UiState) -> Option<Line<'static>> {
    let up_next = state.playback.peek_queue()?;
    let total = state.playback.queue_len();

    Some(
        Line::from_iter([
            Span::from(up_next.title.to_owned()).fg(GOLD_FADED),
            Span::from(format!(" [{total}]  ")).fg(Color::DarkGray),
        ])
        .right_aligned(),
    )
}
