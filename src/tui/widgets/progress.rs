use crate::{format_timestamp, tui::widgets::DUR_WIDTH, ui_state::UiState};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Text,
    widgets::{LineGauge, StatefulWidget, Widget},
};

pub struct Progress;

impl StatefulWidget for Progress {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        if state.playback.now_playing().is_none() || area.is_empty() {
            state.display_state.progress_area = Rect::default();
            return;
        }

        let [elapsed_area, bar, duration_area] = Layout::horizontal([
            Constraint::Length(DUR_WIDTH + 2),
            Constraint::Fill(1),
            Constraint::Length(DUR_WIDTH + 2),
        ])
        .areas(area);

        // Mouse handling maps click columns onto this rectangle.
        state.display_state.progress_area = bar;

        let elapsed = format_timestamp(Some(state.playback.display_position()));
        let duration = format_timestamp(state.playback.duration());

        Text::from(elapsed)
            .fg(Color::DarkGray)
            .centered()
            .render(elapsed_area, buf);

        Text::from(duration)
            .fg(Color::DarkGray)
            .centered()
            .render(duration_area, buf);

        let filled = match state.playback.is_seeking() {
            true => Color::Yellow,
            false => Color::Cyan,
        };

        LineGauge::default()
            .filled_style(Style::new().fg(filled))
            .unfilled_style(Style::new().fg(Color::DarkGray))
            .filled_symbol("━")
            .unfilled_symbol("─")
            .label("")
            .ratio(state.playback.progress_fraction())
            .render(bar, buf);
    }
}
