use crate::ui_state::UiState;
use ratatui::{
    layout::Alignment,
    style::{Color, Stylize},
    widgets::{Block, BorderType, Padding, Paragraph, StatefulWidget, Widget, Wrap},
};

pub struct ErrorMsg;

impl StatefulWidget for ErrorMsg {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let message = state.get_error().unwrap_or("No error to display");

        Paragraph::new(message)
            .wrap(Wrap { trim: true })
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .title_bottom(" Press any key to dismiss ")
                    .title_alignment(Alignment::Center)
                    .padding(Padding::new(5, 5, 1, 1)),
            )
            .fg(Color::Black)
            .bg(Color::LightRed)
            .render(area, buf);
    }
}
