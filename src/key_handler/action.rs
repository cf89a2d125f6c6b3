use crate::{
    app_core::Ostinato,
    key_handler::*,
    ui_state::{Mode, UiState},
};
use anyhow::Result;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind},
    layout::{Position, Rect},
};

use KeyCode::*;

pub fn handle_key_event(key_event: KeyEvent, state: &UiState) -> Option<Action> {
    if state.popup.is_open() {
        return handle_popup(&key_event);
    }

    global_commands(&key_event)
}

// An open popup swallows everything except the quit chord.
fn handle_popup(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) => Some(Action::QUIT),
        _ => Some(Action::ClosePopup),
    }
}

fn global_commands(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) => Some(Action::QUIT),
        (X, Esc) => Some(Action::SoftReset),

        // PLAYBACK COMMANDS
        (X, Enter) => Some(Action::Play),
        (X, Char(' ')) => Some(Action::TogglePause),
        (X, Char('q')) => Some(Action::QueueTrack),

        (X, Char('n')) | (X, Right) => Some(Action::SeekForward(SEEK_SMALL)),
        (S, Char('N')) => Some(Action::SeekForward(SEEK_LARGE)),

        (X, Char('p')) | (X, Left) => Some(Action::SeekBack(SEEK_SMALL)),
        (S, Char('P')) => Some(Action::SeekBack(SEEK_LARGE)),

        // VOLUME
        (X, Char('=')) => Some(Action::VolumeUp),
        (X, Char('-')) => Some(Action::VolumeDown),
        (X, Char('m')) => Some(Action::ToggleMute),

        // SCROLLING
        (X, Char('j')) | (X, Down) => Some(Action::Scroll(Director::Down(1))),
        (X, Char('k')) | (X, Up) => Some(Action::Scroll(Director::Up(1))),
        (X, Char('d')) => Some(Action::Scroll(Director::Down(SCROLL_MID))),
        (X, Char('u')) => Some(Action::Scroll(Director::Up(SCROLL_MID))),
        (X, Char('g')) => Some(Action::Scroll(Director::Top)),
        (S, Char('G')) => Some(Action::Scroll(Director::Bottom)),

        (C, Char('u')) | (X, F(5)) => Some(Action::RefreshCatalog),

        _ => None,
    }
}

/// A press inside the progress bar grabs it. Every drag after that
/// tracks the pointer even once it leaves the bar, and releasing
/// commits the seek.
pub fn handle_mouse_event(mouse: MouseEvent, state: &UiState) -> Option<Action> {
    let bar = state.display_state.progress_area;

    if state.popup.is_open() {
        // A popup blocks new grabs, but a release still settles a bar
        // grabbed before it opened.
        return match mouse.kind {
            MouseEventKind::Up(MouseButton::Left) if state.playback.is_seeking() => {
                Some(Action::SeekRelease(fraction_of(mouse.column, &bar)))
            }
            _ => None,
        };
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left)
            if bar.contains(Position::new(mouse.column, mouse.row)) =>
        {
            Some(Action::SeekPress(fraction_of(mouse.column, &bar)))
        }
        MouseEventKind::Drag(MouseButton::Left) if state.playback.is_seeking() => {
            Some(Action::SeekDrag(fraction_of(mouse.column, &bar)))
        }
        MouseEventKind::Up(MouseButton::Left) if state.playback.is_seeking() => {
            Some(Action::SeekRelease(fraction_of(mouse.column, &bar)))
        }
        _ => None,
    }
}

fn fraction_of(column: u16, area: &Rect) -> f32 {
    let span = area.width.saturating_sub(1);
    if span == 0 {
        return 0.0;
    }

    let offset = column.saturating_sub(area.x).min(span);
    f32::from(offset) / f32::from(span)
}

impl Ostinato {
    #[rustfmt::skip]
    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            // Player
            Action::Play            => self.play_selected_track()?,
            Action::TogglePause     => self.ui.playback.toggle_playback()?,
            Action::SeekForward(s)  => self.ui.playback.seek_forward(s)?,
            Action::SeekBack(s)     => self.ui.playback.seek_back(s)?,

            // Progress bar scrubbing
            Action::SeekPress(f)    => self.ui.playback.begin_seek_drag(f),
            Action::SeekDrag(f)     => self.ui.playback.update_seek_drag(f),
            Action::SeekRelease(f)  => {
                self.ui.playback.update_seek_drag(f);
                self.ui.playback.end_seek_drag()?;
            }

            // Volume
            Action::VolumeUp        => self.ui.playback.adjust_volume(VOLUME_STEP)?,
            Action::VolumeDown      => self.ui.playback.adjust_volume(-VOLUME_STEP)?,
            Action::ToggleMute      => self.ui.playback.toggle_mute()?,

            // Queue
            Action::QueueTrack      => self.queue_selected_track()?,

            // UI
            Action::Scroll(s)       => self.ui.scroll(s),
            Action::RefreshCatalog  => self.request_catalog(),

            // Ops
            Action::ClosePopup      => self.ui.popup.close(),
            Action::SoftReset       => self.ui.soft_reset(),
            Action::QUIT            => self.ui.mode = Mode::QUIT,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Catalog, TrackInfo},
        player::{PlayerCommand, PlayerHandle},
        ui_state::PlaybackCoordinator,
    };
    use crossbeam_channel::{Receiver, unbounded};
    use ratatui::crossterm::event::KeyModifiers;
    use std::sync::Arc;

    fn ui() -> (UiState, Receiver<PlayerCommand>) {
        let (cmd_tx, cmd_rx) = unbounded();
        let (_evt_tx, evt_rx) = unbounded();
        let handle = PlayerHandle::from_parts(cmd_tx, evt_rx);

        (UiState::new(PlaybackCoordinator::new(handle, 0.7)), cmd_rx)
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn core_bindings_resolve() {
        let (state, _cmd_rx) = ui();

        assert_eq!(
            handle_key_event(key(Enter, X), &state),
            Some(Action::Play)
        );
        assert_eq!(
            handle_key_event(key(Char(' '), X), &state),
            Some(Action::TogglePause)
        );
        assert_eq!(
            handle_key_event(key(Char('m'), X), &state),
            Some(Action::ToggleMute)
        );
        assert_eq!(handle_key_event(key(Char('c'), C), &state), Some(Action::QUIT));
    }

    #[test]
    fn any_key_closes_an_open_popup_except_the_quit_chord() {
        let (mut state, _cmd_rx) = ui();
        state.set_error(anyhow::anyhow!("boom"));

        assert_eq!(
            handle_key_event(key(Char(' '), X), &state),
            Some(Action::ClosePopup)
        );
        assert_eq!(handle_key_event(key(Char('c'), C), &state), Some(Action::QUIT));
    }

    #[test]
    fn click_inside_the_bar_starts_a_drag() {
        let (mut state, _cmd_rx) = ui();
        state.display_state.progress_area = Rect::new(10, 20, 41, 1);

        let action = handle_mouse_event(
            mouse(MouseEventKind::Down(MouseButton::Left), 30, 20),
            &state,
        );

        assert_eq!(action, Some(Action::SeekPress(0.5)));
    }

    #[test]
    fn click_outside_the_bar_is_ignored() {
        let (mut state, _cmd_rx) = ui();
        state.display_state.progress_area = Rect::new(10, 20, 41, 1);

        let action = handle_mouse_event(
            mouse(MouseEventKind::Down(MouseButton::Left), 30, 5),
            &state,
        );

        assert_eq!(action, None);
    }

    #[test]
    fn drag_and_release_require_a_grabbed_bar() {
        let (mut state, _cmd_rx) = ui();
        state.display_state.progress_area = Rect::new(10, 20, 41, 1);

        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 30, 20);
        let release = mouse(MouseEventKind::Up(MouseButton::Left), 50, 20);

        assert_eq!(handle_mouse_event(drag, &state), None);
        assert_eq!(handle_mouse_event(release, &state), None);

        state.playback.begin_seek_drag(0.3);
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 30, 4);
        let release = mouse(MouseEventKind::Up(MouseButton::Left), 50, 4);

        assert_eq!(handle_mouse_event(drag, &state), Some(Action::SeekDrag(0.5)));
        assert_eq!(
            handle_mouse_event(release, &state),
            Some(Action::SeekRelease(1.0))
        );
    }

    #[test]
    fn a_release_settles_the_bar_under_a_popup() {
        let (mut state, _cmd_rx) = ui();
        state.display_state.progress_area = Rect::new(10, 20, 41, 1);
        state.playback.begin_seek_drag(0.3);
        state.set_error(anyhow::anyhow!("the service is down"));

        let press = mouse(MouseEventKind::Down(MouseButton::Left), 30, 20);
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 30, 20);
        let release = mouse(MouseEventKind::Up(MouseButton::Left), 30, 20);

        assert_eq!(handle_mouse_event(press, &state), None);
        assert_eq!(handle_mouse_event(drag, &state), None);
        assert_eq!(
            handle_mouse_event(release, &state),
            Some(Action::SeekRelease(0.5))
        );
    }

    #[test]
    fn actions_reach_the_player_across_the_input_boundary() {
        let (mut ui, cmd_rx) = ui();
        let mut catalog = Catalog::default();
        catalog.replace(vec![Arc::new(TrackInfo {
            id: None,
            title: "First".to_string(),
            artist: "artist".to_string(),
            album: None,
            stream_url: "u/a".to_string(),
        })]);
        ui.set_catalog(catalog);
        let mut app = Ostinato::from_ui(ui);

        app.handle_action(Action::Play).unwrap();
        assert!(matches!(cmd_rx.try_recv(), Ok(PlayerCommand::Play(_))));

        app.handle_action(Action::VolumeUp).unwrap();
        assert!(matches!(cmd_rx.try_recv(), Ok(PlayerCommand::SetGain(_))));

        app.handle_action(Action::QUIT).unwrap();
        assert_eq!(app.ui.mode, Mode::QUIT);
    }

    #[test]
    fn pointer_columns_clamp_to_the_bar() {
        let bar = Rect::new(10, 20, 41, 1);

        assert_eq!(fraction_of(10, &bar), 0.0);
        assert_eq!(fraction_of(50, &bar), 1.0);
        assert_eq!(fraction_of(30, &bar), 0.5);
        assert_eq!(fraction_of(2, &bar), 0.0);
        assert_eq!(fraction_of(400, &bar), 1.0);

        let degenerate = Rect::new(0, 0, 0, 0);
        assert_eq!(fraction_of(7, &degenerate), 0.0);
    }
}
