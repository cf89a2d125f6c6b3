mod action;

pub use action::handle_key_event;
pub use action::handle_mouse_event;

use ratatui::crossterm::event::KeyModifiers;

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

const SEEK_SMALL: u64 = 5;
const SEEK_LARGE: u64 = 30;
const SCROLL_MID: usize = 5;
const VOLUME_STEP: f32 = 0.05;

#[derive(Debug, PartialEq)]
pub enum Action {
    // Player Controls
    Play,
    TogglePause,
    SeekForward(u64),
    SeekBack(u64),

    // Progress Bar Scrubbing
    SeekPress(f32),
    SeekDrag(f32),
    SeekRelease(f32),

    // Volume
    VolumeUp,
    VolumeDown,
    ToggleMute,

    // Queue
    QueueTrack,

    // Updating App State
    Scroll(Director),
    RefreshCatalog,

    // Errors, Convenience & Other
    ClosePopup,
    SoftReset,
    QUIT,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Director {
    Up(usize),
    Down(usize),
    Top,
    Bottom,
}
