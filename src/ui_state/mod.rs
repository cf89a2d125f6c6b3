mod display_state;
mod playback;
mod popup;
mod ui_state;
mod volume;

pub use display_state::DisplayState;
pub use playback::PlaybackCoordinator;
pub use popup::{PopupState, PopupType};
pub use ui_state::UiState;
pub use volume::{VolumeControl, VolumeTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    QUIT,
}
