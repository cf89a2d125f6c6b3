mod backend;
mod backend_rodio;
mod core;
mod handle;

use crate::domain::TrackInfo;
use std::{sync::Arc, time::Duration};

pub use backend::MediaBackend;
pub use backend_rodio::RodioBackend;
pub use handle::PlayerHandle;

pub enum PlayerCommand {
    Play(Arc<TrackInfo>),
    TogglePlayback,
    Seek(Duration),
    SetGain(f32),
}

/// Engine-side observations. The UI applies these in arrival order,
/// overwriting whatever it wrote optimistically in the meantime.
pub enum MediaEvent {
    MetadataLoaded(Option<Duration>),
    Position(Duration),
    StateChanged(bool),
    TrackEnded,
    Error(String),
}
