mod buffer_line;
mod error;
mod progress;
mod track_table;

pub use buffer_line::BufferLine;
pub use error::ErrorMsg;
pub use progress::Progress;
pub use track_table::TrackTable;

use ratatui::style::Color;

const DUR_WIDTH: u16 = 5;
const PAUSE_ICON: &str = "󰏤";
const MUSIC_NOTE: &str = "♫";
const QUEUED: &str = "✚";
const DECORATOR: &str = " ♠ ";
const GOLD_FADED: Color = Color::Rgb(174, 148, 82);

const VOL_MUTED: &str = "󰝟";
const VOL_LOW: &str = "󰕿";
const VOL_MEDIUM: &str = "󰖀";
const VOL_HIGH: &str = "󰕾";
