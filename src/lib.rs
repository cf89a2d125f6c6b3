use std::time::Duration;

pub mod app_core;
pub mod config;
pub mod domain;
pub mod key_handler;
pub mod player;
pub mod remote;
pub mod tui;
pub mod ui_state;

pub use config::Config;
pub use remote::RemoteClient;

// ~30fps
pub const REFRESH_RATE: Duration = Duration::from_millis(33);

/// Clock-style `MM:SS` timestamp for the transport timers.
/// Both fields are zero-padded and minutes run past 59 rather
/// than rolling into hours. An unknown duration reads `00:00`.
pub fn format_timestamp(duration: Option<Duration>) -> String {
    let total = duration.map_or(0, |d| d.as_secs());
    format!("{:02}:{:02}", total / 60, total % 60)
}

pub fn truncate_at_last_space(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }

    let byte_limit = s
        .char_indices()
        .map(|(i, _)| i)
        .nth(limit)
        .unwrap_or(s.len());

    match s[..byte_limit].rfind(' ') {
        Some(last_space) => {
            let mut truncated = s[..last_space].to_string();
            truncated.push('…');
            truncated
        }
        None => {
            let char_boundary = s[..byte_limit]
                .char_indices()
                .map(|(i, _)| i)
                .last()
                .unwrap_or(0);

            let mut truncated = s[..char_boundary].to_string();
            truncated.push('…');
            truncated
        }
    }
}

pub fn overwrite_line(message: &str) {
    use ratatui::crossterm::{
        cursor::MoveToColumn,
        style::Print,
        terminal::{Clear, ClearType},
        ExecutableCommand,
    };
    use std::io::Write;

    let mut stdout = std::io::stdout();
    let _ = stdout
        .execute(MoveToColumn(0))
        .and_then(|s| s.execute(Clear(ClearType::CurrentLine)))
        .and_then(|s| s.execute(Print(message)));
    let _ = stdout.flush();
}
