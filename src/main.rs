use anyhow::Result;
use std::{fs, sync::Arc};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    unsafe { std::env::set_var("RUST_BACKTRACE", "1") };

    init_logging()?;

    let config = ostinato::Config::load();
    ostinato::app_core::Ostinato::new(config)?.run()?;
    Ok(())
}

// Stdout belongs to the terminal UI, so diagnostics go to a log
// file under the platform data dir. `RUST_LOG` tunes the filter.
fn init_logging() -> Result<()> {
    let log_dir = dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("ostinato");
    fs::create_dir_all(&log_dir)?;

    let log_file = fs::File::create(log_dir.join("ostinato.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
