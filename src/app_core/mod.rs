mod app;
mod player;
mod select;

pub use app::Ostinato;
