pub mod app;
pub mod commands;
pub mod interactive;

pub use app::App;
pub use commands::Args;
