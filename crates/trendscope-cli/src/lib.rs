mod args;
mod commands;
mod handlers;
mod output;
pub mod types;
mod ui;

pub use args::{Cli, Commands};
pub use commands::run;
