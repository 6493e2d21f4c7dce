//! Command-line interface module.

mod commands;
mod serve;

pub use commands::{Cli, Commands};
pub use serve::handle_serve_command;
