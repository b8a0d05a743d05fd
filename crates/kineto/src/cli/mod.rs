//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the kineto binary.

mod api;
mod commands;
mod generate;
mod probe;

pub use api::handle_api_command;
pub use commands::{Cli, Commands, RequestArgs};
pub use generate::handle_generate_command;
pub use probe::handle_probe_command;
