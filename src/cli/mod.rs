//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, ImageArgs};
pub use output::{format_note_detail, format_note_list};
