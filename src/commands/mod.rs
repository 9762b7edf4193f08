//! Subcommand handlers for the vplay binary.

pub mod completions;
pub mod config;
pub mod play;
pub mod subs;
