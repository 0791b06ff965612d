//! Subcommand implementations.

pub mod clear;
pub mod export;
pub mod play;
pub mod record;
pub mod show;
