//! Subcommand implementations

pub mod show;
