//! Subcommand implementations

pub mod enrich;
pub mod generate;
