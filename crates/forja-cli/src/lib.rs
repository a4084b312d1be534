//! # Forja CLI
//!
//! The `forja` binary: `generate` turns a CSV idea export into a folder
//! of markdown notes, `enrich` post-processes that folder with automatic
//! `[[wikilinks]]`. Configuration comes from a TOML file with CLI flag
//! overrides; flags win.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
