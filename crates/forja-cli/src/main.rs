use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use forja_cli::{
    cli::{Cli, Commands, LogLevel},
    commands,
    config::ForjaConfig,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI flag sets the default level; RUST_LOG can still override it
    let level: LevelFilter = match (cli.log_level, cli.verbose) {
        (Some(level), _) => level.into(),
        (None, true) => LogLevel::Debug.into(),
        (None, false) => LevelFilter::WARN,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let config = ForjaConfig::load(cli.config)?;

    match cli.command {
        Commands::Generate { csv, output } => commands::generate::execute(config, csv, output)?,
        Commands::Enrich {
            notes_dir,
            min_word_length,
            min_frequency,
            top,
        } => commands::enrich::execute(config, notes_dir, min_word_length, min_frequency, top)?,
    }

    Ok(())
}
