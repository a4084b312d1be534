use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(name = "forja")]
#[command(about = "forja - turn CSV idea exports into a linked Obsidian vault")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/forja/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a CSV idea export into one markdown note per row
    Generate {
        /// Path to the CSV export (overrides config file)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Folder to write notes into (overrides config file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Add wikilinks for the corpus's most frequent terms, in place.
    /// This rewrites the notes folder destructively; keep it under
    /// version control or regenerate it from the export.
    Enrich {
        /// Notes folder to enrich (overrides config file)
        notes_dir: Option<PathBuf>,

        /// Minimum word length to consider (overrides config file)
        #[arg(long)]
        min_word_length: Option<usize>,

        /// Minimum corpus-wide occurrences for selection (overrides config file)
        #[arg(long)]
        min_frequency: Option<u64>,

        /// Maximum number of terms to link (overrides config file)
        #[arg(long)]
        top: Option<usize>,
    },
}
