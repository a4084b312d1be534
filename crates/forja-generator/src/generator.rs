//! CSV-to-notes generation run
//!
//! Reads the export once, builds one note per row, and writes each note
//! into the output folder as `{id}-{slug}.md`. Row-level problems (a CSV
//! record that fails to parse) are logged and skipped; the run only fails
//! on problems with the export file or the output folder themselves.

use crate::error::{GeneratorError, GeneratorResult};
use crate::note::{build_note, extract_links, slugify, split_tags};
use crate::schema::ColumnSchema;
use crate::stats::GenerationStats;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Configuration for one generation run
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Path to the CSV export
    pub csv_path: PathBuf,
    /// Folder to write notes into (created if missing)
    pub output_dir: PathBuf,
    /// Column-to-field mapping
    pub schema: ColumnSchema,
}

/// One-shot note generator
pub struct Generator {
    config: GenerateConfig,
}

impl Generator {
    /// Create a generator with an explicit configuration
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    /// Convert every row of the export into a note file
    pub fn run(&self) -> GeneratorResult<GenerationStats> {
        if !self.config.csv_path.is_file() {
            return Err(GeneratorError::MissingExport(self.config.csv_path.clone()));
        }
        fs::create_dir_all(&self.config.output_dir)?;

        let mut reader = csv::Reader::from_path(&self.config.csv_path)?;
        let headers = reader.headers()?.clone();
        info!(export = %self.config.csv_path.display(), "reading CSV export");

        let mut stats = GenerationStats::default();
        for (idx, result) in reader.records().enumerate() {
            let row_number = idx + 1;
            let record = match result {
                Ok(record) => record,
                Err(err) => {
                    warn!(row = row_number, error = %err, "skipping unreadable row");
                    continue;
                }
            };

            let fields = self.config.schema.extract(&headers, &record);
            let id = format!("idea-{row_number:03}");
            let title = fields
                .idea
                .clone()
                .unwrap_or_else(|| format!("Idea {row_number}"));
            let content = build_note(&id, row_number, &fields)?;

            let filename = format!("{id}-{}.md", slugify(&title));
            let path = self.config.output_dir.join(&filename);
            fs::write(&path, &content)?;
            debug!(file = %path.display(), "wrote note");

            let tags = fields.tags.as_deref().map(split_tags).unwrap_or_default();
            let links = fields
                .conexiones
                .as_deref()
                .map(extract_links)
                .unwrap_or_default();
            stats.record(
                &tags,
                &links,
                fields.estado.as_deref(),
                fields.tipo.as_deref(),
            );
        }

        info!(notes = stats.notes_written, "generation complete");
        Ok(stats)
    }
}
