//! `forja enrich` - wikilink enrichment over a notes folder

use crate::config::ForjaConfig;
use crate::output;
use anyhow::{Context, Result};
use forja_enrichment::EnrichmentPipeline;
use std::path::PathBuf;
use tracing::info;

pub fn execute(
    config: ForjaConfig,
    notes_dir: Option<PathBuf>,
    min_word_length: Option<usize>,
    min_frequency: Option<u64>,
    top: Option<usize>,
) -> Result<()> {
    let notes_dir = notes_dir.unwrap_or_else(|| config.enrich.notes_dir.clone());

    let mut engine_config = config.enrich_config()?;
    if let Some(len) = min_word_length {
        engine_config.min_word_length = len;
    }
    if let Some(freq) = min_frequency {
        engine_config.min_frequency = freq;
    }
    if let Some(cap) = top {
        engine_config.max_terms = cap;
    }
    info!(
        dir = %notes_dir.display(),
        min_word_length = engine_config.min_word_length,
        min_frequency = engine_config.min_frequency,
        max_terms = engine_config.max_terms,
        "starting enrichment"
    );

    output::header("Enriching notes");
    let report = EnrichmentPipeline::new(engine_config)
        .run(&notes_dir)
        .with_context(|| format!("enrichment of {} failed", notes_dir.display()))?;

    print!("{}", report.render_summary());
    if report.is_clean() {
        output::success(&format!(
            "{} notes processed, {} modified",
            report.processed(),
            report.modified
        ));
    } else {
        output::warning(&format!(
            "{} notes processed, {} skipped",
            report.processed(),
            report.failures.len()
        ));
    }
    Ok(())
}
