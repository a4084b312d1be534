//! `forja generate` - CSV export to markdown notes

use crate::config::ForjaConfig;
use crate::output;
use anyhow::{bail, Context, Result};
use forja_generator::{ColumnSchema, GenerateConfig, Generator};
use std::path::PathBuf;
use tracing::info;

pub fn execute(
    config: ForjaConfig,
    csv: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let csv_path = match csv.or(config.generate.csv_path) {
        Some(path) => path,
        None => bail!("no CSV export given; pass --csv or set generate.csv_path in the config"),
    };
    let output_dir = output_dir.unwrap_or(config.generate.output_dir);
    info!(
        csv = %csv_path.display(),
        out = %output_dir.display(),
        "starting generation"
    );

    output::header("Generating notes");
    let stats = Generator::new(GenerateConfig {
        csv_path: csv_path.clone(),
        output_dir: output_dir.clone(),
        schema: ColumnSchema::default(),
    })
    .run()
    .with_context(|| format!("generation from {} failed", csv_path.display()))?;

    print!("{}", stats.render_summary());
    output::success(&format!(
        "{} notes written to {}",
        stats.notes_written,
        output_dir.display()
    ));
    Ok(())
}
