//! CLI configuration
//!
//! Loaded from a TOML file (explicit `--config` path, else
//! `~/.config/forja/config.toml`, else built-in defaults). Every field
//! has a serde default so a partial file works. Enrichment fields map
//! onto the engine's [`EnrichConfig`].

use anyhow::{bail, Context, Result};
use forja_core::Language;
use forja_enrichment::EnrichConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForjaConfig {
    /// Generation settings
    #[serde(default)]
    pub generate: GenerateSection,
    /// Enrichment settings
    #[serde(default)]
    pub enrich: EnrichSection,
}

/// Settings for `forja generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSection {
    /// Path to the CSV export
    pub csv_path: Option<PathBuf>,

    /// Folder to write notes into
    #[serde(default = "default_notes_dir")]
    pub output_dir: PathBuf,
}

/// Settings for `forja enrich`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichSection {
    /// Notes folder to enrich
    #[serde(default = "default_notes_dir")]
    pub notes_dir: PathBuf,

    /// Minimum word length to consider
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,

    /// Minimum corpus-wide occurrences for selection
    #[serde(default = "default_min_frequency")]
    pub min_frequency: u64,

    /// Maximum number of terms to link
    #[serde(default = "default_max_terms")]
    pub max_terms: usize,

    /// Bundled stopword languages ("es", "en")
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Extra stopwords merged into the bundled sets
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

fn default_notes_dir() -> PathBuf {
    PathBuf::from("obsidian_ideas")
}

fn default_min_word_length() -> usize {
    forja_enrichment::config::DEFAULT_MIN_WORD_LENGTH
}

fn default_min_frequency() -> u64 {
    forja_enrichment::config::DEFAULT_MIN_FREQUENCY
}

fn default_max_terms() -> usize {
    forja_enrichment::config::DEFAULT_MAX_TERMS
}

fn default_languages() -> Vec<String> {
    vec!["es".to_string(), "en".to_string()]
}

impl Default for GenerateSection {
    fn default() -> Self {
        Self {
            csv_path: None,
            output_dir: default_notes_dir(),
        }
    }
}

impl Default for EnrichSection {
    fn default() -> Self {
        Self {
            notes_dir: default_notes_dir(),
            min_word_length: default_min_word_length(),
            min_frequency: default_min_frequency(),
            max_terms: default_max_terms(),
            languages: default_languages(),
            extra_stopwords: Vec::new(),
        }
    }
}

impl ForjaConfig {
    /// Load configuration. An explicit path must exist; the default path
    /// is optional and missing means built-in defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p, true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.is_file() {
            if required {
                bail!("config file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Build the engine configuration from the enrich section
    pub fn enrich_config(&self) -> Result<EnrichConfig> {
        let mut languages = Vec::new();
        for lang in &self.enrich.languages {
            languages.push(parse_language(lang)?);
        }
        Ok(EnrichConfig {
            min_word_length: self.enrich.min_word_length,
            min_frequency: self.enrich.min_frequency,
            max_terms: self.enrich.max_terms,
            languages,
            extra_stopwords: self.enrich.extra_stopwords.clone(),
        })
    }
}

fn parse_language(s: &str) -> Result<Language> {
    match s.to_lowercase().as_str() {
        "es" | "spanish" | "español" => Ok(Language::Spanish),
        "en" | "english" => Ok(Language::English),
        other => bail!("unsupported stopword language: {other}"),
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("forja").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_without_a_config_file() {
        let config = ForjaConfig::default();
        assert_eq!(config.enrich.min_word_length, 4);
        assert_eq!(config.enrich.max_terms, 20);
        assert_eq!(config.generate.output_dir, PathBuf::from("obsidian_ideas"));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[enrich]\nmin_frequency = 5").unwrap();
        let config = ForjaConfig::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.enrich.min_frequency, 5);
        assert_eq!(config.enrich.min_word_length, 4);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let result = ForjaConfig::load(Some(PathBuf::from("/nonexistent/forja.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn language_codes_map_to_bundled_sets() {
        let config = ForjaConfig::default();
        let engine = config.enrich_config().unwrap();
        assert_eq!(engine.languages, vec![Language::Spanish, Language::English]);
    }

    #[test]
    fn unknown_language_is_rejected() {
        let config = ForjaConfig {
            enrich: EnrichSection {
                languages: vec!["klingon".to_string()],
                ..EnrichSection::default()
            },
            ..ForjaConfig::default()
        };
        assert!(config.enrich_config().is_err());
    }
}
