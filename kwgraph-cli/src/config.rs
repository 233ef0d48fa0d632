//! kwgraph configuration loading from `.kwgraphrc.toml`.
//!
//! Configuration is optional - without a config file kwgraph reads
//! `test1.xlsx` and writes `data.json` using the standard column headers.
//!
//! # Example Configuration
//!
//! ```toml
//! [input]
//! path = "keywords.xlsx"
//! sheet = "Hoja1"
//!
//! [columns]
//! primary = "Categoría Principal"
//! related = "Categorías Relacionadas"
//! keywords = "Palabras Clave"
//! topic = "Tema"
//! topic_text = "Texto del Tema"
//!
//! [output]
//! path = "web/data.json"
//! indent = 4
//! dedupe_links = false
//! ```

use crate::constants::{CONFIG_FILE, DEFAULT_INDENT, DEFAULT_INPUT, DEFAULT_OUTPUT};
use anyhow::{Context, Result};
use kwgraph_core::exporter::ExportConfig;
use kwgraph_core::reader::ColumnNames;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration structure loaded from `.kwgraphrc.toml`.
///
/// All sections are optional and fall back to defaults.
#[derive(Debug, Deserialize, Default)]
pub struct KwgraphConfig {
    /// Where to read the table from.
    #[serde(default)]
    pub input: InputConfig,

    /// Header names of the input columns.
    #[serde(default)]
    pub columns: ColumnNames,

    /// Where and how to write the graph.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct InputConfig {
    /// Workbook path, relative to the working directory.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Sheet to read. Defaults to the first sheet.
    #[serde(default)]
    pub sheet: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output file path.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Spaces per JSON indentation level (0 for compact output).
    #[serde(default)]
    pub indent: Option<usize>,

    /// Drop links that repeat an unordered `{source, target}` pair.
    #[serde(default)]
    pub dedupe_links: bool,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub sheet: Option<String>,
    pub indent: Option<usize>,
    pub dedupe_links: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub sheet: Option<String>,
    pub columns: ColumnNames,
    pub export: ExportConfig,
}

impl KwgraphConfig {
    /// Load `.kwgraphrc.toml` from the given directory.
    ///
    /// A missing file yields defaults. Read and parse errors are logged as
    /// warnings and also yield defaults.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => {
                        tracing::debug!(path = %config_path.display(), "loaded config");
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Load an explicitly requested config file. Unlike [`Self::load`], any
    /// failure here is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Merge with command-line overrides: CLI > config > built-in defaults.
    pub fn resolve(self, overrides: Overrides) -> Settings {
        Settings {
            input: overrides
                .input
                .or(self.input.path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: overrides
                .output
                .or(self.output.path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            sheet: overrides.sheet.or(self.input.sheet),
            columns: self.columns,
            export: ExportConfig {
                indent: overrides
                    .indent
                    .or(self.output.indent)
                    .unwrap_or(DEFAULT_INDENT),
                dedupe_links: overrides.dedupe_links || self.output.dedupe_links,
            },
        }
    }
}
