//! Run summary formatting.
//!
//! Table output is a single colored line for humans; JSON output is for
//! scripts that chain kwgraph with other tools.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use kwgraph_core::GraphStats;
use serde::Serialize;

/// Output format for the run summary.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary line (default)
    #[default]
    Table,
    /// JSON object for machine consumption
    Json,
}

/// What a run produced.
#[derive(Debug, Serialize)]
pub struct BuildSummary {
    pub input: String,
    pub output: String,
    pub rows: usize,
    pub nodes: usize,
    pub parents: usize,
    pub children: usize,
    pub links: usize,
    pub links_removed: usize,
}

impl BuildSummary {
    pub fn new(input: String, output: String, rows: usize, stats: GraphStats) -> Self {
        Self {
            input,
            output,
            rows,
            nodes: stats.nodes,
            parents: stats.parents,
            children: stats.children,
            links: stats.links,
            links_removed: 0,
        }
    }

    pub fn to_table(&self) -> String {
        let mut line = format!(
            "{} Exported {} nodes ({} parents, {} children), {} links to {}",
            "SUCCESS:".green().bold(),
            self.nodes,
            self.parents,
            self.children,
            self.links,
            self.output.cyan()
        );
        if self.links_removed > 0 {
            line.push_str(&format!(
                " {}",
                format!("({} duplicate links dropped)", self.links_removed).dimmed()
            ));
        }
        line
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.to_table()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}
