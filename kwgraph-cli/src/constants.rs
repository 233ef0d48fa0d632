//! Shared constants for the kwgraph CLI.

/// Workbook read when no input is given.
pub const DEFAULT_INPUT: &str = "test1.xlsx";

/// Graph document written when no output is given.
pub const DEFAULT_OUTPUT: &str = "data.json";

/// Optional per-directory configuration file.
pub const CONFIG_FILE: &str = ".kwgraphrc.toml";

/// Indentation of the written JSON, in spaces.
pub const DEFAULT_INDENT: usize = 4;
