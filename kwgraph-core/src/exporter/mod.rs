//! Graph exporters.

pub mod json;

/// Options for writing the exported document.
#[derive(Clone, Debug)]
pub struct ExportConfig {
    /// Spaces per indentation level; `0` writes compact JSON.
    pub indent: usize,
    /// Collapse links that repeat an unordered endpoint pair.
    pub dedupe_links: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            dedupe_links: false,
        }
    }
}
