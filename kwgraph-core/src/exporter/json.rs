//! JSON format exporter.
//!
//! Output is UTF-8 with non-ASCII characters written literally, never as
//! `\u` escapes. Files are replaced atomically: the document is written to a
//! sibling temp file and renamed into place, so a failed run leaves any
//! previous output untouched.

use super::ExportConfig;
use crate::error::Result;
use crate::types::{Graph, GraphStats};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

/// Serialize `graph` to a JSON string.
pub fn export(graph: &Graph, config: &ExportConfig) -> Result<String> {
    let bytes = if config.indent == 0 {
        serde_json::to_vec(graph)?
    } else {
        let indent = vec![b' '; config.indent];
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        graph.serialize(&mut ser)?;
        buf
    };
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Serialize `graph` and write it to `path`.
///
/// Applies link deduplication first when the config asks for it. Returns
/// the counts of what was actually written.
pub fn write(graph: &Graph, path: &Path, config: &ExportConfig) -> Result<GraphStats> {
    let (content, stats) = if config.dedupe_links {
        let mut deduped = graph.clone();
        let removed = deduped.dedupe_links();
        tracing::info!(removed, "dropped duplicate links");
        (export(&deduped, config)?, deduped.stats())
    } else {
        (export(graph, config)?, graph.stats())
    };

    let tmp = temp_path(path);
    fs::write(&tmp, content.as_bytes())?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote graph");
    Ok(stats)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
