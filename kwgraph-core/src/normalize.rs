//! Text normalization: ASCII transliteration plus lowercasing.
//!
//! Every free-text cell goes through [`normalize`] before it is used as a
//! node name or topic, so "Música", "MUSICA" and "música" all key the same
//! node.

use deunicode::deunicode_with_tofu;

/// Transliterate to ASCII and lowercase.
///
/// Characters with no ASCII equivalent are dropped. Blank input comes back
/// unchanged, and the result is a fixed point: normalizing it again returns
/// the same string.
pub fn normalize(raw: &str) -> String {
    if raw.is_ascii() {
        return raw.to_ascii_lowercase();
    }
    deunicode_with_tofu(raw, "").to_ascii_lowercase()
}

/// Trim and normalize one comma-separated item.
pub fn normalize_item(item: &str) -> String {
    normalize(item.trim())
}
