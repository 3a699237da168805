//! Output path derivation for sized icon copies.
//!
//! Every output lives next to its source, named `<stem>-<size>.<ext>`:
//! `src/icon.png` at size 48 becomes `src/icon-48.png`. The extension is
//! carried over unchanged so the output format always matches the source.

use std::path::{Path, PathBuf};

/// Derive the output path for one target size.
///
/// The path is deterministic: same source + same size → same output, so
/// repeated runs overwrite their own prior artifacts.
pub fn sized_output_path(source: &Path, size: u32) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("icon");
    let file_name = match source.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}-{size}.{ext}"),
        None => format!("{stem}-{size}"),
    };
    source.with_file_name(file_name)
}
