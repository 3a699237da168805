//! CLI output formatting.
//!
//! Each concern has a `format_*` function (returns `Vec<String>`) for
//! testability; printing is left to `main`. Format functions are pure — no
//! I/O, no side effects.
//!
//! # Output Format
//!
//! ## Convert
//!
//! ```text
//! ----------------------------------------------------------------------
//! Icon Resizing
//! ----------------------------------------------------------------------
//! Using raster backend for image resizing...
//! Created src/icon-16.png
//! Created src/icon-48.png
//! Created src/icon-128.png
//! ----------------------------------------------------------------------
//! Resizing completed. 3 icon files created.
//! ```
//!
//! ## Doctor
//!
//! ```text
//! raster       ok         image crate, statically linked
//! sips         not found  macOS only
//! imagemagick  ok         magick: Version: ImageMagick 7.1.1
//! ```
//!
//! On total failure a remediation block replaces the completion line,
//! naming an installation route for every backend.

use crate::backend::ConvertEvent;
use crate::convert::ConvertReport;
use crate::doctor::BackendStatus;

const SEPARATOR_WIDTH: usize = 70;

/// Banner separator line.
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Format a titled banner: separator, title, separator.
pub fn format_banner(title: &str) -> Vec<String> {
    vec![separator(), title.to_string(), separator()]
}

/// Format one progress event as output lines.
pub fn format_convert_event(event: &ConvertEvent) -> Vec<String> {
    match event {
        ConvertEvent::BackendUnavailable { backend } => {
            vec![format!("{backend} backend not available, trying next...")]
        }
        ConvertEvent::BackendSelected { backend } => {
            vec![format!("Using {backend} backend for image resizing...")]
        }
        ConvertEvent::Created { path, .. } => {
            vec![format!("Created {}", path.display())]
        }
        ConvertEvent::SizeFailed { size, reason } => {
            vec![format!("Error resizing to {size}px: {reason}")]
        }
    }
}

/// Format the end-of-run summary.
pub fn format_report(report: &ConvertReport) -> Vec<String> {
    if report.is_success() {
        return vec![format!(
            "Resizing completed. {} icon files created.",
            report.run.produced.len()
        )];
    }
    let failed: Vec<String> = report.run.failed.iter().map(|s| format!("{s}px")).collect();
    let mut lines = vec![format!(
        "{} backend failed for: {}",
        report.backend,
        failed.join(", ")
    )];
    if !report.run.produced.is_empty() {
        lines.push(format!(
            "{} outputs were written before the failure and were kept.",
            report.run.produced.len()
        ));
    }
    lines
}

/// Format the guidance block shown when no backend is available.
///
/// Must name an installation route for each of the three backends — this is
/// the user's way out, not a stack trace.
pub fn format_remediation() -> Vec<String> {
    vec![
        separator(),
        "Error: could not find any suitable image resizing backend.".into(),
        String::new(),
        "Suggestions:".into(),
        "1. Use the built-in raster backend: install iconize with default".into(),
        "   features enabled (`cargo install iconize`).".into(),
        String::new(),
        "2. On macOS the system `sips` tool is picked up automatically;".into(),
        "   nothing to install.".into(),
        String::new(),
        "3. Install ImageMagick (provides `magick` or `convert`):".into(),
        "   - macOS: brew install imagemagick".into(),
        "   - Linux: apt install imagemagick (or your distro's equivalent)".into(),
        "   - Windows: https://imagemagick.org/".into(),
        separator(),
    ]
}

/// Format the `doctor` availability table, one backend per line.
pub fn format_doctor(statuses: &[BackendStatus]) -> Vec<String> {
    statuses
        .iter()
        .map(|status| {
            let state = if status.available { "ok" } else { "not found" };
            match &status.detail {
                Some(detail) => format!("{:12} {:10} {}", status.name, state, detail),
                None => format!("{:12} {}", status.name, state),
            }
        })
        .collect()
}
