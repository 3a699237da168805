//! macOS `sips` backend.
//!
//! `sips` ships with every macOS install, so availability is simply "is the
//! host macOS" (plus a PATH check for unusual environments). One process is
//! spawned per size: `sips -z <height> <width> <source> --out <dest>`. A
//! non-zero exit fails that size; remaining sizes are still attempted.

use super::exec::run_tool;
use super::{BackendRun, ConvertEvent, ConvertPlan, IconBackend};
use std::ffi::OsString;
use std::path::Path;

const TOOL: &str = "sips";

/// Backend wrapping the macOS built-in image tool.
pub struct SipsBackend;

impl SipsBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SipsBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Argument vector for one sized invocation. `-z` takes height before width.
fn sips_args(size: u32, source: &Path, dest: &Path) -> Vec<OsString> {
    vec![
        OsString::from("-z"),
        OsString::from(size.to_string()),
        OsString::from(size.to_string()),
        source.as_os_str().to_os_string(),
        OsString::from("--out"),
        dest.as_os_str().to_os_string(),
    ]
}

impl IconBackend for SipsBackend {
    fn name(&self) -> &'static str {
        "sips"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos") && which::which(TOOL).is_ok()
    }

    fn detail(&self) -> Option<String> {
        if !cfg!(target_os = "macos") {
            return Some("macOS only".into());
        }
        which::which(TOOL).ok().map(|p| p.display().to_string())
    }

    fn convert(&self, plan: &ConvertPlan, events: &mut dyn FnMut(ConvertEvent)) -> BackendRun {
        let mut run = BackendRun::default();
        for output in &plan.outputs {
            let args = sips_args(output.size, &plan.source, &output.path);
            match run_tool(TOOL, &args) {
                Ok(()) => {
                    run.record_produced(output.size);
                    events(ConvertEvent::Created {
                        size: output.size,
                        path: output.path.clone(),
                    });
                }
                Err(e) => {
                    run.record_failed(output.size);
                    events(ConvertEvent::SizeFailed {
                        size: output.size,
                        reason: e.to_string(),
                    });
                }
            }
        }
        run
    }
}
