//! ImageMagick backend.
//!
//! ImageMagick 7 ships a single `magick` binary; 6.x installs `convert`.
//! The probe tries the new-style name first and requires a successful
//! `--version` run — mere presence on PATH is not enough, since `convert`
//! collides with an unrelated Windows filesystem utility.
//!
//! Each size is one invocation with resize plus normalization flags:
//! `-colorspace sRGB` and `-depth 8` keep outputs consistent across source
//! color profiles and bit depths.

use super::exec::{probe_version, run_tool};
use super::{BackendRun, ConvertEvent, ConvertPlan, IconBackend};
use std::ffi::OsString;
use std::path::Path;

const NEW_STYLE: &str = "magick";
const OLD_STYLE: &str = "convert";

/// Backend wrapping the ImageMagick command-line tool family.
pub struct MagickBackend;

impl MagickBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MagickBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve which command name to use, preferring `magick`.
///
/// Probed fresh each time so availability always reflects the current PATH.
fn resolve_command() -> Option<&'static str> {
    [NEW_STYLE, OLD_STYLE]
        .into_iter()
        .find(|cmd| probe_version(cmd, "--version").is_some())
}

/// Argument vector for one sized invocation.
fn magick_args(size: u32, source: &Path, dest: &Path) -> Vec<OsString> {
    vec![
        source.as_os_str().to_os_string(),
        OsString::from("-resize"),
        OsString::from(format!("{size}x{size}")),
        OsString::from("-colorspace"),
        OsString::from("sRGB"),
        OsString::from("-depth"),
        OsString::from("8"),
        dest.as_os_str().to_os_string(),
    ]
}

impl IconBackend for MagickBackend {
    fn name(&self) -> &'static str {
        "imagemagick"
    }

    fn is_available(&self) -> bool {
        resolve_command().is_some()
    }

    fn detail(&self) -> Option<String> {
        let cmd = resolve_command()?;
        let version = probe_version(cmd, "--version")?;
        Some(format!("{cmd}: {version}"))
    }

    fn convert(&self, plan: &ConvertPlan, events: &mut dyn FnMut(ConvertEvent)) -> BackendRun {
        let mut run = BackendRun::default();
        let Some(cmd) = resolve_command() else {
            // PATH changed between probe and run. Fail every size; the
            // run-level report stays attributable to this backend.
            for output in &plan.outputs {
                run.record_failed(output.size);
                events(ConvertEvent::SizeFailed {
                    size: output.size,
                    reason: "ImageMagick command no longer on PATH".into(),
                });
            }
            return run;
        };

        for output in &plan.outputs {
            let args = magick_args(output.size, &plan.source, &output.path);
            match run_tool(cmd, &args) {
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
