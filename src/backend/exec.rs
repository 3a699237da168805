//! Process-spawn helpers shared by the command-based backends.
//!
//! Both `sips` and ImageMagick reduce to the same shape: build an argument
//! vector, spawn the tool, wait for it, and treat a non-zero exit status as
//! failure. Centralizing that here keeps the backends down to argument
//! construction. Every spawn uses [`std::process::Command::output`], so the
//! child is always reaped before control returns — no handle outlives the
//! call, on any exit path.

use std::ffi::OsString;
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Run an external tool to completion, capturing its output.
///
/// Succeeds only on exit status zero. On failure the first stderr line is
/// carried in the error so per-size diagnostics stay one line long.
pub fn run_tool(tool: &str, args: &[OsString]) -> Result<(), ExecError> {
    let output = Command::new(tool)
        .args(args)
        .output()
        .map_err(|source| ExecError::Launch {
            tool: tool.to_string(),
            source,
        })?;

    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr)
        .lines()
        .next()
        .unwrap_or("")
        .to_string();
    Err(ExecError::Failed {
        tool: tool.to_string(),
        status: output.status,
        stderr,
    })
}

/// Probe a tool by asking for its version.
///
/// Returns the first stdout line when the tool exists and exits zero, `None`
/// otherwise. A missing command is an expected outcome here, not an error.
pub fn probe_version(tool: &str, version_arg: &str) -> Option<String> {
    let output = Command::new(tool).arg(version_arg).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|s| s.to_string())
}
