//! Top-level conversion: source check, chain walk, run report.
//!
//! Control flow is a straight-line fallback chain. The source is checked
//! once, before any backend probe; then backends are tried in order and the
//! first available one handles the whole run. An unavailable backend is an
//! informational event, not an error — only "no backend at all" is fatal.

use crate::backend::{BackendRun, ConvertEvent, ConvertPlan, IconBackend};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// Fatal, reported before any backend is probed.
    #[error("source icon not found at {}", .0.display())]
    MissingSource(PathBuf),
    /// Every backend's availability probe failed. The CLI turns this into
    /// remediation guidance rather than a bare error.
    #[error("no image resizing backend is available")]
    NoBackendAvailable,
}

/// Outcome of a run that got as far as choosing a backend.
#[derive(Debug)]
pub struct ConvertReport {
    /// Name of the backend that handled the run.
    pub backend: &'static str,
    pub run: BackendRun,
}

impl ConvertReport {
    /// True only when the chosen backend produced every planned size.
    pub fn is_success(&self) -> bool {
        self.run.all_succeeded()
    }
}

/// Execute the plan against the first available backend in `chain`.
///
/// Exactly one backend performs the run; backends after it are never probed.
/// A partial failure inside the chosen backend is reported, not retried and
/// not handed to a later backend, and outputs that were already written stay
/// on disk.
pub fn convert(
    plan: &ConvertPlan,
    chain: &[Box<dyn IconBackend>],
    events: &mut dyn FnMut(ConvertEvent),
) -> Result<ConvertReport, ConvertError> {
    if !plan.source.is_file() {
        return Err(ConvertError::MissingSource(plan.source.clone()));
    }

    for backend in chain {
        if !backend.is_available() {
            events(ConvertEvent::BackendUnavailable {
                backend: backend.name(),
            });
            continue;
        }
        events(ConvertEvent::BackendSelected {
            backend: backend.name(),
        });
        let run = backend.convert(plan, events);
        return Ok(ConvertReport {
            backend: backend.name(),
            run,
        });
    }

    Err(ConvertError::NoBackendAvailable)
}
