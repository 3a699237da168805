//! Backend availability diagnosis for the `doctor` command.
//!
//! Walks the fallback chain without converting anything and records, per
//! backend, whether it would be chosen and whatever context it can offer
//! (tool path, version line). Purely informational — `doctor` never fails.

use crate::backend::IconBackend;

/// Availability snapshot for one backend.
#[derive(Debug, Clone)]
pub struct BackendStatus {
    pub name: &'static str,
    pub available: bool,
    /// Tool path, version line, or similar context.
    pub detail: Option<String>,
}

/// Probe every backend in chain order.
pub fn diagnose(chain: &[Box<dyn IconBackend>]) -> Vec<BackendStatus> {
    chain
        .iter()
        .map(|backend| BackendStatus {
            name: backend.name(),
            available: backend.is_available(),
            detail: backend.detail(),
        })
        .collect()
}
