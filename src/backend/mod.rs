//! Resizing backends and the fallback chain.
//!
//! The [`IconBackend`] trait defines the two capabilities the rest of the
//! codebase relies on: an availability probe and a whole-run conversion.
//! Three implementations exist, listed here in chain priority order:
//!
//! | Backend | Module | Available when |
//! |---|---|---|
//! | `raster` | [`raster`] | compiled in (default `raster` feature) |
//! | `sips` | [`sips`] | host is macOS and `sips` is on PATH |
//! | `imagemagick` | [`magick`] | `magick` or `convert` answers `--version` |
//!
//! Availability is probed fresh on every run — nothing is cached across
//! invocations. The two command-based backends share the process-spawn
//! helpers in [`exec`].

pub mod exec;
pub mod magick;
#[cfg(feature = "raster")]
pub mod raster;
pub mod sips;

use crate::naming::sized_output_path;
use std::path::{Path, PathBuf};

/// Everything a backend needs to perform one run: the source icon and the
/// pre-derived output path for every target size.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertPlan {
    pub source: PathBuf,
    pub outputs: Vec<PlannedOutput>,
}

/// One target size together with its derived output path.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedOutput {
    pub size: u32,
    pub path: PathBuf,
}

impl ConvertPlan {
    /// Build a plan from a source path and an ordered size list.
    pub fn new(source: &Path, sizes: &[u32]) -> Self {
        Self {
            source: source.to_path_buf(),
            outputs: sizes
                .iter()
                .map(|&size| PlannedOutput {
                    size,
                    path: sized_output_path(source, size),
                })
                .collect(),
        }
    }
}

/// Progress events emitted during a conversion run.
///
/// Backends and the chain walker emit these through a caller-supplied sink;
/// the CLI renders them with [`crate::output::format_convert_event`].
/// Keeping rendering out of the backends makes every run fully observable
/// in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertEvent {
    /// A backend's availability probe failed; the chain moves on.
    /// Informational, not an error.
    BackendUnavailable { backend: &'static str },
    /// This backend will handle the entire run.
    BackendSelected { backend: &'static str },
    /// One sized output was written.
    Created { size: u32, path: PathBuf },
    /// One size failed inside the chosen backend. Remaining sizes are still
    /// attempted; the run is reported failed overall.
    SizeFailed { size: u32, reason: String },
}

/// Per-size outcome tally for one backend run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackendRun {
    /// Sizes written successfully, in attempt order.
    pub produced: Vec<u32>,
    /// Sizes that failed, in attempt order.
    pub failed: Vec<u32>,
}

impl BackendRun {
    pub fn record_produced(&mut self, size: u32) {
        self.produced.push(size);
    }

    pub fn record_failed(&mut self, size: u32) {
        self.failed.push(size);
    }

    /// True when every planned size was produced.
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Trait for icon resizing backends.
///
/// `convert` must attempt every size in the plan even after a failure,
/// catch all of its own errors, and report them only through the returned
/// [`BackendRun`] and the event sink — nothing propagates past the backend
/// boundary. Each already-written output is left on disk regardless of what
/// happens to later sizes.
pub trait IconBackend {
    /// Stable backend name used in CLI output and `--backend` selection.
    fn name(&self) -> &'static str;

    /// Probe whether this backend can run on the current host.
    fn is_available(&self) -> bool;

    /// One line of context for the `doctor` command (tool path, version).
    fn detail(&self) -> Option<String> {
        None
    }

    /// Resize the source to every planned size.
    fn convert(&self, plan: &ConvertPlan, events: &mut dyn FnMut(ConvertEvent)) -> BackendRun;
}

/// The fixed-priority fallback chain.
pub fn default_chain() -> Vec<Box<dyn IconBackend>> {
    let mut chain: Vec<Box<dyn IconBackend>> = Vec::new();
    #[cfg(feature = "raster")]
    chain.push(Box::new(raster::RasterBackend::new()));
    chain.push(Box::new(sips::SipsBackend::new()));
    chain.push(Box::new(magick::MagickBackend::new()));
    chain
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Shared view into a [`MockBackend`]'s recorded activity. Cloned out
    /// before the mock is boxed into a chain, so tests can still read the
    /// counters afterwards.
    #[derive(Clone, Default)]
    pub struct MockHandle {
        pub probes: Arc<Mutex<u32>>,
        pub converts: Arc<Mutex<Vec<ConvertPlan>>>,
    }

    impl MockHandle {
        pub fn probe_count(&self) -> u32 {
            *self.probes.lock().unwrap()
        }

        pub fn convert_count(&self) -> usize {
            self.converts.lock().unwrap().len()
        }
    }

    /// Mock backend that records probes and conversions without touching
    /// the filesystem.
    pub struct MockBackend {
        pub name: &'static str,
        pub available: bool,
        /// Sizes this mock should report as failed.
        pub failing_sizes: Vec<u32>,
        pub handle: MockHandle,
    }

    impl MockBackend {
        pub fn available(name: &'static str) -> Self {
            Self {
                name,
                available: true,
                failing_sizes: Vec::new(),
                handle: MockHandle::default(),
            }
        }

        pub fn unavailable(name: &'static str) -> Self {
            Self {
                available: false,
                ..Self::available(name)
            }
        }

        pub fn failing(name: &'static str, failing_sizes: Vec<u32>) -> Self {
            Self {
                failing_sizes,
                ..Self::available(name)
            }
        }

        pub fn handle(&self) -> MockHandle {
            self.handle.clone()
        }
    }

    impl IconBackend for MockBackend {
        fn name(&self) -> &'static str {
            self.name
        }

        fn is_available(&self) -> bool {
            *self.handle.probes.lock().unwrap() += 1;
            self.available
        }

        fn convert(&self, plan: &ConvertPlan, events: &mut dyn FnMut(ConvertEvent)) -> BackendRun {
            self.handle.converts.lock().unwrap().push(plan.clone());
            let mut run = BackendRun::default();
            for output in &plan.outputs {
                if self.failing_sizes.contains(&output.size) {
                    run.record_failed(output.size);
                    events(ConvertEvent::SizeFailed {
                        size: output.size,
                        reason: "mock failure".into(),
                    });
                } else {
                    run.record_produced(output.size);
                    events(ConvertEvent::Created {
                        size: output.size,
                        path: output.path.clone(),
                    });
                }
            }
            run
        }
    }

    #[test]
    fn plan_derives_one_output_per_size() {
        let plan = ConvertPlan::new(Path::new("src/icon.png"), &[16, 48, 128]);
        assert_eq!(plan.outputs.len(), 3);
        assert_eq!(plan.outputs[0].size, 16);
        assert_eq!(plan.outputs[0].path, PathBuf::from("src/icon-16.png"));
        assert_eq!(plan.outputs[2].path, PathBuf::from("src/icon-128.png"));
    }

    #[test]
    fn plan_preserves_size_order() {
        let plan = ConvertPlan::new(Path::new("icon.png"), &[128, 16]);
        let sizes: Vec<u32> = plan.outputs.iter().map(|o| o.size).collect();
        assert_eq!(sizes, vec![128, 16]);
    }

    #[test]
    fn backend_run_success_flag() {
        let mut run = BackendRun::default();
        run.record_produced(16);
        assert!(run.all_succeeded());
        run.record_failed(48);
        assert!(!run.all_succeeded());
    }

    #[test]
    fn default_chain_priority_order() {
        let chain = default_chain();
        let names: Vec<&str> = chain.iter().map(|b| b.name()).collect();
        #[cfg(feature = "raster")]
        assert_eq!(names, vec!["raster", "sips", "imagemagick"]);
        #[cfg(not(feature = "raster"))]
        assert_eq!(names, vec!["sips", "imagemagick"]);
    }

    #[test]
    fn mock_continues_past_failing_size() {
        let backend = MockBackend::failing("mock", vec![48]);
        let plan = ConvertPlan::new(Path::new("icon.png"), &[16, 48, 128]);
        let mut events = Vec::new();
        let run = backend.convert(&plan, &mut |e| events.push(e));

        assert_eq!(run.produced, vec![16, 128]);
        assert_eq!(run.failed, vec![48]);
        assert_eq!(events.len(), 3);
    }
}
