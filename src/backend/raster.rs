//! In-process resizing backend — `image` crate, statically linked.
//!
//! First in the fallback chain. The source is decoded once and resized to
//! each target with `resize_exact` and the Lanczos3 filter, so every output
//! is exactly `size`×`size` regardless of the source aspect ratio. Output
//! format is inferred from the output extension (PNG in practice).

use super::{BackendRun, ConvertEvent, ConvertPlan, IconBackend};
use image::ImageReader;
use image::imageops::FilterType;

/// Pure Rust backend using the `image` crate.
pub struct RasterBackend;

impl RasterBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RasterBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl IconBackend for RasterBackend {
    fn name(&self) -> &'static str {
        "raster"
    }

    /// Compiled in behind the `raster` feature, so once this code runs the
    /// backend is by definition present.
    fn is_available(&self) -> bool {
        true
    }

    fn detail(&self) -> Option<String> {
        Some("image crate, statically linked".into())
    }

    fn convert(&self, plan: &ConvertPlan, events: &mut dyn FnMut(ConvertEvent)) -> BackendRun {
        let mut run = BackendRun::default();

        let source = match ImageReader::open(&plan.source).map_err(|e| e.to_string()) {
            Ok(reader) => reader.decode().map_err(|e| e.to_string()),
            Err(e) => Err(e),
        };
        let source = match source {
            Ok(img) => img,
            Err(reason) => {
                // Undecodable source sinks every size in this backend.
                for output in &plan.outputs {
                    run.record_failed(output.size);
                    events(ConvertEvent::SizeFailed {
                        size: output.size,
                        reason: reason.clone(),
                    });
                }
                return run;
            }
        };

        for output in &plan.outputs {
            let resized = source.resize_exact(output.size, output.size, FilterType::Lanczos3);
            match resized.save(&output.path) {
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
