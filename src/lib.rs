//! # iconize
//!
//! Converts one source icon image into several fixed-size square raster
//! copies (`icon.png` → `icon-16.png`, `icon-48.png`, `icon-128.png`).
//!
//! Three resizing backends are tried in a fixed priority order; the first
//! one available on the host handles the entire run:
//!
//! ```text
//! 1. raster       in-process, `image` crate (Lanczos3) — default feature
//! 2. sips         macOS built-in image tool, one spawn per size
//! 3. imagemagick  `magick` (v7) or `convert` (v6), one spawn per size
//! ```
//!
//! Backends after the chosen one are never probed or invoked. If none is
//! available the CLI prints installation guidance instead of a stack trace.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`backend`] | The [`IconBackend`](backend::IconBackend) trait, the fallback chain, and the three implementations |
//! | [`convert`] | Top-level operation: source check → chain walk → report |
//! | [`config`] | `iconize.toml` loading, validation, stock config generation |
//! | [`naming`] | Size-suffixed output path derivation |
//! | [`doctor`] | Per-backend availability report for the `doctor` command |
//! | [`output`] | CLI output formatting — progress lines, banners, remediation |
//!
//! # Design Decisions
//!
//! ## One Backend Per Run
//!
//! Selection is by availability only. Once a backend is chosen, its result
//! is final: a size that fails inside it is logged and marks the run failed,
//! but it does not trigger fallthrough to a later backend and the sizes that
//! already succeeded stay on disk. This keeps every output of a run
//! attributable to a single tool.
//!
//! ## Feature-Gated In-Process Backend
//!
//! The `raster` backend is compiled in behind the default `raster` cargo
//! feature rather than probed at runtime — in Rust, "can the image library
//! be loaded" is a build-time question. A build without it degrades to the
//! external tool backends.
//!
//! ## Single-Threaded, Synchronous
//!
//! Every backend call blocks until complete and every spawned process is
//! reaped before the next size is attempted. An interactive utility run by
//! a human over three tiny files gains nothing from parallelism.

pub mod backend;
pub mod config;
pub mod convert;
pub mod doctor;
pub mod naming;
pub mod output;
