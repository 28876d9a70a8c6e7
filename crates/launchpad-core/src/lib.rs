//! Launchpad Core - Shared library for the launchpad project starter
//!
//! This library provides everything behind the `launchpad` binary: directory
//! navigation, project creation from templates, optional post-create
//! scaffolding, project statistics, zip backups, and release checking with
//! in-place self-update.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions for traversal, statistics,
//!   archiving, template initializer commands, scaffolding emitters, and
//!   release checks. Everything here takes explicit paths and owns no
//!   terminal state, so it is testable headlessly.
//! - **Layer 2: CLI/TUI Interface** - Optional cliclack-based prompt flows
//!   (feature-gated) that wire the core operations into the interactive
//!   session.
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt flows
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use launchpad_core::{scan, templates::Template};
//!
//! let stats = scan::collect(std::path::Path::new("my-project"))?;
//! println!("{} files", stats.file_count);
//!
//! let template = Template::Rust;
//! template.prepare(std::path::Path::new("my-project"), "my-project")?.run()?;
//! ```

pub mod backup;
pub mod cancel;
pub mod error;
pub mod runtime;
pub mod scan;
pub mod setup;
pub mod templates;
pub mod update;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use cancel::CancelToken;
pub use error::{Error, Result};
pub use scan::{FileEntry, ProjectStats};
pub use setup::{SetupOption, SetupOutcome};
pub use templates::{InitCommand, ProjectKind, Template};
pub use update::{UpdateStatus, VersionInfo};

#[cfg(feature = "tui")]
pub use tui::run;
