//! # repostatslib
//!
//! A single-pass directory profiler: walk a file tree once and come back with
//! file counts, line totals, and per-extension breakdowns, partitioned by an
//! inclusion/exclusion filter over file extensions.
//!
//! ## Overview
//!
//! Every metric is a [`Collector`] — a stateful accumulator fed one file at a
//! time through `consume`. A [`Dispatch`] owns three collector groups for the
//! duration of one traversal: a global group that sees every file, and
//! matched/excluded groups selected per file by a pure classifier
//! ([`ExtFilter::classify`]). Collectors never interact, so results are
//! independent of dispatch order.
//!
//! - **File counts**: [`CountCollector`], per extension plus a grand total
//! - **Line counts**: [`LineCollector`], per-extension totals and single-file
//!   maxima; the overall maximum is the sum of per-extension maxima
//! - **Extension sets**: [`ExtCollector`], the sorted set of suffixes seen
//!
//! Unreadable files never abort a run: the line counter reports them through
//! a diagnostics channel ([`SkippedFile`]) and the pass continues.
//!
//! ## Example
//!
//! ```rust
//! use repostatslib::{profile, ExtFilter};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.py"), "x\ny\nz\n").unwrap();
//! fs::write(dir.path().join("notes.md"), "hello\n").unwrap();
//!
//! let filter = ExtFilter::new().exclude(".md");
//! let stats = profile(dir.path(), &filter).unwrap();
//!
//! assert_eq!(stats.files_total, 2);
//! assert_eq!(stats.files_matched, 1);
//! assert_eq!(stats.lines_total, 3);
//! assert_eq!(stats.excluded_extensions, vec![".md".to_string()]);
//! ```

pub mod classify;
pub mod collect;
pub mod error;
pub mod ext;
pub mod profile;
pub mod walk;

pub use classify::{ExtFilter, Partition};
pub use collect::{Collector, CountCollector, ExtCollector, LineCollector};
pub use error::RepoStatsError;
pub use ext::ext_of;
pub use profile::{profile, Dispatch, ExtRow, RepoProfile, SkippedFile};
pub use walk::walk_files;

/// Result type for repostatslib operations
pub type Result<T> = std::result::Result<T, RepoStatsError>;
