//! Single-pass profiling: collector dispatch and the aggregate result.
//!
//! The [`Dispatch`] drives one traversal over a file sequence, feeding three
//! collector groups: `global` sees every file, and exactly one of `matched`
//! or `excluded` sees it afterwards, per the classifier verdict. Collectors
//! never interact, so the aggregate result is independent of dispatch order
//! within a group.
//!
//! [`profile`] is the packaged form of that pass: the standard collector set
//! wired up, the walk driven, and the finals read into a [`RepoProfile`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classify::{ExtFilter, Partition};
use crate::collect::{Collector, CountCollector, ExtCollector, LineCollector};
use crate::ext::ext_of;
use crate::walk::walk_files;
use crate::Result;

/// A file the line counter could not read.
///
/// Read failures never abort a run; they are surfaced here so the caller can
/// report them. The file still counts toward file totals but contributes
/// zero lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    /// Full path of the unreadable file
    pub path: PathBuf,
    /// Human-readable failure description
    pub reason: String,
}

/// One traversal's worth of collector groups.
///
/// Borrows its collectors for the duration of the pass; dropping the
/// dispatch releases them for reading. Custom collector sets plug in through
/// the builder methods.
pub struct Dispatch<'a> {
    filter: &'a ExtFilter,
    global: Vec<&'a mut dyn Collector>,
    matched: Vec<&'a mut dyn Collector>,
    excluded: Vec<&'a mut dyn Collector>,
}

impl<'a> Dispatch<'a> {
    /// Create a dispatch with empty collector groups.
    pub fn new(filter: &'a ExtFilter) -> Self {
        Self {
            filter,
            global: Vec::new(),
            matched: Vec::new(),
            excluded: Vec::new(),
        }
    }

    /// Add a collector that consumes every file.
    pub fn global(mut self, collector: &'a mut dyn Collector) -> Self {
        self.global.push(collector);
        self
    }

    /// Add a collector that consumes matched files only.
    pub fn matched(mut self, collector: &'a mut dyn Collector) -> Self {
        self.matched.push(collector);
        self
    }

    /// Add a collector that consumes excluded files only.
    pub fn excluded(mut self, collector: &'a mut dyn Collector) -> Self {
        self.excluded.push(collector);
        self
    }

    /// Drive one pass over a file sequence.
    ///
    /// Each `(directory, file name)` pair is classified once and dispatched
    /// to the global group plus exactly one of matched/excluded. A failed
    /// `consume` is recorded as a [`SkippedFile`] and the pass continues.
    pub fn run<I>(&mut self, files: I) -> Vec<SkippedFile>
    where
        I: IntoIterator<Item = (PathBuf, String)>,
    {
        let mut skipped = Vec::new();

        for (dir, file) in files {
            let ext = ext_of(&file).to_string();

            for collector in &mut self.global {
                record_failure(collector.consume(&dir, &file, &ext), &dir, &file, &mut skipped);
            }

            let group = match self.filter.classify(&ext) {
                Partition::Matched => &mut self.matched,
                Partition::Excluded => &mut self.excluded,
            };
            for collector in group.iter_mut() {
                record_failure(collector.consume(&dir, &file, &ext), &dir, &file, &mut skipped);
            }
        }

        skipped
    }
}

fn record_failure(result: Result<()>, dir: &Path, file: &str, skipped: &mut Vec<SkippedFile>) {
    if let Err(err) = result {
        skipped.push(SkippedFile {
            path: dir.join(file),
            reason: err.to_string(),
        });
    }
}

/// Per-extension breakdown row for matched files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtRow {
    /// Normalized extension key (empty for files with no extension)
    pub ext: String,
    /// Matched files with this extension
    pub files: u64,
    /// Total lines across those files
    pub lines: u64,
    /// Largest single-file line count
    pub max_lines: u64,
}

/// Aggregate statistics for one repository traversal.
///
/// Line figures cover matched files only; excluded files are counted but
/// never opened. `lines_max` is the sum of per-extension single-file maxima.
/// No averages here — deriving them (and guarding the zero-file case) is the
/// renderer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoProfile {
    /// Absolute path of the profiled root
    pub root: PathBuf,
    /// Configured inclusion list
    pub inclusions: Vec<String>,
    /// Configured exclusion list
    pub exclusions: Vec<String>,
    /// All files seen, matched or not
    pub files_total: u64,
    /// Files in the matched partition
    pub files_matched: u64,
    /// Files in the excluded partition
    pub files_excluded: u64,
    /// Total lines across matched files
    pub lines_total: u64,
    /// Sum of per-extension single-file maxima
    pub lines_max: u64,
    /// Extensions seen among matched files, sorted
    pub matched_extensions: Vec<String>,
    /// Extensions seen among excluded files, sorted
    pub excluded_extensions: Vec<String>,
    /// Per-extension breakdown of the matched partition
    pub by_extension: Vec<ExtRow>,
    /// Files skipped by the line counter
    pub skipped: Vec<SkippedFile>,
}

/// Profile a directory tree in a single pass.
///
/// Walks `root`, classifies every file against `filter`, and aggregates the
/// standard statistics. Unreadable files are reported in
/// [`RepoProfile::skipped`] rather than aborting the run.
///
/// # Example
///
/// ```rust,ignore
/// use repostatslib::{profile, ExtFilter};
///
/// let stats = profile(".", &ExtFilter::new().exclude(".md"))?;
/// println!("{} files, {} lines", stats.files_matched, stats.lines_total);
/// ```
pub fn profile(root: impl AsRef<Path>, filter: &ExtFilter) -> Result<RepoProfile> {
    let root = root.as_ref();
    let files = walk_files(root)?;

    let mut all_files = CountCollector::new();
    let mut matched_files = CountCollector::new();
    let mut matched_lines = LineCollector::new();
    let mut matched_exts = ExtCollector::new();
    let mut excluded_files = CountCollector::new();
    let mut excluded_exts = ExtCollector::new();

    let mut dispatch = Dispatch::new(filter)
        .global(&mut all_files)
        .matched(&mut matched_files)
        .matched(&mut matched_lines)
        .matched(&mut matched_exts)
        .excluded(&mut excluded_files)
        .excluded(&mut excluded_exts);
    let skipped = dispatch.run(files);
    drop(dispatch);

    let by_extension = matched_exts
        .all()
        .iter()
        .map(|ext| {
            Ok(ExtRow {
                ext: ext.clone(),
                files: matched_files.count_for(ext)?,
                // An extension whose every file was unreadable has a file
                // count but no line entry; it contributes zero lines.
                lines: matched_lines.lines_for(ext).unwrap_or(0),
                max_lines: matched_lines.max_for(ext).unwrap_or(0),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RepoProfile {
        root: fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf()),
        inclusions: filter.inclusions.clone(),
        exclusions: filter.exclusions.clone(),
        files_total: all_files.total(),
        files_matched: matched_files.total(),
        files_excluded: excluded_files.total(),
        lines_total: matched_lines.total_lines(),
        lines_max: matched_lines.max_lines(),
        matched_extensions: matched_exts.all().iter().cloned().collect(),
        excluded_extensions: excluded_exts.all().iter().cloned().collect(),
        by_extension,
        skipped,
    })
}
