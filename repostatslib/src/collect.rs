//! Stat collectors: stateful accumulators fed one file at a time.
//!
//! Every metric the profiler reports is computed by a [`Collector`]. A
//! collector starts empty, receives each qualifying file exactly once through
//! [`Collector::consume`], and exposes its accessors only after the traversal
//! has finished; partial reads mid-traversal carry no guarantee.
//!
//! Three collectors cover the profiler's needs: per-extension file counts,
//! per-extension line counts, and the set of extensions seen. Only the line
//! collector touches file contents, so it is the only one that can fail.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::error::RepoStatsError;
use crate::Result;

/// Capability shared by all stat accumulators.
///
/// `dir` is the directory the file was found in, `file` the bare file name,
/// and `ext` the normalized extension key — computed once by the dispatcher
/// so collectors agree on the grouping.
pub trait Collector {
    /// Fold one file into the accumulated state.
    ///
    /// Only collectors that read file contents can fail, and only with
    /// [`RepoStatsError::FileRead`].
    fn consume(&mut self, dir: &Path, file: &str, ext: &str) -> Result<()>;
}

/// Counts files per extension.
#[derive(Debug, Clone, Default)]
pub struct CountCollector {
    counts: BTreeMap<String, u64>,
}

impl CountCollector {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files seen across all extensions.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of files seen for one extension.
    ///
    /// Fails with [`RepoStatsError::UnknownExtension`] when the extension was
    /// never consumed — callers check membership rather than reading zeros.
    pub fn count_for(&self, ext: &str) -> Result<u64> {
        self.counts
            .get(ext)
            .copied()
            .ok_or_else(|| RepoStatsError::UnknownExtension(ext.to_string()))
    }
}

impl Collector for CountCollector {
    fn consume(&mut self, _dir: &Path, _file: &str, ext: &str) -> Result<()> {
        *self.counts.entry(ext.to_string()).or_insert(0) += 1;
        Ok(())
    }
}

/// Per-extension line tally: running total and largest single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LineTally {
    total: u64,
    max: u64,
}

/// Counts lines per extension.
///
/// Tracks, for each extension, the total line count and the largest line
/// count seen in a single file. The cross-extension aggregates follow the
/// same shape: [`LineCollector::total_lines`] sums the per-extension totals,
/// and [`LineCollector::max_lines`] sums the per-extension maxima — one
/// representative largest file per extension, not the single largest file in
/// the whole tree.
#[derive(Debug, Clone, Default)]
pub struct LineCollector {
    tallies: BTreeMap<String, LineTally>,
}

/// Count lines in a byte buffer.
///
/// A line is a maximal run of bytes terminated by `\n` or by end of input
/// for a trailing partial line. An empty buffer has zero lines.
fn count_lines(buf: &[u8]) -> u64 {
    let newlines = bytecount::count(buf, b'\n') as u64;
    match buf.last() {
        Some(b'\n') | None => newlines,
        Some(_) => newlines + 1,
    }
}

impl LineCollector {
    /// Create an empty line counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total lines across all extensions.
    pub fn total_lines(&self) -> u64 {
        self.tallies.values().map(|t| t.total).sum()
    }

    /// Sum of the per-extension single-file maxima.
    pub fn max_lines(&self) -> u64 {
        self.tallies.values().map(|t| t.max).sum()
    }

    /// Total lines for one extension.
    pub fn lines_for(&self, ext: &str) -> Result<u64> {
        self.tally_for(ext).map(|t| t.total)
    }

    /// Largest single-file line count for one extension.
    pub fn max_for(&self, ext: &str) -> Result<u64> {
        self.tally_for(ext).map(|t| t.max)
    }

    fn tally_for(&self, ext: &str) -> Result<LineTally> {
        self.tallies
            .get(ext)
            .copied()
            .ok_or_else(|| RepoStatsError::UnknownExtension(ext.to_string()))
    }
}

impl Collector for LineCollector {
    fn consume(&mut self, dir: &Path, file: &str, ext: &str) -> Result<()> {
        let path = dir.join(file);
        let buf = fs::read(&path).map_err(|source| RepoStatsError::FileRead {
            path: path.clone(),
            source,
        })?;
        let lines = count_lines(&buf);
        let tally = self.tallies.entry(ext.to_string()).or_default();
        tally.total += lines;
        tally.max = tally.max.max(lines);
        Ok(())
    }
}

/// Collects the set of extensions observed.
#[derive(Debug, Clone, Default)]
pub struct ExtCollector {
    exts: BTreeSet<String>,
}

impl ExtCollector {
    /// Create an empty extension set.
    pub fn new() -> Self {
        Self::default()
    }

    /// All extensions seen, sorted.
    pub fn all(&self) -> &BTreeSet<String> {
        &self.exts
    }
}

impl Collector for ExtCollector {
    fn consume(&mut self, _dir: &Path, _file: &str, ext: &str) -> Result<()> {
        self.exts.insert(ext.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn consume_name(c: &mut impl Collector, file: &str, ext: &str) {
        c.consume(Path::new("/tmp"), file, ext).unwrap();
    }

    #[test]
    fn test_count_collector_totals() {
        let mut counter = CountCollector::new();
        consume_name(&mut counter, "a.py", ".py");
        consume_name(&mut counter, "b.py", ".py");
        consume_name(&mut counter, "c.md", ".md");

        assert_eq!(counter.total(), 3);
        assert_eq!(counter.count_for(".py").unwrap(), 2);
        assert_eq!(counter.count_for(".md").unwrap(), 1);
    }

    #[test]
    fn test_count_collector_unknown_extension() {
        let counter = CountCollector::new();
        let err = counter.count_for(".rs").unwrap_err();
        assert!(matches!(err, RepoStatsError::UnknownExtension(e) if e == ".rs"));
    }

    #[test]
    fn test_ext_collector_idempotent() {
        let mut exts = ExtCollector::new();
        consume_name(&mut exts, "a.py", ".py");
        consume_name(&mut exts, "b.py", ".py");
        consume_name(&mut exts, "Makefile", "");

        assert_eq!(exts.all().len(), 2);
        assert!(exts.all().contains(".py"));
        assert!(exts.all().contains(""));
    }

    #[test]
    fn test_count_lines_buffer() {
        assert_eq!(count_lines(b""), 0);
        assert_eq!(count_lines(b"\n"), 1);
        assert_eq!(count_lines(b"one\ntwo\n"), 2);
        // Trailing partial line still counts
        assert_eq!(count_lines(b"one\ntwo"), 2);
        assert_eq!(count_lines(b"no newline"), 1);
    }

    #[test]
    fn test_line_collector_per_extension() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.py"), "1\n2\n3\n").unwrap();
        fs::write(temp.path().join("b.py"), "1\n2\n3\n4\n5\n").unwrap();
        fs::write(temp.path().join("c.md"), "1\n2\n").unwrap();

        let mut lines = LineCollector::new();
        lines.consume(temp.path(), "a.py", ".py").unwrap();
        lines.consume(temp.path(), "b.py", ".py").unwrap();
        lines.consume(temp.path(), "c.md", ".md").unwrap();

        assert_eq!(lines.lines_for(".py").unwrap(), 8);
        assert_eq!(lines.max_for(".py").unwrap(), 5);
        assert_eq!(lines.lines_for(".md").unwrap(), 2);
        assert_eq!(lines.total_lines(), 10);
    }

    #[test]
    fn test_line_collector_max_is_sum_of_per_extension_maxima() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("big.py"), "x\n".repeat(7)).unwrap();
        fs::write(temp.path().join("small.py"), "x\n").unwrap();
        fs::write(temp.path().join("doc.md"), "x\n".repeat(3)).unwrap();

        let mut lines = LineCollector::new();
        lines.consume(temp.path(), "big.py", ".py").unwrap();
        lines.consume(temp.path(), "small.py", ".py").unwrap();
        lines.consume(temp.path(), "doc.md", ".md").unwrap();

        // 7 (.py max) + 3 (.md max), not 7 (largest file overall)
        assert_eq!(lines.max_lines(), 10);
    }

    #[test]
    fn test_line_collector_unreadable_file() {
        let temp = tempdir().unwrap();

        let mut lines = LineCollector::new();
        let err = lines.consume(temp.path(), "missing.py", ".py").unwrap_err();
        assert!(matches!(err, RepoStatsError::FileRead { .. }));

        // Failed consume contributes nothing
        assert_eq!(lines.total_lines(), 0);
        assert!(lines.lines_for(".py").is_err());
    }

    #[test]
    fn test_line_collector_unknown_extension() {
        let lines = LineCollector::new();
        assert!(matches!(
            lines.lines_for(".py").unwrap_err(),
            RepoStatsError::UnknownExtension(_)
        ));
        assert!(matches!(
            lines.max_for(".py").unwrap_err(),
            RepoStatsError::UnknownExtension(_)
        ));
    }

    #[test]
    fn test_line_collector_empty_file() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("empty.py"), "").unwrap();

        let mut lines = LineCollector::new();
        lines.consume(temp.path(), "empty.py", ".py").unwrap();

        assert_eq!(lines.lines_for(".py").unwrap(), 0);
        assert_eq!(lines.max_for(".py").unwrap(), 0);
    }
}
