//! File classification against inclusion/exclusion extension lists.
//!
//! Classification decides which partition a file's statistics land in:
//! `Matched` or `Excluded`. The two lists are not symmetric — inclusions are
//! an allow-list, exclusions a deny-list, and the allow-list takes precedence
//! when both name the same extension.

use serde::{Deserialize, Serialize};

/// Verdict for a single file.
///
/// Global collectors run before classification and are unaffected by it;
/// the verdict only selects between the matched and excluded groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Partition {
    /// File passes the filter and counts toward the main statistics
    Matched,
    /// File is filtered out and counts toward the excluded statistics
    Excluded,
}

/// Extension-based inclusion/exclusion filter.
///
/// Extensions are normalized keys as produced by [`crate::ext_of`], leading
/// dot included (`.py`, `.rs`). An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtFilter {
    /// Extensions to include (empty = include all)
    pub inclusions: Vec<String>,
    /// Extensions to exclude
    pub exclusions: Vec<String>,
}

impl ExtFilter {
    /// Create an empty filter that matches every file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an inclusion.
    pub fn include(mut self, ext: impl Into<String>) -> Self {
        self.inclusions.push(ext.into());
        self
    }

    /// Add an exclusion.
    pub fn exclude(mut self, ext: impl Into<String>) -> Self {
        self.exclusions.push(ext.into());
        self
    }

    /// Add multiple inclusions.
    pub fn include_many<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inclusions.extend(exts.into_iter().map(Into::into));
        self
    }

    /// Add multiple exclusions.
    pub fn exclude_many<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusions.extend(exts.into_iter().map(Into::into));
        self
    }

    /// Classify an extension.
    ///
    /// Precedence:
    /// 1. Non-empty inclusion list: matched iff the extension is listed.
    ///    An extension in both lists is `Matched` — inclusion wins.
    /// 2. Non-empty exclusion list: excluded iff the extension is listed.
    /// 3. Otherwise `Matched`.
    ///
    /// Pure and total over any string, including the empty extension.
    pub fn classify(&self, ext: &str) -> Partition {
        if !self.inclusions.is_empty() {
            return if self.inclusions.iter().any(|i| i == ext) {
                Partition::Matched
            } else {
                Partition::Excluded
            };
        }
        if self.exclusions.iter().any(|e| e == ext) {
            return Partition::Excluded;
        }
        Partition::Matched
    }
}
