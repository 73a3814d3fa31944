//! Report rendering for CLI output.
//!
//! Turns a [`RepoProfile`] into the fixed set of human-readable report lines.
//! All derived figures live here, not in the engine — notably the line
//! average, which guards the zero-file case.

use console::Style;
use repostatslib::{RepoProfile, SkippedFile};
use std::fmt::Write;

/// Format an extension list or set as `[.py, .md]`.
fn fmt_exts<'a>(exts: impl IntoIterator<Item = &'a String>) -> String {
    let shown: Vec<&str> = exts
        .into_iter()
        .map(|e| if e.is_empty() { "(none)" } else { e.as_str() })
        .collect();
    format!("[{}]", shown.join(", "))
}

/// Average lines per matched file, `0.0` when nothing matched.
fn lines_avg(stats: &RepoProfile) -> f64 {
    if stats.files_matched == 0 {
        0.0
    } else {
        stats.lines_total as f64 / stats.files_matched as f64
    }
}

/// Render the full report as a string.
pub fn render_table(stats: &RepoProfile) -> String {
    let label = Style::new().bold();
    let mut out = String::new();

    let mut line = |name: &str, value: String| {
        let _ = writeln!(out, "{} {}", label.apply_to(format!("{name}:")), value);
    };

    line("Repo", stats.root.display().to_string());
    line("Inclusions", fmt_exts(&stats.inclusions));
    line("Exclusions", fmt_exts(&stats.exclusions));
    line("Files total", stats.files_total.to_string());
    line("Files matched", stats.files_matched.to_string());
    line("Files excluded", stats.files_excluded.to_string());
    line("Extensions matched", fmt_exts(&stats.matched_extensions));
    line("Extensions excluded", fmt_exts(&stats.excluded_extensions));
    line("Lines total", stats.lines_total.to_string());
    line("Lines avg", format!("{:.1}", lines_avg(stats)));
    line("Lines max", stats.lines_max.to_string());

    if !stats.by_extension.is_empty() {
        out.push('\n');
        let _ = writeln!(
            out,
            "{}",
            label.apply_to(format!(
                "{:<12} {:>8} {:>10} {:>8}",
                "Extension", "Files", "Lines", "Max"
            ))
        );
        for row in &stats.by_extension {
            let ext = if row.ext.is_empty() { "(none)" } else { &row.ext };
            let _ = writeln!(
                out,
                "{:<12} {:>8} {:>10} {:>8}",
                ext, row.files, row.lines, row.max_lines
            );
        }
    }

    out
}

/// Render skipped-file diagnostics, one warning per line.
pub fn render_warnings(skipped: &[SkippedFile]) -> String {
    let warn = Style::new().yellow().bold();
    skipped
        .iter()
        .map(|s| format!("{} {}", warn.apply_to("warning:"), s.reason))
        .collect::<Vec<_>>()
        .join("\n")
}
