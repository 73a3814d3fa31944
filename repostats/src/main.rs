//! # repostats
//!
//! A CLI tool for profiling a repository directory: file counts, line totals,
//! and per-extension breakdowns, with inclusion/exclusion filtering by file
//! extension.
//!
//! ## Usage
//!
//! ```bash
//! # Profile a directory
//! repostats path/to/repo
//!
//! # Only count Python files
//! repostats path/to/repo -i .py
//!
//! # Everything except Markdown and lockfiles
//! repostats path/to/repo -e .md -e .lock
//!
//! # Structured output
//! repostats path/to/repo --output json
//! ```
//!
//! Extensions are written with their leading dot (`.py`, not `py`). When both
//! lists are given, the inclusion list wins for extensions named in both.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use repostatslib::{profile, ExtFilter};

mod render;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("repostats")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Repository profiler: file counts, line totals, and extension breakdowns")
        .arg(
            Arg::new("repo_path")
                .help("Directory to profile")
                .required(true),
        )
        .arg(
            Arg::new("incl")
                .short('i')
                .long("incl")
                .action(ArgAction::Append)
                .value_name("EXT")
                .help("Extension to include, with leading dot (can be repeated)"),
        )
        .arg(
            Arg::new("excl")
                .short('e')
                .long("excl")
                .action(ArgAction::Append)
                .value_name("EXT")
                .help("Extension to exclude, with leading dot (can be repeated)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
}

/// Build the extension filter from parsed arguments
fn build_filter(matches: &ArgMatches) -> ExtFilter {
    let mut filter = ExtFilter::new();
    if let Some(incl) = matches.get_many::<String>("incl") {
        filter = filter.include_many(incl.cloned());
    }
    if let Some(excl) = matches.get_many::<String>("excl") {
        filter = filter.exclude_many(excl.cloned());
    }
    filter
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("repo_path")
        .map(String::as_str)
        .unwrap_or(".");

    let root = Path::new(path);
    if !root.is_dir() {
        anyhow::bail!("'{path}' is not an existing directory");
    }

    let filter = build_filter(matches);
    let stats = profile(root, &filter).with_context(|| format!("failed to profile '{path}'"))?;

    if !stats.skipped.is_empty() {
        eprintln!("{}", render::render_warnings(&stats.skipped));
    }

    match matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("table")
    {
        "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
        _ => print!("{}", render::render_table(&stats)),
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
