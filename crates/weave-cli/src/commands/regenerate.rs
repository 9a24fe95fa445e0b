//! Regenerate command implementation

use colored::Colorize;
use similar::{ChangeTag, TextDiff};
use weave_core::{Report, check_gitignore, regenerate};

use super::print_warnings;
use crate::cli::DocumentArgs;
use crate::context::WeaveContext;
use crate::error::Result;

/// Exit status when `--strict` is set and warnings were reported.
pub const STRICT_FAILURE: i32 = 2;

/// Flags that shape how a regeneration runs and reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegenerateOptions {
    pub dry_run: bool,
    pub strict: bool,
    pub git_check: bool,
    pub json: bool,
}

/// Run the regenerate command, returning the process exit status.
pub fn run_regenerate(
    ctx: &WeaveContext,
    document: &DocumentArgs,
    options: &RegenerateOptions,
) -> Result<i32> {
    let invocation = ctx.invocation(document).with_dry_run(options.dry_run);
    let mut report = regenerate(&invocation)?;

    if options.git_check {
        if let Some(warning) = check_gitignore(&ctx.workspace, &report.output) {
            tracing::warn!("{warning}");
            report.warnings.push(warning);
        }
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_warnings(&report.warnings);
        if options.dry_run {
            print_diff(&report);
        }
        print_summary(&report, options.dry_run);
    }

    if options.strict && !report.warnings.is_empty() {
        return Ok(STRICT_FAILURE);
    }
    Ok(0)
}

fn print_summary(report: &Report, dry_run: bool) {
    let path = report.output.display();
    if !report.changed {
        println!("{} {} is up to date.", "OK".green().bold(), path);
    } else if dry_run {
        println!("{} Would update {}", "[dry-run]".yellow(), path);
    } else if report.included.is_empty() {
        println!("{} Regenerated {} with no snippets", "OK".green().bold(), path);
    } else {
        println!(
            "{} Regenerated with {} snippet(s): {}",
            "OK".green().bold(),
            report.included.len(),
            report.included.join(", ")
        );
    }
}

/// Print a line diff between the existing and the computed document.
pub(crate) fn print_diff(report: &Report) {
    if !report.changed {
        return;
    }
    let old = report.previous.as_deref().unwrap_or("");
    let diff = TextDiff::from_lines(old, report.document.as_str());

    println!("{}", format!("--- {}", report.output.display()).bold());
    println!("{}", "+++ generated".bold());
    for hunk in diff.unified_diff().context_radius(3).iter_hunks() {
        println!("{}", hunk.header().to_string().cyan());
        for change in hunk.iter_changes() {
            let line = change.to_string_lossy();
            let line = line.trim_end_matches('\n');
            match change.tag() {
                ChangeTag::Delete => println!("{}", format!("-{line}").red()),
                ChangeTag::Insert => println!("{}", format!("+{line}").green()),
                ChangeTag::Equal => println!(" {line}"),
            }
        }
    }
}
