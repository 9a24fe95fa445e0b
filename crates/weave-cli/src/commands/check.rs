//! Check command implementation
//!
//! Computes the document without writing it and reports drift.

use colored::Colorize;
use serde_json::json;
use weave_core::regenerate;

use super::print_warnings;
use crate::cli::DocumentArgs;
use crate::context::WeaveContext;
use crate::error::Result;

/// Exit status when the document is out of date.
pub const OUT_OF_DATE: i32 = 1;

/// Run the check command, returning the process exit status.
pub fn run_check(ctx: &WeaveContext, document: &DocumentArgs, json: bool) -> Result<i32> {
    let invocation = ctx.invocation(document).with_dry_run(true);
    let report = regenerate(&invocation)?;

    if json {
        let output = json!({
            "output": report.output,
            "up_to_date": !report.changed,
            "stale": report.stale,
            "missing": report.missing,
            "warnings": report.warnings,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_warnings(&report.warnings);
        if report.changed {
            println!(
                "{} {} is out of date. Run {} to update it.",
                "DRIFT".red().bold(),
                report.output.display(),
                "weave regenerate".cyan()
            );
            for source in &report.stale {
                println!("  {} {}", "changed:".yellow(), source);
            }
        } else {
            println!("{} {} is up to date.", "OK".green().bold(), report.output.display());
        }
    }

    Ok(if report.changed { OUT_OF_DATE } else { 0 })
}
