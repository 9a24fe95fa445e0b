//! List command implementation

use colored::Colorize;
use weave_core::scan;

use super::print_warnings;
use crate::context::WeaveContext;
use crate::error::Result;

/// List every snippet visible across the context's tiers.
pub fn run_list(ctx: &WeaveContext, json: bool) -> Result<()> {
    let scan = scan(&ctx.tiers)?;

    if json {
        let output = serde_json::json!({
            "snippets": scan.snippets,
            "warnings": scan.warnings,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_warnings(&scan.warnings);

    if scan.snippets.is_empty() {
        println!("No snippets found.");
        return Ok(());
    }

    println!("{}", "Available Snippets".bold());
    println!();
    for snippet in &scan.snippets {
        let description = snippet.description.as_deref().unwrap_or("");
        println!(
            "  {:<24} {:<10} {}",
            snippet.name.green(),
            snippet.tier.to_string().dimmed(),
            description
        );
        if !snippet.tags.is_empty() {
            println!("  {:<24} {:<10} {}", "", "", snippet.tags.join(", ").cyan());
        }
    }
    println!();
    println!("{} {} snippets", "Total:".dimmed(), scan.snippets.len());
    Ok(())
}
