//! Init command implementation

use std::fs;

use colored::Colorize;
use weave_core::WeaveConfig;
use weave_core::config::{CONFIG_FILES, STATE_DIR};

use crate::context::WeaveContext;
use crate::error::{CliError, Result};

/// Write `.prompt-weave/config.toml` and create the workspace snippets directory.
pub fn run_init(ctx: &WeaveContext, include: &[String], force: bool) -> Result<()> {
    let state_dir = ctx.workspace.join(STATE_DIR);
    if !force {
        if let Some(existing) = CONFIG_FILES
            .iter()
            .map(|name| state_dir.join(name))
            .find(|path| path.is_file())
        {
            return Err(CliError::user(format!(
                "{} already exists (use --force to overwrite)",
                existing.display()
            )));
        }
    }

    let snippets = ctx.layout.workspace_snippets();
    fs::create_dir_all(&snippets)?;

    let config = WeaveConfig {
        include: include.to_vec(),
        ..ctx.config.clone()
    };
    let path = config.save(&ctx.workspace)?;

    println!("{} Wrote {}", "OK".green().bold(), path.display());
    println!("   Put workspace snippets in {}", snippets.display().to_string().cyan());
    Ok(())
}
