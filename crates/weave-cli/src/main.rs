//! prompt-weave CLI
//!
//! Thin adapter over `weave-core`: resolves flags and the workspace config
//! into explicit inputs, runs one operation and renders the outcome.

mod cli;
mod commands;
mod context;
mod error;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::RegenerateOptions;
use context::WeaveContext;
use error::Result;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => {
            let cwd = std::env::current_dir()?;
            execute_command(&cwd, cmd)
        }
        None => {
            println!("{} prompt-weave CLI", "weave".green().bold());
            println!();
            println!("Run {} for available commands.", "weave --help".cyan());
            Ok(0)
        }
    }
}

fn execute_command(cwd: &Path, cmd: Commands) -> Result<i32> {
    match cmd {
        Commands::Init {
            tiers,
            include,
            force,
        } => {
            let ctx = WeaveContext::resolve(cwd, &tiers)?;
            commands::run_init(&ctx, &include, force)?;
            Ok(0)
        }
        Commands::Regenerate {
            tiers,
            document,
            dry_run,
            strict,
            no_git_check,
            json,
        } => {
            let ctx = WeaveContext::resolve(cwd, &tiers)?;
            let options = RegenerateOptions {
                dry_run,
                strict,
                git_check: !no_git_check,
                json,
            };
            commands::run_regenerate(&ctx, &document, &options)
        }
        Commands::List { tiers, json } => {
            let ctx = WeaveContext::resolve(cwd, &tiers)?;
            commands::run_list(&ctx, json)?;
            Ok(0)
        }
        Commands::Check {
            tiers,
            document,
            json,
        } => {
            let ctx = WeaveContext::resolve(cwd, &tiers)?;
            commands::run_check(&ctx, &document, json)
        }
    }
}
