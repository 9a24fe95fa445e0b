//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// prompt-weave - Assemble a Markdown document from reusable snippets
#[derive(Parser, Debug)]
#[command(name = "weave")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where to look for snippets
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct TierArgs {
    /// Workspace root (defaults to the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub workspace: Option<PathBuf>,

    /// Built-in snippets directory (lowest priority tier)
    #[arg(long, value_name = "PATH", env = "WEAVE_BUILTIN_SNIPPETS")]
    pub builtin_snippets: Option<PathBuf>,

    /// User snippets directory (defaults to ~/.prompt-weave/snippets)
    #[arg(long, value_name = "PATH", env = "WEAVE_USER_SNIPPETS")]
    pub user_snippets: Option<PathBuf>,

    /// Explicit tier directory, highest priority first.
    ///
    /// Replaces the workspace/user/built-in convention; every listed
    /// directory must exist.
    #[arg(long = "tier", value_name = "PATH")]
    pub tiers: Vec<PathBuf>,
}

/// How to build the document
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentArgs {
    /// Snippet names in output order (overrides the config file)
    #[arg(short, long = "include", value_name = "NAME", num_args = 1..)]
    pub include: Vec<String>,

    /// Output path (defaults to .github/copilot-instructions.md)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Separator line between generated and user-owned content
    #[arg(long, value_name = "LINE")]
    pub separator: Option<String>,

    /// Stamp each snippet with its source file and SHA-256 digest
    #[arg(long)]
    pub provenance: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create .prompt-weave/config.toml and the workspace snippets directory
    Init {
        #[command(flatten)]
        tiers: TierArgs,

        /// Snippet names to include
        #[arg(short, long = "include", value_name = "NAME", num_args = 1..)]
        include: Vec<String>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Regenerate the document, keeping content below the separator
    ///
    /// Examples:
    ///   weave regenerate --builtin-snippets ./snippets -i base -i rust
    ///   weave regenerate --dry-run          # Show the diff, write nothing
    ///   weave regenerate --tier ./a --tier ./b -i base -o NOTES.md
    Regenerate {
        #[command(flatten)]
        tiers: TierArgs,

        #[command(flatten)]
        document: DocumentArgs,

        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,

        /// Exit with status 2 when any warning was reported
        #[arg(long)]
        strict: bool,

        /// Skip the check that the output is ignored by git
        #[arg(long)]
        no_git_check: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every snippet visible across tiers
    List {
        #[command(flatten)]
        tiers: TierArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Check whether the document is up to date (exit 1 if not)
    Check {
        #[command(flatten)]
        tiers: TierArgs,

        #[command(flatten)]
        document: DocumentArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
