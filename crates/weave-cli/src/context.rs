//! Turns command line flags and the workspace config file into the explicit
//! inputs the core expects.
//!
//! Precedence for every setting: flag, then config file, then convention.

use std::path::{Path, PathBuf};

use weave_core::{DEFAULT_SEPARATOR, Invocation, Tier, TierKind, WeaveConfig, WorkspaceLayout};

use crate::cli::{DocumentArgs, TierArgs};
use crate::error::{CliError, Result};

/// Everything resolved about the workspace a command runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaveContext {
    pub workspace: PathBuf,
    /// Empty when the workspace has no config file.
    pub config: WeaveConfig,
    pub layout: WorkspaceLayout,
    pub tiers: Vec<Tier>,
}

impl WeaveContext {
    /// Resolve the context from `args`, relative to `cwd`.
    pub fn resolve(cwd: &Path, args: &TierArgs) -> Result<Self> {
        let workspace = match &args.workspace {
            Some(path) => cwd.join(path),
            None => cwd.to_path_buf(),
        };
        let workspace = dunce::canonicalize(&workspace).map_err(|e| {
            CliError::user(format!("Workspace {} is not accessible: {e}", workspace.display()))
        })?;

        let config = WeaveConfig::load(&workspace)?.unwrap_or_default();

        let builtin = args
            .builtin_snippets
            .as_ref()
            .map(|p| cwd.join(p))
            .or_else(|| config.builtin_snippets.as_ref().map(|p| workspace.join(p)));
        let mut layout = WorkspaceLayout::new(&workspace).with_builtin_snippets(builtin);
        if let Some(user) = &args.user_snippets {
            layout = layout.with_user_snippets(Some(cwd.join(user)));
        }

        let tiers = if args.tiers.is_empty() {
            layout.tiers()
        } else {
            args.tiers
                .iter()
                .map(|p| Tier::new(cwd.join(p), TierKind::Custom))
                .collect()
        };

        tracing::debug!(
            workspace = %workspace.display(),
            tiers = ?tiers.iter().map(|t| t.root.display().to_string()).collect::<Vec<_>>(),
            "Resolved context"
        );

        Ok(Self {
            workspace,
            config,
            layout,
            tiers,
        })
    }

    /// Output path: flag (relative to the workspace), config, then default.
    pub fn output(&self, document: &DocumentArgs) -> PathBuf {
        document
            .output
            .as_ref()
            .or(self.config.output.as_ref())
            .map(|p| self.workspace.join(p))
            .unwrap_or_else(|| self.layout.default_output())
    }

    /// Build the core invocation for `document`.
    pub fn invocation(&self, document: &DocumentArgs) -> Invocation {
        let include = if document.include.is_empty() {
            self.config.include.clone()
        } else {
            document.include.clone()
        };
        let separator = document
            .separator
            .clone()
            .or_else(|| self.config.separator.clone())
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());
        let provenance = document.provenance || self.config.provenance.unwrap_or(false);

        Invocation::new(self.tiers.clone(), include, self.output(document))
            .with_separator(separator)
            .with_provenance(provenance)
    }
}
