//! Workspace conventions and the optional workspace config file.
//!
//! The core never reads these on its own: adapters use them to build the
//! explicit [`Tier`] list and [`Invocation`](crate::Invocation) they pass in.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use weave_fs::ConfigStore;

use crate::error::Result;
use crate::tier::{Tier, TierKind};

/// Per-workspace and per-user state directory.
pub const STATE_DIR: &str = ".prompt-weave";

/// Snippet directory inside [`STATE_DIR`].
pub const SNIPPETS_DIR: &str = "snippets";

/// Where the generated document goes unless configured otherwise.
pub const DEFAULT_OUTPUT: &str = ".github/copilot-instructions.md";

/// Config file names, in lookup order.
pub const CONFIG_FILES: [&str; 4] = ["config.toml", "config.json", "config.yaml", "config.yml"];

/// Contents of `<workspace>/.prompt-weave/config.*`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeaveConfig {
    /// Snippet names, in output order.
    pub include: Vec<String>,
    /// Output path relative to the workspace root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<bool>,
    /// Built-in snippet directory, relative to the workspace root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builtin_snippets: Option<PathBuf>,
}

impl WeaveConfig {
    /// Load the first config file found in the workspace state directory.
    ///
    /// Returns `Ok(None)` when the workspace has no config file.
    pub fn load(workspace: &Path) -> Result<Option<Self>> {
        let dir = workspace.join(STATE_DIR);
        for name in CONFIG_FILES {
            let path = dir.join(name);
            if path.is_file() {
                tracing::debug!(path = %path.display(), "Loading workspace config");
                return Ok(Some(ConfigStore::new().load(&path)?));
            }
        }
        tracing::debug!(dir = %dir.display(), "No workspace config found");
        Ok(None)
    }

    /// Write the config as `config.toml` in the workspace state directory.
    pub fn save(&self, workspace: &Path) -> Result<PathBuf> {
        let path = workspace.join(STATE_DIR).join(CONFIG_FILES[0]);
        ConfigStore::new().save(&path, self)?;
        Ok(path)
    }
}

/// The fixed directory conventions of a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    pub root: PathBuf,
    /// `None` when no home directory is known.
    pub user_snippets: Option<PathBuf>,
    pub builtin_snippets: Option<PathBuf>,
}

impl WorkspaceLayout {
    /// Layout rooted at `root`, with the user tier under the home directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            user_snippets: default_user_snippets(),
            builtin_snippets: None,
        }
    }

    pub fn with_user_snippets(mut self, dir: Option<PathBuf>) -> Self {
        self.user_snippets = dir;
        self
    }

    pub fn with_builtin_snippets(mut self, dir: Option<PathBuf>) -> Self {
        self.builtin_snippets = dir;
        self
    }

    pub fn workspace_snippets(&self) -> PathBuf {
        self.root.join(STATE_DIR).join(SNIPPETS_DIR)
    }

    pub fn default_output(&self) -> PathBuf {
        self.root.join(DEFAULT_OUTPUT)
    }

    /// Tiers in priority order: workspace, user, built-in.
    ///
    /// Workspace and user tiers are optional; the built-in tier, when set,
    /// is required.
    pub fn tiers(&self) -> Vec<Tier> {
        let mut tiers = vec![Tier::optional(self.workspace_snippets(), TierKind::Workspace)];
        if let Some(user) = &self.user_snippets {
            tiers.push(Tier::optional(user, TierKind::User));
        }
        if let Some(builtin) = &self.builtin_snippets {
            tiers.push(Tier::new(builtin, TierKind::Builtin));
        }
        tiers
    }
}

/// `<home>/.prompt-weave/snippets`
pub fn default_user_snippets() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(STATE_DIR).join(SNIPPETS_DIR))
}
