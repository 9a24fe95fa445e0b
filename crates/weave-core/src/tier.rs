//! Ranked snippet search roots.
//!
//! A tier list is a plain ordered slice, highest priority first. Resolution
//! is a linear scan over it with first-match-wins.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Where a tier comes from. Informational only; priority is positional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TierKind {
    Workspace,
    User,
    Builtin,
    /// A root supplied explicitly by the caller
    Custom,
}

impl TierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workspace => "workspace",
            Self::User => "user",
            Self::Builtin => "builtin",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A snippet search root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    pub root: PathBuf,
    pub kind: TierKind,
    /// A missing required tier aborts the run; a missing optional tier is empty.
    pub required: bool,
}

impl Tier {
    /// A required tier.
    pub fn new(root: impl Into<PathBuf>, kind: TierKind) -> Self {
        Self {
            root: root.into(),
            kind,
            required: true,
        }
    }

    /// A tier treated as empty when its directory does not exist.
    pub fn optional(root: impl Into<PathBuf>, kind: TierKind) -> Self {
        Self {
            root: root.into(),
            kind,
            required: false,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Label for a file inside this tier, e.g. `workspace:base.md`.
    pub fn source_label(&self, file_name: &str) -> String {
        match self.kind {
            TierKind::Custom => file_name.to_string(),
            kind => format!("{kind}:{file_name}"),
        }
    }
}
