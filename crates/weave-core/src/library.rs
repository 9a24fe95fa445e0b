//! Loading snippet tiers from disk.
//!
//! Each tier directory is read once. Files are visited in lexicographic
//! filename order so that duplicate names inside one tier resolve the same
//! way on every run.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::snippet::{Loaded, SNIPPET_EXTENSION, Snippet};
use crate::tier::Tier;
use crate::warning::Warning;

/// The snippets of one tier, unique by name.
#[derive(Debug, Clone)]
pub struct TierIndex {
    pub tier: Tier,
    snippets: Vec<Snippet>,
    by_name: HashMap<String, usize>,
}

impl TierIndex {
    /// Load every snippet file directly inside `tier.root`.
    ///
    /// A missing optional tier yields an empty index. Per-file problems are
    /// appended to `warnings`.
    pub(crate) fn load(tier: &Tier, warnings: &mut Vec<Warning>) -> Result<Self> {
        let mut index = Self {
            tier: tier.clone(),
            snippets: Vec::new(),
            by_name: HashMap::new(),
        };

        for path in snippet_files(tier)? {
            match Snippet::load(&path, tier) {
                Loaded::Snippet(snippet) => index.insert(*snippet, warnings),
                Loaded::Unnamed => {
                    let warning = Warning::UnnamedSnippet { path };
                    tracing::warn!("{warning}");
                    warnings.push(warning);
                }
                Loaded::Rejected(warning) => {
                    tracing::warn!("{warning}");
                    warnings.push(warning);
                }
            }
        }

        tracing::debug!(
            root = %tier.root.display(),
            kind = %tier.kind,
            snippets = index.snippets.len(),
            "Loaded snippet tier"
        );
        Ok(index)
    }

    fn insert(&mut self, snippet: Snippet, warnings: &mut Vec<Warning>) {
        if let Some(&existing) = self.by_name.get(&snippet.name) {
            let warning = Warning::DuplicateSnippet {
                name: snippet.name.clone(),
                kept: self.snippets[existing].path.clone(),
                ignored: snippet.path,
            };
            tracing::warn!("{warning}");
            warnings.push(warning);
            return;
        }
        self.by_name.insert(snippet.name.clone(), self.snippets.len());
        self.snippets.push(snippet);
    }

    pub fn get(&self, name: &str) -> Option<&Snippet> {
        self.by_name.get(name).map(|&i| &self.snippets[i])
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

/// Candidate snippet files of a tier, sorted by file name.
fn snippet_files(tier: &Tier) -> Result<Vec<PathBuf>> {
    let root = tier.root();
    if !root.exists() {
        if tier.required {
            return Err(Error::TierNotFound {
                path: root.to_path_buf(),
            });
        }
        tracing::debug!(root = %root.display(), "Optional tier does not exist, treating as empty");
        return Ok(Vec::new());
    }
    if !root.is_dir() {
        return Err(Error::TierNotDirectory {
            path: root.to_path_buf(),
        });
    }

    let unreadable = |source| Error::TierUnreadable {
        path: root.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(root).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if is_snippet_file(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn is_snippet_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(SNIPPET_EXTENSION))
}

/// All tiers of an invocation, loaded once, highest priority first.
#[derive(Debug, Clone, Default)]
pub struct Library {
    tiers: Vec<TierIndex>,
    warnings: Vec<Warning>,
}

impl Library {
    /// Load every tier in order.
    ///
    /// Fails on the first required tier that is missing or unreadable;
    /// per-file problems become warnings.
    pub fn load(tiers: &[Tier]) -> Result<Self> {
        let mut warnings = Vec::new();
        let tiers = tiers
            .iter()
            .map(|tier| TierIndex::load(tier, &mut warnings))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tiers, warnings })
    }

    /// The highest-priority snippet named `name`, if any.
    pub fn resolve(&self, name: &str) -> Option<&Snippet> {
        let found = self.tiers.iter().find_map(|index| index.get(name));
        match found {
            Some(snippet) => {
                tracing::debug!(name, path = %snippet.path.display(), "Resolved snippet")
            }
            None => tracing::debug!(name, "Snippet not found in any tier"),
        }
        found
    }

    pub fn tiers(&self) -> &[TierIndex] {
        &self.tiers
    }

    /// Duplicate, metadata, unnamed and unreadable-file warnings from loading.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}
