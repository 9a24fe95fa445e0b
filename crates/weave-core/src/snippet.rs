//! Snippet values loaded from tier directories.

use std::path::{Path, PathBuf};

use serde::Serialize;
use weave_fs::checksum;

use crate::frontmatter::{Metadata, split_front_matter};
use crate::tier::{Tier, TierKind};
use crate::warning::Warning;

/// File extension of snippet files.
pub const SNIPPET_EXTENSION: &str = "md";

/// A named reusable text block, read fresh from disk on every invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snippet {
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub version: Option<i64>,
    /// Text after the metadata block.
    pub body: String,
    pub tier: TierKind,
    pub path: PathBuf,
    /// `<tier>:<file name>` label used in provenance stamps.
    pub source: String,
    /// 1-based line where `body` starts in the source file.
    pub body_line: usize,
    /// SHA-256 hex digest of the raw file bytes.
    pub digest: String,
}

/// What loading a single candidate file produced.
#[derive(Debug)]
pub(crate) enum Loaded {
    Snippet(Box<Snippet>),
    /// Parsed fine but carries no `name`.
    Unnamed,
    Rejected(Warning),
}

impl Snippet {
    /// Read and parse a snippet file that belongs to `tier`.
    pub(crate) fn load(path: &Path, tier: &Tier) -> Loaded {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                return Loaded::Rejected(Warning::UnreadableSnippet {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                });
            }
        };
        let text = match std::str::from_utf8(&bytes) {
            Ok(text) => text,
            Err(e) => {
                return Loaded::Rejected(Warning::UnreadableSnippet {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                });
            }
        };

        let parsed = match split_front_matter(path, text) {
            Ok(parsed) => parsed,
            Err(e) => {
                return Loaded::Rejected(Warning::SnippetMetadata {
                    path: e.path,
                    message: e.message,
                });
            }
        };

        let Metadata {
            name,
            description,
            tags,
            version,
            ..
        } = parsed.metadata;
        let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
            return Loaded::Unnamed;
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Loaded::Snippet(Box::new(Snippet {
            name,
            description,
            tags,
            version,
            body: parsed.body.to_string(),
            tier: tier.kind,
            path: path.to_path_buf(),
            source: tier.source_label(&file_name),
            body_line: parsed.body_line,
            digest: checksum::sha256_hex(&bytes),
        }))
    }

    pub fn summary(&self) -> SnippetSummary {
        SnippetSummary {
            name: self.name.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            version: self.version,
            tier: self.tier,
            path: self.path.clone(),
        }
    }
}

/// Discovery view of a snippet, as listed by the library scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetSummary {
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub version: Option<i64>,
    /// The tier that won for this name.
    pub tier: TierKind,
    pub path: PathBuf,
}
