//! Recoverable conditions reported alongside a result.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A condition that was reported but did not stop processing.
///
/// The `Display` form is the human-readable warning line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// No tier defines the requested name
    SnippetNotFound { name: String },

    /// Two files in the same tier claim the same name; the first by filename wins
    DuplicateSnippet {
        name: String,
        kept: PathBuf,
        ignored: PathBuf,
    },

    /// The front matter block of a snippet could not be parsed
    SnippetMetadata { path: PathBuf, message: String },

    /// A snippet file could not be read as UTF-8 text
    UnreadableSnippet { path: PathBuf, message: String },

    /// A snippet file has no `name` key and cannot be resolved
    UnnamedSnippet { path: PathBuf },

    /// Separator lines found in generated content were dropped
    SeparatorInContent { count: usize },

    /// The existing output had no separator line and its content was replaced
    UnmarkedOutputReplaced { path: PathBuf },

    /// The generated document would be committed to git
    OutputTracked { path: PathBuf },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SnippetNotFound { name } => write!(f, "snippet not found: {name}"),
            Self::DuplicateSnippet {
                name,
                kept,
                ignored,
            } => write!(
                f,
                "duplicate snippet name '{name}': using {}, ignoring {}",
                kept.display(),
                ignored.display()
            ),
            Self::SnippetMetadata { path, message } => {
                write!(f, "invalid front matter in {}: {message}", path.display())
            }
            Self::UnreadableSnippet { path, message } => {
                write!(f, "unreadable snippet {}: {message}", path.display())
            }
            Self::UnnamedSnippet { path } => {
                write!(f, "snippet has no name: {}", path.display())
            }
            Self::SeparatorInContent { count } => write!(
                f,
                "removed {count} separator line(s) from generated content"
            ),
            Self::UnmarkedOutputReplaced { path } => write!(
                f,
                "{} had no separator line; its previous content was replaced",
                path.display()
            ),
            Self::OutputTracked { path } => write!(
                f,
                "{} is not ignored by git; generated content will be committed",
                path.display()
            ),
        }
    }
}
