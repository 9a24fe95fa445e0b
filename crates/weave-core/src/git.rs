//! Git ignore check for the generated document.

use std::path::{Path, PathBuf};

use crate::warning::Warning;

/// Warn when `output` sits inside a git work tree and is not ignored.
///
/// Returns `None` outside a git repository, for bare repositories, for paths
/// outside the work tree, and when git cannot answer.
pub fn check_gitignore(workspace: &Path, output: &Path) -> Option<Warning> {
    let repo = match git2::Repository::discover(workspace) {
        Ok(repo) => repo,
        Err(e) => {
            tracing::debug!(workspace = %workspace.display(), "Not a git repository: {e}");
            return None;
        }
    };
    let workdir = dunce::canonicalize(repo.workdir()?).ok()?;

    let absolute = if output.is_absolute() {
        output.to_path_buf()
    } else {
        workspace.join(output)
    };
    let absolute = canonicalize_lenient(&absolute);
    let relative = absolute.strip_prefix(&workdir).ok()?;

    match repo.is_path_ignored(relative) {
        Ok(true) => None,
        Ok(false) => Some(Warning::OutputTracked { path: absolute }),
        Err(e) => {
            tracing::debug!(path = %relative.display(), "git ignore lookup failed: {e}");
            None
        }
    }
}

/// Canonicalize the parent when the file itself does not exist yet.
fn canonicalize_lenient(path: &Path) -> PathBuf {
    if let Ok(path) = dunce::canonicalize(path) {
        return path;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => canonicalize_lenient(parent).join(name),
        _ => path.to_path_buf(),
    }
}
