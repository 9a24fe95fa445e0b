//! [`SnippetLibrary`] fixture for snippet tier scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Render a snippet file with a minimal front matter block.
///
/// The body is separated from the closing fence by one blank line, the way
/// snippet files are usually written by hand.
pub fn snippet_source(name: &str, body: &str) -> String {
    format!("---\nname: {name}\ndescription: {name} snippet\ntags: []\n---\n\n{body}")
}

/// A temporary directory holding snippet tiers and a workspace.
///
/// # Example
///
/// ```rust,no_run
/// use weave_test_utils::SnippetLibrary;
///
/// let lib = SnippetLibrary::new();
/// lib.write_snippet("builtin", "base", "## Base rules");
/// lib.write_snippet("workspace", "base", "## Workspace rules");
/// assert!(lib.tier("builtin").join("base.md").exists());
/// ```
pub struct SnippetLibrary {
    temp_dir: TempDir,
}

impl Default for SnippetLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl SnippetLibrary {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the tier directory `name`, created on first use.
    pub fn tier(&self, name: &str) -> PathBuf {
        let dir = self.root().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write `<tier>/<name>.md` with front matter naming it `name`.
    pub fn write_snippet(&self, tier: &str, name: &str, body: &str) -> PathBuf {
        self.write_raw(tier, &format!("{name}.md"), &snippet_source(name, body))
    }

    /// Write `<tier>/<file>` with front matter naming it `name`.
    pub fn write_named(&self, tier: &str, file: &str, name: &str, body: &str) -> PathBuf {
        self.write_raw(tier, file, &snippet_source(name, body))
    }

    /// Write `<tier>/<file>` verbatim.
    pub fn write_raw(&self, tier: &str, file: &str, content: &str) -> PathBuf {
        let path = self.tier(tier).join(file);
        fs::write(&path, content).unwrap();
        path
    }

    /// Path relative to the root; nothing is created.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Read a file relative to the root.
    ///
    /// # Panics
    /// Panics with the path if the file cannot be read.
    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
    }

    /// Write a file relative to the root, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Initialise the root as a git repository using `git2`.
    pub fn init_git(&self) {
        git2::Repository::init(self.root())
            .expect("SnippetLibrary::init_git: failed to init git repository");
    }
}
