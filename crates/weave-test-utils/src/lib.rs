//! Shared test utilities for the prompt-weave workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`library`] - [`SnippetLibrary`](library::SnippetLibrary) fixture with
//!   tier directories and snippet files under a temporary root

pub mod library;

pub use library::{SnippetLibrary, snippet_source};
