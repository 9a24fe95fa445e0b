//! Snippet assembly engine for prompt-weave.
//!
//! Builds a Markdown document from a library of reusable snippets while
//! keeping a user-owned region below a fixed separator line intact across
//! regenerations.
//!
//! # Pipeline
//!
//! 1. [`Library::load`] reads every [`Tier`] once, highest priority first,
//!    splitting each file with [`split_front_matter`].
//! 2. [`Assembler`] resolves the include list in order and joins the bodies
//!    with one blank line between them.
//! 3. [`merge`] combines the assembled text with the trailer of the existing
//!    document.
//! 4. [`regenerate`] ties the steps together and writes the output atomically
//!    when it changed.
//!
//! Recoverable problems (missing snippets, duplicate names, malformed front
//! matter) are returned as [`Warning`]s. Only unusable tiers and output I/O
//! failures are [`Error`]s.

pub mod assembler;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod git;
pub mod library;
pub mod merge;
pub mod provenance;
pub mod regenerate;
pub mod resolver;
pub mod scanner;
pub mod snippet;
pub mod tier;
pub mod warning;

pub use assembler::{Assembler, Assembly, assemble};
pub use config::{WeaveConfig, WorkspaceLayout};
pub use error::{Error, Result};
pub use frontmatter::{FrontMatter, Metadata, SnippetMetadataError, split_front_matter};
pub use git::check_gitignore;
pub use library::{Library, TierIndex};
pub use merge::{DEFAULT_SEPARATOR, Merged, check_separator, merge, split_trailer};
pub use provenance::{Stamp, parse_stamps, stale_sources};
pub use regenerate::{Invocation, Report, Status, regenerate};
pub use resolver::{Resolution, Resolved, resolve};
pub use scanner::{Scan, scan, scan_library};
pub use snippet::{Snippet, SnippetSummary};
pub use tier::{Tier, TierKind};
pub use warning::Warning;
