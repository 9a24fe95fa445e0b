//! The full regeneration pipeline.
//!
//! Load tiers, assemble the include list, merge with the existing output and
//! write the result atomically when it changed. Every fatal condition is
//! detected before the write, so a failed run leaves the output untouched.

use std::path::PathBuf;

use serde::Serialize;
use weave_fs::io;

use crate::assembler::Assembler;
use crate::error::{Error, Result};
use crate::library::Library;
use crate::merge::{DEFAULT_SEPARATOR, check_separator, merge, split_trailer};
use crate::provenance::{Stamp, parse_stamps, stale_sources};
use crate::tier::Tier;
use crate::warning::Warning;

/// Inputs of one regeneration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Highest priority first.
    pub tiers: Vec<Tier>,
    /// Snippet names in output order.
    pub include: Vec<String>,
    pub output: PathBuf,
    pub separator: String,
    pub provenance: bool,
    /// Compute everything, write nothing.
    pub dry_run: bool,
}

impl Invocation {
    pub fn new(tiers: Vec<Tier>, include: Vec<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            tiers,
            include,
            output: output.into(),
            separator: DEFAULT_SEPARATOR.to_string(),
            provenance: false,
            dry_run: false,
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_provenance(mut self, provenance: bool) -> Self {
        self.provenance = provenance;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Overall outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No warnings.
    Clean,
    /// Output produced, but something was reported.
    Partial,
}

/// What a regeneration did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub output: PathBuf,
    pub included: Vec<String>,
    pub missing: Vec<String>,
    pub warnings: Vec<Warning>,
    /// The computed document differs from the existing one.
    pub changed: bool,
    /// The output file was written during this run.
    pub written: bool,
    /// With provenance on: sources whose stamp is missing or outdated in
    /// the existing document.
    pub stale: Vec<String>,
    #[serde(skip)]
    pub document: String,
    #[serde(skip)]
    pub previous: Option<String>,
}

impl Report {
    pub fn status(&self) -> Status {
        if self.warnings.is_empty() {
            Status::Clean
        } else {
            Status::Partial
        }
    }
}

/// Regenerate the document described by `invocation`.
///
/// # Errors
///
/// Fails, without touching the output, when the separator is not a single
/// non-blank line, when a required tier is unusable, when the existing output
/// cannot be read, or when the write fails.
///
/// An empty include list needs no snippets, so tiers are not read and the
/// run always produces the separator-only document.
pub fn regenerate(invocation: &Invocation) -> Result<Report> {
    check_separator(&invocation.separator)?;

    let library = if invocation.include.is_empty() {
        tracing::debug!("Empty include list, skipping tier load");
        Library::default()
    } else {
        Library::load(&invocation.tiers)?
    };
    let assembly = Assembler::new(&library)
        .with_provenance(invocation.provenance)
        .assemble(&invocation.include);

    let output = &invocation.output;
    let previous = io::read_optional(output).map_err(|source| Error::OutputUnreadable {
        path: output.clone(),
        source,
    })?;

    let merged = merge(&assembly.text, previous.as_deref(), &invocation.separator);

    let mut warnings = assembly.warnings;
    if merged.removed_separators > 0 {
        let warning = Warning::SeparatorInContent {
            count: merged.removed_separators,
        };
        tracing::warn!("{warning}");
        warnings.push(warning);
    }
    if !merged.had_separator && previous.as_deref().is_some_and(|doc| !doc.trim().is_empty()) {
        let warning = Warning::UnmarkedOutputReplaced {
            path: output.clone(),
        };
        tracing::warn!("{warning}");
        warnings.push(warning);
    }

    let stale = match (invocation.provenance, previous.as_deref()) {
        (false, _) => Vec::new(),
        (true, Some(doc)) => recorded_stale(doc, &invocation.separator, &assembly.stamps),
        (true, None) => assembly.stamps.iter().map(|s| s.source.clone()).collect(),
    };

    let written = if !merged.changed {
        tracing::info!(path = %output.display(), "Output unchanged, skipping write");
        false
    } else if invocation.dry_run {
        tracing::info!(path = %output.display(), "[dry-run] Would write output");
        false
    } else {
        io::write_text(output, &merged.document).map_err(|source| Error::OutputUnwritable {
            path: output.clone(),
            source,
        })?;
        tracing::info!(
            path = %output.display(),
            snippets = assembly.included.len(),
            "Wrote generated document"
        );
        true
    };

    Ok(Report {
        output: output.clone(),
        included: assembly.included,
        missing: assembly.missing,
        warnings,
        changed: merged.changed,
        written,
        stale,
        document: merged.document,
        previous,
    })
}

/// Stale sources judged from the stamps recorded above the separator.
fn recorded_stale(document: &str, separator: &str, current: &[Stamp]) -> Vec<String> {
    let generated = split_trailer(document, separator)
        .map(|(above, _)| above)
        .unwrap_or_default();
    stale_sources(&parse_stamps(generated), current)
}
