//! Library discovery across tiers.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::library::Library;
use crate::snippet::SnippetSummary;
use crate::tier::Tier;
use crate::warning::Warning;

/// Result of a discovery scan.
#[derive(Debug, Clone, Default)]
pub struct Scan {
    /// One entry per distinct name, sorted by name.
    pub snippets: Vec<SnippetSummary>,
    pub warnings: Vec<Warning>,
}

/// Enumerate every snippet visible through `tiers`.
///
/// Shadowing follows resolution: for each name the highest-priority tier wins.
/// Malformed and unnamed files are reported as warnings and left out.
pub fn scan(tiers: &[Tier]) -> Result<Scan> {
    let library = Library::load(tiers)?;
    Ok(scan_library(&library))
}

/// Summarise an already loaded library.
pub fn scan_library(library: &Library) -> Scan {
    let mut by_name: BTreeMap<&str, SnippetSummary> = BTreeMap::new();
    for index in library.tiers() {
        for snippet in index.snippets() {
            by_name
                .entry(snippet.name.as_str())
                .or_insert_with(|| snippet.summary());
        }
    }

    Scan {
        snippets: by_name.into_values().collect(),
        warnings: library.warnings().to_vec(),
    }
}
