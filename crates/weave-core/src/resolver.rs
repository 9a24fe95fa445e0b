//! Snippet resolution across ranked tiers.
//!
//! Names are matched against the `name` metadata key, not the file name.
//! Tiers are consulted in order and the first tier defining the name wins.
//! Every tier is read once up front through [`Library::load`], the same path
//! the assembler uses, so a missing required tier fails regardless of where
//! the name is found.

use crate::error::Result;
use crate::library::Library;
use crate::snippet::Snippet;
use crate::tier::Tier;
use crate::warning::Warning;

/// Outcome of resolving one name.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(Box<Snippet>),
    NotFound(String),
}

impl Resolution {
    pub fn snippet(&self) -> Option<&Snippet> {
        match self {
            Self::Found(snippet) => Some(snippet),
            Self::NotFound(_) => None,
        }
    }

    pub fn into_snippet(self) -> Option<Snippet> {
        match self {
            Self::Found(snippet) => Some(*snippet),
            Self::NotFound(_) => None,
        }
    }
}

/// A resolution plus the warnings raised while reading the tiers it touched.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub resolution: Resolution,
    pub warnings: Vec<Warning>,
}

/// Resolve `name` against `tiers`, highest priority first.
///
/// # Errors
///
/// Fails only when a required tier is missing or unreadable. `NotFound` is a
/// normal outcome.
pub fn resolve(name: &str, tiers: &[Tier]) -> Result<Resolved> {
    let library = Library::load(tiers)?;
    let resolution = match library.resolve(name) {
        Some(snippet) => Resolution::Found(Box::new(snippet.clone())),
        None => Resolution::NotFound(name.to_string()),
    };
    Ok(Resolved {
        resolution,
        warnings: library.warnings().to_vec(),
    })
}
