//! Concatenation of resolved snippet bodies.

use crate::error::Result;
use crate::library::Library;
use crate::provenance::Stamp;
use crate::tier::Tier;
use crate::warning::Warning;

/// Bodies are joined by exactly one blank line.
const BODY_SEPARATOR: &str = "\n\n";

/// Output of an assembly run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assembly {
    /// Joined bodies, no leading or trailing whitespace.
    pub text: String,
    /// Names that resolved, in include order.
    pub included: Vec<String>,
    /// Names that did not resolve, in include order.
    pub missing: Vec<String>,
    /// Provenance of each included body, in include order.
    pub stamps: Vec<Stamp>,
    /// Library warnings followed by one `SnippetNotFound` per missing name.
    pub warnings: Vec<Warning>,
}

/// Joins snippets from a loaded [`Library`] in caller order.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    library: &'a Library,
    provenance: bool,
}

impl<'a> Assembler<'a> {
    pub fn new(library: &'a Library) -> Self {
        Self {
            library,
            provenance: false,
        }
    }

    /// Prefix every body with its provenance stamp.
    pub fn with_provenance(mut self, provenance: bool) -> Self {
        self.provenance = provenance;
        self
    }

    /// Assemble `include` in order.
    ///
    /// Unresolved names are skipped with a warning. Repeated names repeat
    /// their content. Each body is trimmed; bodies that are empty after
    /// trimming contribute nothing unless a stamp is emitted for them.
    pub fn assemble<S: AsRef<str>>(&self, include: &[S]) -> Assembly {
        let mut assembly = Assembly {
            warnings: self.library.warnings().to_vec(),
            ..Assembly::default()
        };
        let mut pieces: Vec<String> = Vec::new();

        for name in include {
            let name = name.as_ref();
            let Some(snippet) = self.library.resolve(name) else {
                let warning = Warning::SnippetNotFound {
                    name: name.to_string(),
                };
                tracing::warn!("{warning}");
                assembly.missing.push(name.to_string());
                assembly.warnings.push(warning);
                continue;
            };

            let stamp = Stamp::for_snippet(snippet);
            let body = snippet.body.trim();
            let piece = match (self.provenance, body.is_empty()) {
                (true, true) => stamp.to_string(),
                (true, false) => format!("{stamp}\n{body}"),
                (false, _) => body.to_string(),
            };
            if !piece.is_empty() {
                pieces.push(piece);
            }

            assembly.included.push(name.to_string());
            assembly.stamps.push(stamp);
        }

        assembly.text = pieces.join(BODY_SEPARATOR);
        assembly
    }
}

/// Resolve and join `include` against `tiers`.
///
/// Returns the joined text and every warning raised on the way. A missing
/// snippet never aborts the run; only an unusable required tier does. An
/// empty include list reads no tiers and yields empty text.
pub fn assemble<S: AsRef<str>>(include: &[S], tiers: &[Tier]) -> Result<(String, Vec<Warning>)> {
    if include.is_empty() {
        return Ok((String::new(), Vec::new()));
    }
    let library = Library::load(tiers)?;
    let assembly = Assembler::new(&library).assemble(include);
    Ok((assembly.text, assembly.warnings))
}
