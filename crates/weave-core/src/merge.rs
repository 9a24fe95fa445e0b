//! Merging generated content with the user-owned trailer.
//!
//! A generated document looks like:
//!
//! ```text
//! <assembled snippet bodies>
//! <separator line>
//! <trailer>
//! ```
//!
//! Everything below the first separator line belongs to the user and is
//! carried over byte for byte. Everything above it is replaced.

use std::borrow::Cow;

use crate::error::{Error, Result};

/// The default separator: an HTML comment, invisible when rendered.
pub const DEFAULT_SEPARATOR: &str = "<!-- prompt-weave:generated - do not edit above this line -->";

/// Result of a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
    pub document: String,
    /// False when `document` equals the existing document byte for byte.
    pub changed: bool,
    /// Whether the existing document contained the separator line.
    pub had_separator: bool,
    /// Separator lines dropped from the assembled text.
    pub removed_separators: usize,
}

/// Reject separators that [`split_trailer`] could never find again.
///
/// A separator must be one non-blank line without `\r` or `\n`.
pub fn check_separator(separator: &str) -> Result<()> {
    if separator.trim().is_empty() || separator.contains(['\n', '\r']) {
        return Err(Error::InvalidSeparator {
            separator: separator.to_string(),
        });
    }
    Ok(())
}

/// Split `document` at the first line that equals `separator`.
///
/// Returns the region above the separator line and the trailer below it.
/// The trailer starts right after the separator's line ending and keeps its
/// formatting verbatim. `None` when no such line exists.
pub fn split_trailer<'a>(document: &'a str, separator: &str) -> Option<(&'a str, &'a str)> {
    let mut offset = 0;
    for line in document.split_inclusive('\n') {
        if line_content(line) == separator {
            return Some((&document[..offset], &document[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Build the final document from freshly assembled text and the previous
/// document, if any.
///
/// Without a previous document, or when it lacks the separator line, the
/// trailer is empty and the previous content is discarded. Merging the
/// engine's own output again with the same assembled text reproduces it
/// exactly.
pub fn merge(assembled: &str, existing: Option<&str>, separator: &str) -> Merged {
    let (assembled, removed_separators) = remove_separator_lines(assembled, separator);

    let split = existing.and_then(|doc| split_trailer(doc, separator));
    let trailer = split.map(|(_, trailer)| trailer).unwrap_or_default();

    let mut document =
        String::with_capacity(assembled.len() + separator.len() + trailer.len() + 2);
    if !assembled.is_empty() {
        document.push_str(&assembled);
        document.push('\n');
    }
    document.push_str(separator);
    document.push('\n');
    document.push_str(trailer);

    let changed = existing != Some(document.as_str());
    Merged {
        document,
        changed,
        had_separator: split.is_some(),
        removed_separators,
    }
}

/// Drop lines equal to `separator` so it appears exactly once above the trailer.
fn remove_separator_lines<'a>(text: &'a str, separator: &str) -> (Cow<'a, str>, usize) {
    let count = text
        .split_inclusive('\n')
        .filter(|line| line_content(line) == separator)
        .count();
    if count == 0 {
        return (Cow::Borrowed(text), 0);
    }

    let kept: String = text
        .split_inclusive('\n')
        .filter(|line| line_content(line) != separator)
        .collect();
    let kept = kept.trim_end_matches(['\n', '\r']).to_string();
    (Cow::Owned(kept), count)
}

fn line_content(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const SEP: &str = DEFAULT_SEPARATOR;

    #[test]
    fn fresh_document() {
        let merged = merge("Body", None, SEP);
        assert_eq!(merged.document, format!("Body\n{SEP}\n"));
        assert!(merged.changed);
        assert!(!merged.had_separator);
    }

    #[test]
    fn preserves_trailer_verbatim() {
        let prior = format!("OLD_BODY\n{SEP}\nUser wrote this.\n");
        let merged = merge("NEW_BODY", Some(&prior), SEP);
        assert_eq!(merged.document, format!("NEW_BODY\n{SEP}\nUser wrote this.\n"));
        assert!(merged.had_separator);
    }

    #[test]
    fn trailer_keeps_leading_blank_line_and_missing_final_newline() {
        let prior = format!("old\n{SEP}\n\n  indented notes");
        let merged = merge("new", Some(&prior), SEP);
        assert_eq!(merged.document, format!("new\n{SEP}\n\n  indented notes"));
    }

    #[test]
    fn no_separator_discards_prior_content() {
        let merged = merge("Body", Some("hand written file\n"), SEP);
        assert_eq!(merged.document, format!("Body\n{SEP}\n"));
        assert!(!merged.had_separator);
        assert!(merged.changed);
    }

    #[test]
    fn idempotent_on_own_output() {
        let first = merge("A\n\nB", None, SEP);
        let second = merge("A\n\nB", Some(&first.document), SEP);
        assert_eq!(second.document, first.document);
        assert!(!second.changed);
    }

    #[test]
    fn empty_assembly_writes_separator_only() {
        let merged = merge("", None, SEP);
        assert_eq!(merged.document, format!("{SEP}\n"));
    }

    #[test]
    fn only_first_separator_splits() {
        let prior = format!("gen\n{SEP}\nnotes\n{SEP}\nmore\n");
        let (above, trailer) = split_trailer(&prior, SEP).unwrap();
        assert_eq!(above, "gen\n");
        assert_eq!(trailer, format!("notes\n{SEP}\nmore\n"));
    }

    #[test]
    fn separator_must_be_whole_line() {
        let prior = format!("text {SEP}\nnotes\n");
        assert!(split_trailer(&prior, SEP).is_none());
    }

    #[test]
    fn crlf_separator_line_is_recognised() {
        let prior = format!("gen\r\n{SEP}\r\nnotes\r\n");
        let merged = merge("gen", Some(&prior), SEP);
        assert_eq!(merged.document, format!("gen\n{SEP}\nnotes\r\n"));
    }

    #[test]
    fn separator_inside_assembled_text_is_removed() {
        let merged = merge(&format!("A\n{SEP}\nB"), None, SEP);
        assert_eq!(merged.document, format!("A\nB\n{SEP}\n"));
        assert_eq!(merged.removed_separators, 1);
    }

    #[test]
    fn separator_at_end_of_file_without_newline() {
        let prior = format!("gen\n{SEP}");
        let (_, trailer) = split_trailer(&prior, SEP).unwrap();
        assert_eq!(trailer, "");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("<!-- cut\n-->")]
    #[case("<!-- cut -->\r")]
    #[case("\n<!-- cut -->")]
    fn unmatchable_separator_is_rejected(#[case] separator: &str) {
        let err = check_separator(separator).unwrap_err();
        assert!(matches!(err, Error::InvalidSeparator { separator: s } if s == separator));
    }

    #[rstest]
    #[case(DEFAULT_SEPARATOR)]
    #[case("<!-- cut -->")]
    #[case("---8<---")]
    fn single_line_separator_is_accepted(#[case] separator: &str) {
        assert!(check_separator(separator).is_ok());
    }
}
