//! Provenance stamps for generated snippet bodies.
//!
//! With provenance enabled every body in the generated region is preceded by
//! a comment that records where it came from:
//!
//! ```text
//! <!-- prompt-weave:line 5 "workspace:base.md" sha256 <64 hex chars> -->
//! ```
//!
//! The stamp is invisible when the Markdown is rendered. The digest covers
//! the raw bytes of the source file, so a later run can tell which snippets
//! changed since the document was generated.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::snippet::Snippet;

static STAMP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^<!-- prompt-weave:line (\d+) "([^"]*)" sha256 ([0-9a-f]{64}) -->$"#)
        .expect("Invalid stamp regex")
});

/// Origin of one generated body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stamp {
    /// 1-based line where the body starts in the source file.
    pub line: usize,
    /// `<tier>:<file name>` label.
    pub source: String,
    /// SHA-256 hex digest of the source file.
    pub digest: String,
}

impl Stamp {
    pub fn for_snippet(snippet: &Snippet) -> Self {
        Self {
            line: snippet.body_line,
            source: snippet.source.clone(),
            digest: snippet.digest.clone(),
        }
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<!-- prompt-weave:line {} \"{}\" sha256 {} -->",
            self.line, self.source, self.digest
        )
    }
}

/// Extract stamps from `text`, in order of appearance.
///
/// Lines that look similar but lack a valid digest are ignored.
pub fn parse_stamps(text: &str) -> Vec<Stamp> {
    text.lines()
        .filter_map(|line| {
            let caps = STAMP_REGEX.captures(line.trim_end_matches('\r'))?;
            Some(Stamp {
                line: caps[1].parse().ok()?,
                source: caps[2].to_string(),
                digest: caps[3].to_string(),
            })
        })
        .collect()
}

/// Sources in `current` whose exact stamp is absent from `recorded`.
///
/// An empty result with equal lengths means the recorded document was
/// generated from the same source files in the same order.
pub fn stale_sources(recorded: &[Stamp], current: &[Stamp]) -> Vec<String> {
    current
        .iter()
        .filter(|stamp| {
            !recorded
                .iter()
                .any(|r| r.source == stamp.source && r.digest == stamp.digest)
        })
        .map(|stamp| stamp.source.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(source: &str, fill: char) -> Stamp {
        Stamp {
            line: 4,
            source: source.to_string(),
            digest: fill.to_string().repeat(64),
        }
    }

    #[test]
    fn display_then_parse() {
        let original = stamp("workspace:base.md", 'a');
        let text = format!("{original}\nBody\n");

        assert_eq!(parse_stamps(&text), vec![original]);
    }

    #[test]
    fn ignores_stamp_without_digest() {
        let text = "<!-- prompt-weave:line 3 \"builtin:base.md\" -->\nBody";
        assert!(parse_stamps(text).is_empty());
    }

    #[test]
    fn ignores_short_digest() {
        let text = "<!-- prompt-weave:line 3 \"builtin:base.md\" sha256 abc -->";
        assert!(parse_stamps(text).is_empty());
    }

    #[test]
    fn stale_sources_reports_changed_digest() {
        let recorded = vec![stamp("builtin:a.md", 'a'), stamp("builtin:b.md", 'b')];
        let current = vec![stamp("builtin:a.md", 'a'), stamp("builtin:b.md", 'c')];

        assert_eq!(stale_sources(&recorded, &current), vec!["builtin:b.md"]);
    }

    #[test]
    fn stale_sources_empty_when_unchanged() {
        let recorded = vec![stamp("user:a.md", 'a')];
        assert!(stale_sources(&recorded, &recorded.clone()).is_empty());
    }
}
