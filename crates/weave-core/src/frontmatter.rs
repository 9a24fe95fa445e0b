//! Front matter parsing for snippet files.
//!
//! A snippet may begin with a metadata block fenced by `---` lines:
//!
//! ```text
//! ---
//! name: rust-style
//! description: House rules for Rust code
//! tags: [rust, style]
//! version: 2
//! ---
//!
//! Prefer `?` over `unwrap()`.
//! ```
//!
//! The block is a flat YAML mapping. At most one blank line after the closing
//! fence is stripped from the body; everything else is kept verbatim.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

/// The line that opens and closes a metadata block.
pub const FENCE: &str = "---";

/// Byte order mark some editors put at the start of UTF-8 files.
const BOM: char = '\u{feff}';

/// Metadata keys carried by a snippet.
///
/// Unknown keys are kept in `extra` and passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "one_or_many")]
    pub tags: Vec<String>,

    /// Opaque integer, never interpreted.
    #[serde(default)]
    pub version: Option<i64>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Metadata {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A metadata block that is present but malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid front matter in {path}: {message}")]
pub struct SnippetMetadataError {
    pub path: PathBuf,
    pub message: String,
}

/// A file split into its metadata and body.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter<'a> {
    pub metadata: Metadata,
    pub body: &'a str,
    /// 1-based line of the source file where `body` starts.
    pub body_line: usize,
}

/// Split `text` into metadata and body.
///
/// A leading byte order mark is ignored when looking for the opening fence.
/// Without a leading fence the metadata is empty and the body is `text`
/// unchanged. An opening fence with no closing fence, or a block that is not
/// a valid flat mapping, is an error naming `path`.
pub fn split_front_matter<'a>(
    path: &Path,
    text: &'a str,
) -> Result<FrontMatter<'a>, SnippetMetadataError> {
    let fail = |message: String| SnippetMetadataError {
        path: path.to_path_buf(),
        message,
    };

    let content = text.strip_prefix(BOM).unwrap_or(text);
    let mut lines = content.split_inclusive('\n');
    let Some(first) = lines.next().filter(|line| is_fence(line)) else {
        return Ok(FrontMatter {
            metadata: Metadata::default(),
            body: text,
            body_line: 1,
        });
    };

    let block_start = first.len();
    let mut offset = block_start;
    let mut line_no = 1;

    for line in lines {
        line_no += 1;
        if is_fence(line) {
            let metadata = parse_block(&content[block_start..offset]).map_err(fail)?;
            let mut body = &content[offset + line.len()..];
            let mut body_line = line_no + 1;
            if let Some(rest) = strip_blank_line(body) {
                body = rest;
                body_line += 1;
            }
            return Ok(FrontMatter {
                metadata,
                body,
                body_line,
            });
        }
        offset += line.len();
    }

    Err(fail("unterminated front matter block".to_string()))
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == FENCE
}

fn strip_blank_line(text: &str) -> Option<&str> {
    text.strip_prefix("\r\n").or_else(|| text.strip_prefix('\n'))
}

fn parse_block(block: &str) -> Result<Metadata, String> {
    if block.trim().is_empty() {
        return Ok(Metadata::default());
    }
    serde_yaml::from_str(block).map_err(|e| e.to_string())
}

/// Accepts `tags: rust`, `tags: [rust, style]` or an empty `tags:`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(tag)) => vec![tag],
        Some(OneOrMany::Many(tags)) => tags,
    })
}
