//! Block segmentation of markdown documents
//!
//! A document is cut into an ordered list of blocks, either on blank lines or
//! on every line break. The markdown-aware modes refine that first cut so that
//! quoted paragraphs and list items land on the same index in both documents
//! of a comparison.

use anyhow::{bail, Error};
use log::debug;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A contiguous piece of a document.
///
/// Pieces that come straight out of the delimiter split borrow from the
/// document; normalized blockquote blocks are owned.
pub type Block<'a> = Cow<'a, str>;

/// Where block boundaries fall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitStrategy {
    /// Split on blank lines (`"\n\n"`)
    DoubleBreak,
    /// Split on every line break (`"\n"`)
    SingleBreak,
}

impl SplitStrategy {
    /// The literal delimiter used for the first cut
    pub fn delimiter(&self) -> &'static str {
        match self {
            SplitStrategy::DoubleBreak => "\n\n",
            SplitStrategy::SingleBreak => "\n",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            SplitStrategy::DoubleBreak => "double",
            SplitStrategy::SingleBreak => "single",
        }
    }
}

impl fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "double" | "doublebreak" => Ok(SplitStrategy::DoubleBreak),
            "single" | "singlebreak" => Ok(SplitStrategy::SingleBreak),
            other => bail!("Unknown split strategy '{}' (expected 'double' or 'single')", other),
        }
    }
}

/// A split strategy together with the markdown refinement switch.
///
/// Exactly one mode drives both sides of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitMode {
    pub strategy: SplitStrategy,
    pub markdown: bool,
}

impl SplitMode {
    pub fn new(strategy: SplitStrategy, markdown: bool) -> Self {
        Self { strategy, markdown }
    }

    /// Plain delimiter split, no markdown refinement
    pub fn plain(strategy: SplitStrategy) -> Self {
        Self::new(strategy, false)
    }

    /// Delimiter split followed by the markdown refinement pass
    pub fn markdown(strategy: SplitStrategy) -> Self {
        Self::new(strategy, true)
    }

    /// Whether the aligner adds continuation and spacer rows in this mode
    pub fn emits_layout_rows(&self) -> bool {
        self.markdown && self.strategy == SplitStrategy::DoubleBreak
    }
}

impl Default for SplitMode {
    fn default() -> Self {
        Self::markdown(SplitStrategy::DoubleBreak)
    }
}

/// Anything that can cut a document into blocks
pub trait Segmenter {
    fn segment<'a>(&self, content: &'a str) -> Vec<Block<'a>>;
}

impl Segmenter for SplitMode {
    fn segment<'a>(&self, content: &'a str) -> Vec<Block<'a>> {
        segment(content, *self)
    }
}

/// Split `content` into blocks according to `mode`
pub fn segment(content: &str, mode: SplitMode) -> Vec<Block<'_>> {
    let pieces = content.split(mode.strategy.delimiter());

    let blocks: Vec<Block<'_>> = if !mode.markdown {
        pieces.map(Cow::Borrowed).collect()
    } else {
        match mode.strategy {
            SplitStrategy::DoubleBreak => pieces.flat_map(regroup_blockquotes).collect(),
            SplitStrategy::SingleBreak => pieces.flat_map(split_markdown_boundaries).collect(),
        }
    };

    debug!(
        "segmented {} bytes into {} blocks ({}, markdown: {})",
        content.len(),
        blocks.len(),
        mode.strategy,
        mode.markdown
    );

    blocks
}

/// Re-scan one blank-line block, normalizing blockquote markers to `"> "`.
///
/// Lines that are empty after marker stripping separate sub-blocks. A block
/// made only of such lines yields nothing.
fn regroup_blockquotes(block: &str) -> Vec<Block<'_>> {
    let mut result: Vec<Block<'_>> = Vec::new();
    let mut current = String::new();

    for line in block.split('\n') {
        let trimmed = trim_blank(line);
        let quote = trimmed.strip_prefix('>').map(trim_blank);
        let payload = quote.unwrap_or(line);

        if payload.is_empty() {
            if !current.is_empty() {
                result.push(Cow::Owned(std::mem::take(&mut current)));
            }
            continue;
        }

        if !current.is_empty() {
            current.push('\n');
        }
        if quote.is_some() {
            current.push_str("> ");
        }
        current.push_str(payload);
    }

    if !current.is_empty() {
        result.push(Cow::Owned(current));
    }

    // Untouched blocks keep borrowing from the document
    if let [only] = result.as_slice() {
        if only.as_ref() == block {
            return vec![Cow::Borrowed(block)];
        }
    }

    result
}

/// Split one piece in front of list items and blockquote lines.
///
/// The newline before a list item is dropped; the newline before a
/// blockquote line stays at the front of the following piece.
fn split_markdown_boundaries(piece: &str) -> Vec<Block<'_>> {
    let lines: Vec<&str> = piece.split('\n').collect();
    let mut result = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for (k, line) in lines.iter().enumerate() {
        if k > 0 {
            // `offset` points at the newline that ends line k-1
            if list_item_follows(&lines[k..]) {
                result.push(Cow::Borrowed(&piece[start..offset]));
                start = offset + 1;
            } else if line.starts_with('>') {
                result.push(Cow::Borrowed(&piece[start..offset]));
                start = offset;
            }
            offset += 1;
        }
        offset += line.len();
    }

    result.push(Cow::Borrowed(&piece[start..]));
    result
}

/// Trim whitespace and stray byte order marks from both ends
pub(crate) fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// True when the remaining lines, after skipping whitespace, open with `- `
fn list_item_follows(rest: &[&str]) -> bool {
    for line in rest {
        let content = line.trim_start();
        if content.is_empty() {
            continue;
        }
        return content.starts_with("- ");
    }
    false
}
