//! Front matter detection and metadata extraction

use anyhow::{Context, Result};
use ropey::Rope;
use serde::Deserialize;
use std::fmt;

/// Front matter syntaxes found at the top of content files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterKind {
    Yaml,
    Toml,
}

impl FrontMatterKind {
    fn as_str(&self) -> &'static str {
        match self {
            FrontMatterKind::Yaml => "yaml",
            FrontMatterKind::Toml => "toml",
        }
    }

    fn marker(&self) -> &'static str {
        match self {
            FrontMatterKind::Yaml => "---",
            FrontMatterKind::Toml => "+++",
        }
    }
}

impl fmt::Display for FrontMatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of a front matter block, marker lines included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter {
    pub kind: FrontMatterKind,
    pub start_line: usize,
    pub end_line: usize,
}

impl FrontMatter {
    /// Text between the opening and closing markers
    pub fn raw(&self, rope: &Rope) -> String {
        let start = rope.line_to_char(self.start_line + 1);
        let end = rope.line_to_char(self.end_line);
        rope.slice(start..end).to_string()
    }

    /// Everything after the closing marker line
    pub fn body(&self, rope: &Rope) -> String {
        let start = rope.line_to_char((self.end_line + 1).min(rope.len_lines()));
        rope.slice(start..).to_string()
    }

    /// Parse the block into the metadata fields used for comparisons
    pub fn parse(&self, rope: &Rope) -> Result<Metadata> {
        let raw = self.raw(rope);
        if raw.trim().is_empty() {
            return Ok(Metadata::default());
        }

        match self.kind {
            FrontMatterKind::Yaml => serde_yaml::from_str(&raw)
                .with_context(|| format!("Failed to parse {} front matter", self.kind)),
            FrontMatterKind::Toml => toml::from_str(&raw)
                .with_context(|| format!("Failed to parse {} front matter", self.kind)),
        }
    }
}

/// Metadata keys read from front matter; unknown keys are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub title: String,
    pub slug: String,
    pub l10n: Option<L10nMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct L10nMetadata {
    pub source_commit: Option<String>,
}

impl Metadata {
    pub fn source_commit(&self) -> Option<&str> {
        self.l10n.as_ref()?.source_commit.as_deref()
    }
}

const KINDS: [FrontMatterKind; 2] = [FrontMatterKind::Yaml, FrontMatterKind::Toml];

/// Detect a front matter block starting on the first line
pub fn detect_front_matter(rope: &Rope) -> Option<FrontMatter> {
    if rope.len_lines() == 0 {
        return None;
    }

    let first = normalize_line(&rope.line(0));
    let kind = KINDS.into_iter().find(|kind| first == kind.marker())?;

    (1..rope.len_lines())
        .find(|&idx| normalize_line(&rope.line(idx)) == kind.marker())
        .map(|end_line| FrontMatter {
            kind,
            start_line: 0,
            end_line,
        })
}

fn normalize_line(line: &ropey::RopeSlice<'_>) -> String {
    let content: String = line.chunks().collect();
    content.trim().trim_start_matches('\u{feff}').to_string()
}
