//! Markdown files loaded into a rope

use anyhow::{Context, Result};
use ropey::Rope;
use std::fs;
use std::path::{Path, PathBuf};

use crate::front_matter::{self, FrontMatter};

/// A markdown file read from disk
#[derive(Clone, Debug)]
pub struct Document {
    pub path: PathBuf,
    pub rope: Rope,
    pub front_matter: Option<FrontMatter>,
}

impl Document {
    /// Load a document from a file path
    pub fn load(path: &Path) -> Result<Self> {
        let abs_path = path
            .canonicalize()
            .with_context(|| format!("Failed to canonicalize path: {}", path.display()))?;

        let content = fs::read_to_string(&abs_path)
            .with_context(|| format!("Failed to read file: {}", abs_path.display()))?;

        Ok(Self::from_text(abs_path, &content))
    }

    /// Build a document from text already in memory
    pub fn from_text(path: impl Into<PathBuf>, content: &str) -> Self {
        let rope = Rope::from_str(content);
        let front_matter = front_matter::detect_front_matter(&rope);

        Self {
            path: path.into(),
            rope,
            front_matter,
        }
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Full text, front matter included
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Text after the front matter block, or the full text when there is none
    pub fn body(&self) -> String {
        match &self.front_matter {
            Some(fm) => fm.body(&self.rope),
            None => self.text(),
        }
    }
}
