//! Content entries handed to a comparison

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::doc::Document;

/// A content page and its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub slug: String,
    /// Commit of the source page this entry was translated from, or the
    /// current commit for a source entry
    pub source_commit: Option<String>,
    /// Raw markdown
    pub content: String,
}

impl Entry {
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            source_commit: None,
            content: content.into(),
        }
    }

    pub fn with_source_commit(mut self, commit: impl Into<String>) -> Self {
        self.source_commit = Some(commit.into());
        self
    }

    /// Build an entry from a loaded document, reading its front matter.
    ///
    /// With `skip_front_matter` the compared content starts after the
    /// closing marker.
    pub fn from_document(doc: &Document, skip_front_matter: bool) -> Result<Self> {
        let metadata = match &doc.front_matter {
            Some(fm) => fm
                .parse(&doc.rope)
                .with_context(|| format!("Invalid front matter in {}", doc.path.display()))?,
            None => Default::default(),
        };

        let content = if skip_front_matter {
            doc.body()
        } else {
            doc.text()
        };

        debug!(
            "loaded entry '{}' from {} ({} lines)",
            metadata.slug,
            doc.path.display(),
            doc.line_count()
        );

        Ok(Self {
            source_commit: metadata.source_commit().map(str::to_string),
            title: metadata.title,
            slug: metadata.slug,
            content,
        })
    }
}

/// An entry as supplied by whoever fetched it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySlot {
    Present(Entry),
    /// The page exists in the source but has no translation yet
    NotLocalized,
    /// The page could not be obtained
    Unavailable,
}

impl EntrySlot {
    /// Load a slot from disk.
    ///
    /// Only a missing file becomes `absent`; any other failure to reach the
    /// file is an error.
    pub fn load(path: &Path, absent: EntrySlot, skip_front_matter: bool) -> Result<Self> {
        match fs::metadata(path) {
            Ok(_) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist, treating as {:?}", path.display(), absent);
                return Ok(absent);
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to stat {}", path.display()));
            }
        }

        let doc = Document::load(path)?;
        Ok(EntrySlot::Present(Entry::from_document(&doc, skip_front_matter)?))
    }

    pub fn entry(&self) -> Option<&Entry> {
        match self {
            EntrySlot::Present(entry) => Some(entry),
            EntrySlot::NotLocalized | EntrySlot::Unavailable => None,
        }
    }

    pub fn is_present(&self) -> bool {
        self.entry().is_some()
    }
}

impl From<Entry> for EntrySlot {
    fn from(entry: Entry) -> Self {
        EntrySlot::Present(entry)
    }
}

impl From<Option<Entry>> for EntrySlot {
    fn from(entry: Option<Entry>) -> Self {
        entry.map_or(EntrySlot::NotLocalized, EntrySlot::Present)
    }
}
