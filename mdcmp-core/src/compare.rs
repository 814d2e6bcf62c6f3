//! Side-by-side comparison of a localized entry against its source

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::align::{align, Row};
use crate::entry::{Entry, EntrySlot};
use crate::segment::{Block, Segmenter, SplitMode};

/// Message shown instead of a comparison when an entry is missing
pub const UNAVAILABLE_MESSAGE: &str = "Entries are not available for comparison.";

/// Where source files live, for building "Link to File"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceRepo {
    pub org: String,
    pub repo: String,
    pub branch: String,
    /// Directory of the source locale inside the repository
    pub root: String,
}

impl Default for SourceRepo {
    fn default() -> Self {
        Self {
            org: "mdn".to_string(),
            repo: "content".to_string(),
            branch: "main".to_string(),
            root: "files/en-us".to_string(),
        }
    }
}

impl SourceRepo {
    /// GitHub URL of the `index.md` under `path`
    pub fn file_url(&self, path: &str) -> String {
        format!(
            "https://github.com/{}/{}/blob/{}/{}/{}/index.md",
            self.org,
            self.repo,
            self.branch,
            self.root.trim_matches('/'),
            path.trim_matches('/')
        )
    }
}

/// Everything a comparison needs besides the two entries
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    pub locale: String,
    pub mode: SplitMode,
    /// Repository-relative path of the source page
    pub path: Option<String>,
    pub source_repo: SourceRepo,
}

/// One labelled metadata line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub label: &'static str,
    pub value: String,
    /// Rendered as a link rather than as code
    pub link: bool,
}

impl Property {
    fn code(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            link: false,
        }
    }

    fn link(label: &'static str, url: String) -> Self {
        Self {
            label,
            value: url,
            link: true,
        }
    }
}

/// Metadata panel shown above one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryProperties {
    pub properties: Vec<Property>,
}

impl EntryProperties {
    pub fn localized(entry: &Entry) -> Self {
        Self {
            properties: vec![
                Property::code("Title", &entry.title),
                Property::code("Slug", &entry.slug),
                Property::code("Source Commit", entry.source_commit.clone().unwrap_or_default()),
            ],
        }
    }

    pub fn source(entry: &Entry, link: Option<String>) -> Self {
        let mut properties = vec![
            Property::code("Title", &entry.title),
            Property::code("Slug", &entry.slug),
            Property::code("Current Commit", entry.source_commit.clone().unwrap_or_default()),
        ];
        if let Some(url) = link {
            properties.push(Property::link("Link to File", url));
        }
        Self { properties }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.label == label)
            .map(|p| p.value.as_str())
    }
}

/// Segmented entries ready to be laid out
#[derive(Debug, Clone)]
pub struct Review<'a> {
    pub locale: String,
    pub mode: SplitMode,
    pub localized: EntryProperties,
    pub source: EntryProperties,
    pub localized_blocks: Vec<Block<'a>>,
    pub source_blocks: Vec<Block<'a>>,
}

impl<'a> Review<'a> {
    /// Aligned rows, localized on the left
    pub fn rows(&self) -> Vec<Row<'_>> {
        align(&self.localized_blocks, &self.source_blocks, self.mode)
    }
}

/// Outcome of comparing two entry slots
#[derive(Debug, Clone)]
pub enum Comparison<'a> {
    /// At least one entry is missing; nothing was segmented
    Unavailable,
    Ready(Review<'a>),
}

impl<'a> Comparison<'a> {
    pub fn review(&self) -> Option<&Review<'a>> {
        match self {
            Comparison::Ready(review) => Some(review),
            Comparison::Unavailable => None,
        }
    }
}

/// Compare two entries, segmenting both with `options.mode`
pub fn compare<'a>(
    localized: &'a EntrySlot,
    source: &'a EntrySlot,
    options: &CompareOptions,
) -> Comparison<'a> {
    compare_with(localized, source, options, &options.mode)
}

/// Compare two entries with a caller-supplied segmenter.
///
/// The segmenter is not called when either entry is absent.
pub fn compare_with<'a, S: Segmenter>(
    localized: &'a EntrySlot,
    source: &'a EntrySlot,
    options: &CompareOptions,
    segmenter: &S,
) -> Comparison<'a> {
    let (localized, source) = match (localized.entry(), source.entry()) {
        (Some(l), Some(s)) => (l, s),
        _ => {
            info!(
                "skipping comparison: localized {:?}, source {:?}",
                slot_state(localized),
                slot_state(source)
            );
            return Comparison::Unavailable;
        }
    };

    let localized_blocks = segmenter.segment(&localized.content);
    let source_blocks = segmenter.segment(&source.content);
    debug!(
        "comparing '{}' ({} blocks) with '{}' ({} blocks)",
        localized.slug,
        localized_blocks.len(),
        source.slug,
        source_blocks.len()
    );

    let link = options
        .path
        .as_deref()
        .map(|path| options.source_repo.file_url(path));

    Comparison::Ready(Review {
        locale: options.locale.clone(),
        mode: options.mode,
        localized: EntryProperties::localized(localized),
        source: EntryProperties::source(source, link),
        localized_blocks,
        source_blocks,
    })
}

fn slot_state(slot: &EntrySlot) -> &'static str {
    match slot {
        EntrySlot::Present(_) => "present",
        EntrySlot::NotLocalized => "not localized",
        EntrySlot::Unavailable => "unavailable",
    }
}
