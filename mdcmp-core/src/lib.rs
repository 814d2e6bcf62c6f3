//! mdcmp core - segmentation and alignment of translated markdown
//!
//! This crate holds everything except the terminal front end:
//! - Block segmentation with plain and markdown-aware modes
//! - Index-by-index alignment into side-by-side rows
//! - Entries loaded from markdown files with front matter
//! - Comparison of a localized entry against its source
//! - Configuration management

pub mod align;
pub mod compare;
pub mod config;
pub mod doc;
pub mod entry;
pub mod front_matter;
pub mod segment;

// Re-export commonly used types
pub use align::{align, Row, Side};
pub use compare::{compare, CompareOptions, Comparison, Review};
pub use config::Config;
pub use doc::Document;
pub use entry::{Entry, EntrySlot};
pub use segment::{segment, Block, Segmenter, SplitMode, SplitStrategy};
