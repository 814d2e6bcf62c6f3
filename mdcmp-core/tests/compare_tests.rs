//! End-to-end tests for mdcmp-core
//!
//! These go from markdown files on disk through segmentation and alignment
//! to the rows a renderer receives.

use mdcmp_core::align::PLACEHOLDER;
use mdcmp_core::compare::{compare, CompareOptions, Comparison};
use mdcmp_core::{segment, Entry, EntrySlot, Row, Side, SplitMode, SplitStrategy};
use std::fs;
use tempfile::TempDir;

const LOCALIZED: &str = "---\n\
title: 區塊引言\n\
slug: Web/HTML/Element/blockquote\n\
l10n:\n  sourceCommit: 1a2b3c\n\
---\n\
\n\
{{HTMLSidebar}}\n\
\n\
>注意\n\
>  引言內容\n\
\n\
> 第二段\n\
\n\
## 屬性\n\
\n\
- cite\n\
- class\n";

const SOURCE: &str = "---\n\
title: \"<blockquote>: The Block Quotation element\"\n\
slug: Web/HTML/Element/blockquote\n\
---\n\
\n\
{{HTMLSidebar}}\n\
\n\
> Note\n\
> quoted text\n\
\n\
> Second paragraph\n\
\n\
## Attributes\n\
\n\
- cite\n";

fn write_pair(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let localized = dir.path().join("zh-tw.md");
    let source = dir.path().join("en-us.md");
    fs::write(&localized, LOCALIZED).expect("write localized");
    fs::write(&source, SOURCE).expect("write source");
    (localized, source)
}

fn options(mode: SplitMode) -> CompareOptions {
    CompareOptions {
        locale: "zh-TW".to_string(),
        mode,
        path: Some("web/html/element/blockquote".to_string()),
        ..Default::default()
    }
}

#[test]
fn integration_files_to_rows() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let (l_path, s_path) = write_pair(&dir);

    let localized = EntrySlot::load(&l_path, EntrySlot::NotLocalized, true)?;
    let source = EntrySlot::load(&s_path, EntrySlot::Unavailable, true)?;

    let comparison = compare(&localized, &source, &options(SplitMode::default()));
    let review = comparison.review().expect("both entries present");

    assert_eq!(review.localized.get("Source Commit"), Some("1a2b3c"));
    assert_eq!(
        review.source.get("Title"),
        Some("<blockquote>: The Block Quotation element")
    );

    assert_eq!(
        review.localized_blocks,
        vec![
            "{{HTMLSidebar}}",
            "> 注意\n> 引言內容",
            "> 第二段",
            "## 屬性",
            "- cite\n- class",
        ]
    );
    assert_eq!(
        review.source_blocks,
        vec![
            "{{HTMLSidebar}}",
            "> Note\n> quoted text",
            "> Second paragraph",
            "## Attributes",
            "- cite",
        ]
    );

    let rows = review.rows();
    assert_eq!(
        rows,
        vec![
            Row::Pair {
                index: 0,
                left: Some("{{HTMLSidebar}}"),
                right: Some("{{HTMLSidebar}}"),
            },
            Row::Spacer { index: 0 },
            Row::Pair {
                index: 1,
                left: Some("> 注意\n> 引言內容"),
                right: Some("> Note\n> quoted text"),
            },
            Row::Continuation {
                index: 1,
                side: Side::Left,
            },
            Row::Continuation {
                index: 1,
                side: Side::Right,
            },
            Row::Pair {
                index: 2,
                left: Some("> 第二段"),
                right: Some("> Second paragraph"),
            },
            Row::Spacer { index: 2 },
            Row::Pair {
                index: 3,
                left: Some("## 屬性"),
                right: Some("## Attributes"),
            },
            Row::Spacer { index: 3 },
            Row::Pair {
                index: 4,
                left: Some("- cite\n- class"),
                right: Some("- cite"),
            },
        ]
    );

    Ok(())
}

#[test]
fn integration_missing_localized_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let (_, s_path) = write_pair(&dir);

    let localized = EntrySlot::load(&dir.path().join("nope.md"), EntrySlot::NotLocalized, true)?;
    let source = EntrySlot::load(&s_path, EntrySlot::Unavailable, true)?;

    assert_eq!(localized, EntrySlot::NotLocalized);
    let comparison = compare(&localized, &source, &options(SplitMode::default()));
    assert!(matches!(comparison, Comparison::Unavailable));

    Ok(())
}

#[test]
fn integration_single_break_rows_match_lines() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let (l_path, s_path) = write_pair(&dir);

    let localized = EntrySlot::load(&l_path, EntrySlot::NotLocalized, true)?;
    let source = EntrySlot::load(&s_path, EntrySlot::Unavailable, true)?;
    let mode = SplitMode::markdown(SplitStrategy::SingleBreak);

    let comparison = compare(&localized, &source, &options(mode));
    let review = comparison.review().expect("both entries present");
    let rows = review.rows();

    let l_lines = localized.entry().map_or(0, |e| e.content.split('\n').count());
    let s_lines = source.entry().map_or(0, |e| e.content.split('\n').count());
    assert_eq!(rows.len(), l_lines.max(s_lines));
    assert!(rows.iter().all(Row::is_pair));

    Ok(())
}

#[test]
fn integration_plain_mode_round_trips_content() {
    let content = "para\n\n\n> q\n>  r\n\n- a\n- b\n";
    let blocks = segment(content, SplitMode::plain(SplitStrategy::DoubleBreak));
    assert_eq!(blocks.join("\n\n"), content);
}

#[test]
fn integration_empty_documents() {
    let l: EntrySlot = Entry::new("", "", "").into();
    let s: EntrySlot = Entry::new("", "", "").into();

    let plain = compare(&l, &s, &options(SplitMode::plain(SplitStrategy::DoubleBreak)));
    let rows = plain.review().expect("review").rows();
    assert_eq!(
        rows,
        vec![Row::Pair {
            index: 0,
            left: Some(""),
            right: Some(""),
        }]
    );
    assert_eq!(rows[0].left_text(), PLACEHOLDER);

    let markdown = compare(&l, &s, &options(SplitMode::default()));
    assert!(markdown.review().expect("review").rows().is_empty());
}
