//! Positional alignment of two block sequences into side-by-side rows

use crate::segment::{trim_blank, Block, SplitMode};

/// Text shown for an empty side of a paired row, so row height stays stable
pub const PLACEHOLDER: &str = "\u{a0}";

/// Text of a blockquote continuation marker
pub const CONTINUATION_MARKER: &str = ">";

/// Column of a side-by-side row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Localized document
    Left,
    /// Source document
    Right,
}

/// One rendered row of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    /// Blocks at the same index; `None` when that side has run out of blocks
    Pair {
        index: usize,
        left: Option<&'a str>,
        right: Option<&'a str>,
    },
    /// A `>` marker joining two consecutive quote blocks on one side
    Continuation { index: usize, side: Side },
    /// Empty separator between a markdown run and plain paragraphs
    Spacer { index: usize },
}

impl<'a> Row<'a> {
    /// Block index this row was emitted for
    pub fn index(&self) -> usize {
        match *self {
            Row::Pair { index, .. } | Row::Continuation { index, .. } | Row::Spacer { index } => {
                index
            }
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Row::Pair { .. })
    }

    /// Display text for one column
    pub fn text(&self, side: Side) -> &'a str {
        match *self {
            Row::Pair { left, right, .. } => {
                let block = match side {
                    Side::Left => left,
                    Side::Right => right,
                };
                block.filter(|b| !b.is_empty()).unwrap_or(PLACEHOLDER)
            }
            Row::Continuation { side: marked, .. } if marked == side => CONTINUATION_MARKER,
            Row::Continuation { .. } | Row::Spacer { .. } => "",
        }
    }

    pub fn left_text(&self) -> &'a str {
        self.text(Side::Left)
    }

    pub fn right_text(&self) -> &'a str {
        self.text(Side::Right)
    }
}

/// Markdown shape of a block, as far as alignment cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    ListItem,
    Blockquote,
    Text,
}

impl BlockKind {
    /// Classify a block by its leading marker.
    ///
    /// Only `- ` counts as a list marker.
    pub fn of(block: &str) -> Self {
        let trimmed = trim_blank(block);
        if trimmed.starts_with("- ") {
            BlockKind::ListItem
        } else if trimmed.starts_with('>') {
            BlockKind::Blockquote
        } else {
            BlockKind::Text
        }
    }

    pub fn is_markdown(&self) -> bool {
        !matches!(self, BlockKind::Text)
    }

    pub fn is_blockquote(&self) -> bool {
        matches!(self, BlockKind::Blockquote)
    }
}

/// Kinds of both sides at one index; missing blocks count as plain text
#[derive(Debug, Clone, Copy)]
struct Position {
    left: BlockKind,
    right: BlockKind,
}

impl Position {
    fn at(left: &[Block<'_>], right: &[Block<'_>], index: usize) -> Self {
        Self {
            left: kind_at(left, index),
            right: kind_at(right, index),
        }
    }

    fn is_markdown(&self) -> bool {
        self.left.is_markdown() || self.right.is_markdown()
    }
}

fn kind_at(blocks: &[Block<'_>], index: usize) -> BlockKind {
    blocks.get(index).map_or(BlockKind::Text, |b| BlockKind::of(b))
}

/// Pair `left` and `right` index by index.
///
/// In markdown DoubleBreak mode each index may be followed by a left
/// continuation, a right continuation and a spacer, in that order.
pub fn align<'a>(left: &'a [Block<'a>], right: &'a [Block<'a>], mode: SplitMode) -> Vec<Row<'a>> {
    let max_len = left.len().max(right.len());
    let mut rows = Vec::with_capacity(max_len);

    for index in 0..max_len {
        rows.push(Row::Pair {
            index,
            left: left.get(index).map(|b| b.as_ref()),
            right: right.get(index).map(|b| b.as_ref()),
        });

        if !mode.emits_layout_rows() || index + 1 >= max_len {
            continue;
        }

        let current = Position::at(left, right, index);
        let next = Position::at(left, right, index + 1);

        if current.left.is_blockquote() && next.left.is_blockquote() {
            rows.push(Row::Continuation {
                index,
                side: Side::Left,
            });
        }
        if current.right.is_blockquote() && next.right.is_blockquote() {
            rows.push(Row::Continuation {
                index,
                side: Side::Right,
            });
        }
        if !current.is_markdown() || !next.is_markdown() {
            rows.push(Row::Spacer { index });
        }
    }

    rows
}
