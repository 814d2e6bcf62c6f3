//! Plain-text side-by-side rendering

use mdcmp_core::compare::{Comparison, EntryProperties, Review, UNAVAILABLE_MESSAGE};
use mdcmp_core::Row;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SEPARATOR: &str = " │ ";
const MIN_COLUMN: usize = 8;

/// Output geometry
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub width: usize,
    pub metadata: bool,
}

impl Layout {
    fn column_width(&self) -> usize {
        (self.width.saturating_sub(SEPARATOR.width()) / 2).max(MIN_COLUMN)
    }

    fn rule_width(&self) -> usize {
        self.column_width() * 2 + SEPARATOR.width()
    }
}

/// Render a comparison into output lines
pub fn render(comparison: &Comparison<'_>, layout: &Layout) -> Vec<String> {
    match comparison {
        Comparison::Unavailable => vec![UNAVAILABLE_MESSAGE.to_string()],
        Comparison::Ready(review) => render_review(review, layout),
    }
}

fn render_review(review: &Review<'_>, layout: &Layout) -> Vec<String> {
    let mut lines = Vec::new();
    let localized_header = format!("Localized {}", review.locale);

    push_columns(&mut lines, &localized_header, "Source", layout);
    if layout.metadata {
        push_columns(&mut lines, "Metadata", "Metadata", layout);
        let left = property_lines(&review.localized);
        let right = property_lines(&review.source);
        for i in 0..left.len().max(right.len()) {
            push_columns(
                &mut lines,
                left.get(i).map_or("", String::as_str),
                right.get(i).map_or("", String::as_str),
                layout,
            );
        }
    }
    lines.push("─".repeat(layout.rule_width()));

    for row in review.rows() {
        match row {
            Row::Spacer { .. } => lines.push(String::new()),
            Row::Pair { .. } | Row::Continuation { .. } => {
                push_columns(&mut lines, row.left_text(), row.right_text(), layout)
            }
        }
    }

    lines
}

fn property_lines(panel: &EntryProperties) -> Vec<String> {
    panel
        .properties
        .iter()
        .map(|p| {
            if p.link {
                format!("{}: {}", p.label, p.value)
            } else {
                format!("{}: `{}`", p.label, p.value)
            }
        })
        .collect()
}

/// Wrap both cells and append them side by side
fn push_columns(lines: &mut Vec<String>, left: &str, right: &str, layout: &Layout) {
    let width = layout.column_width();
    let left = wrap(left, width);
    let right = wrap(right, width);

    for i in 0..left.len().max(right.len()) {
        let l = left.get(i).map_or("", String::as_str);
        let r = right.get(i).map_or("", String::as_str);
        let line = format!("{}{}{}", pad(l, width), SEPARATOR, r);
        lines.push(line.trim_end_matches(' ').to_string());
    }
}

/// Break text at newlines and wherever it exceeds `width` columns
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();

    for line in text.split('\n') {
        let mut current = String::new();
        let mut used = 0;

        for ch in line.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width && !current.is_empty() {
                out.push(std::mem::take(&mut current));
                used = 0;
            }
            current.push(ch);
            used += w;
        }
        out.push(current);
    }

    out
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
