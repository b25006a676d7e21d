//! Pure text geometry used to compose every screen.
//!
//! Widths are measured in terminal cells via `console::measure_text_width`,
//! so box-drawing glyphs count as one column each.

use console::{measure_text_width, pad_str, Alignment};

/// Fixed width the side art is padded to.
pub const ART_WIDTH: usize = 30;
/// Spaces between the menu panel and the side art.
pub const ART_GAP: usize = 8;

/// Center a block of text horizontally within `width` columns.
///
/// Every non-blank line is trimmed on both sides, then all of them are
/// shifted right by `max(0, (width - widest) / 2)` where `widest` is the
/// widest trimmed line. Blank lines come out empty.
pub fn center_block(text: &str, width: usize) -> String {
    let body: Vec<&str> = text.split('\n').map(str::trim).collect();
    let widest = body.iter().map(|l| measure_text_width(l)).max().unwrap_or(0);
    let pad = " ".repeat(width.saturating_sub(widest) / 2);

    body.iter()
        .map(|l| if l.is_empty() { String::new() } else { format!("{pad}{l}") })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Put `left` and `right` next to each other with the default art width and
/// gap.
pub fn side_by_side(left: &str, right: &str) -> String {
    side_by_side_with(left, right, ART_WIDTH, ART_GAP)
}

/// Compose two blocks into rows of `left + gap + right`.
///
/// Left lines are padded to the widest left line, right lines to
/// `right_width`. The shorter block is extended with blank rows at the bottom.
/// Nothing is truncated.
pub fn side_by_side_with(left: &str, right: &str, right_width: usize, gap: usize) -> String {
    let left_lines: Vec<&str> = left.split('\n').collect();
    let right_lines: Vec<&str> = right.split('\n').collect();
    let left_width = left_lines.iter().map(|l| measure_text_width(l)).max().unwrap_or(0);
    let rows = left_lines.len().max(right_lines.len());
    let spacer = " ".repeat(gap);

    (0..rows)
        .map(|i| {
            let l = left_lines.get(i).copied().unwrap_or("");
            let r = right_lines.get(i).copied().unwrap_or("");
            format!(
                "{}{}{}",
                pad_str(l, left_width, Alignment::Left, None),
                spacer,
                pad_str(r, right_width, Alignment::Left, None)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Left margin that centers something `content_width` wide in `width`.
pub fn center_offset(width: usize, content_width: usize) -> usize {
    width.saturating_sub(content_width) / 2
}
