// src/render/place.rs
// =============================================================================
// Centers a block of text inside a box of the given size.
//
// - Horizontal: every line is padded with spaces so the block sits in the
//   middle of `width` columns (the left side gets the smaller half)
// - Vertical: blank lines are added above and below so the block sits in the
//   middle of `height` rows (the top gets the smaller half)
// - A block that is already wider/taller than the box is left as is in that
//   direction
//
// Widths are measured with console::measure_text_width, which ignores ANSI
// color codes and counts wide characters correctly.
// =============================================================================

use console::measure_text_width;

/// Center `block` in a `width` x `height` box.
pub fn place(width: usize, height: usize, block: &str) -> String {
    let lines: Vec<&str> = block.lines().collect();
    let block_width = lines
        .iter()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0);

    let box_width = width.max(block_width);
    let (left, right) = split_gap(box_width - block_width);

    let mut placed: Vec<String> = lines
        .iter()
        .map(|line| {
            let fill = block_width - measure_text_width(line);
            format!("{}{}{}", " ".repeat(left), line, " ".repeat(fill + right))
        })
        .collect();

    let (top, bottom) = split_gap(height.saturating_sub(placed.len()));
    let blank = " ".repeat(box_width);

    let mut out = Vec::with_capacity(top + placed.len() + bottom);
    out.extend(std::iter::repeat(blank.clone()).take(top));
    out.append(&mut placed);
    out.extend(std::iter::repeat(blank).take(bottom));

    out.join("\n")
}

// Splits a gap in two, smaller half first
fn split_gap(gap: usize) -> (usize, usize) {
    let first = gap / 2;
    (first, gap - first)
}
