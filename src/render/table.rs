// src/render/table.rs
// =============================================================================
// Lays out the repositories as a bordered table.
//
// Columns: Name | Description | Url | Last update
//
// comfy-table does the hard part (wrapping cells so the table fits a given
// width). We then paint the border characters in our accent color.
// =============================================================================

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use console::Style;

use crate::github::Repository;

pub const HEADERS: [&str; 4] = ["Name", "Description", "Url", "Last update"];

// day-month-year, e.g. 02-01-2024
const DATE_FORMAT: &str = "%d-%m-%Y";

// ANSI 256-color index of the border accent
const BORDER_COLOR: u8 = 92;

/// Width available to the table in a terminal `terminal_width` columns wide.
///
/// Leaves a margin of `floor(width^0.2)` columns: 80 -> 78, 100 -> 98, 1 -> 0.
pub fn table_width(terminal_width: u16) -> u16 {
    let margin = f64::from(terminal_width).powf(0.2).floor() as u16;
    terminal_width.saturating_sub(margin)
}

/// Render `repos` as a table exactly `width` columns wide, borders colored.
///
/// A `width` of 0 means no constraint: the table gets its natural width.
/// Rows keep the order of `repos`.
pub fn render_table(repos: &[Repository], width: u16) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(HEADERS);

    if width > 0 {
        table
            .set_content_arrangement(ContentArrangement::DynamicFullWidth)
            .set_width(width);
    }

    for repo in repos {
        table.add_row(vec![
            repo.name().to_string(),
            repo.description().to_string(),
            repo.url().to_string(),
            repo.updated_at().format(DATE_FORMAT).to_string(),
        ]);
    }

    color_borders(&table.to_string(), &Style::new().color256(BORDER_COLOR))
}

// Box-drawing characters (U+2500..U+257F) are what UTF8_FULL draws borders with
fn is_border(ch: char) -> bool {
    ('\u{2500}'..='\u{257F}').contains(&ch)
}

// Wraps each run of border characters in the accent style.
// Style::apply_to emits no escape codes when colors are disabled.
fn color_borders(rendered: &str, style: &Style) -> String {
    let mut out = String::with_capacity(rendered.len());
    let mut run = String::new();

    for ch in rendered.chars() {
        if is_border(ch) {
            run.push(ch);
            continue;
        }
        flush_run(&mut out, &mut run, style);
        out.push(ch);
    }
    flush_run(&mut out, &mut run, style);

    out
}

fn flush_run(out: &mut String, run: &mut String, style: &Style) {
    if !run.is_empty() {
        out.push_str(&style.apply_to(run.as_str()).to_string());
        run.clear();
    }
}
