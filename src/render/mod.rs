// src/render/mod.rs
// =============================================================================
// Turns the filtered repositories into the string we print.
//
// Steps:
// 1. Ask the display how big it is
// 2. Lay out a table slightly narrower than the display
// 3. Center the table in the full width and in the top half of the height
//
// Submodules:
// - geometry: where the display size comes from
// - table: the bordered four-column table
// - place: centering a block of text
// =============================================================================

mod geometry;
mod place;
mod table;

pub use geometry::{DisplayGeometry, FixedGeometry, Geometry, TerminalGeometry};

use tracing::debug;

use crate::error::RenderError;
use crate::github::Repository;

/// Render `repos` as a centered table sized to `display`.
pub fn render_repos<D>(repos: &[Repository], display: &D) -> Result<String, RenderError>
where
    D: DisplayGeometry + ?Sized,
{
    let Geometry { width, height } = display.geometry()?;

    let table_width = table::table_width(width);
    debug!(width, height, table_width, rows = repos.len(), "rendering table");

    let table = table::render_table(repos, table_width);
    Ok(place::place(
        usize::from(width),
        usize::from(height / 2),
        &table,
    ))
}
