//! Table renderer
//!
//! Computes column widths from content measurement, scales them to fit the
//! page, derives per-row heights from wrapped cell content, draws bordered
//! cells and repeats the header row whenever the table body crosses a page
//! break.

use log::debug;

use crate::error::RendererResult;
use crate::geometry::{ASCENT_FACTOR, CELL_PADDING, MIN_COLUMN_WIDTH, PageGeometry};
use crate::layout::LayoutCursor;
use crate::metrics::{line_height, text_width};
use crate::sink::DocumentSink;
use crate::types::TextStyle;
use crate::wrap::wrap_text;

/// Marker forcing a manual line split inside a cell
const CELL_BREAK: &str = "<br>";

/// Render one accumulated table at the cursor position.
///
/// Row 0 is the header (the markdown separator row was already discarded by
/// the classifier); the remaining rows are data rows, padded or truncated to
/// the header's column count.
pub fn render_table<S: DocumentSink>(
    sink: &mut S,
    cursor: &mut LayoutCursor,
    rows: &[Vec<String>],
) -> RendererResult<()> {
    let Some((header, body)) = rows.split_first() else {
        return Ok(());
    };
    if header.is_empty() {
        return Ok(());
    }

    let geometry = sink.geometry();
    let data: Vec<Vec<String>> = body.iter().map(|row| normalize_row(row, header.len())).collect();
    let widths = column_widths(header, &data, &geometry);
    debug!("table: {} columns, {} data rows, widths {:?}", header.len(), data.len(), widths);

    draw_row_paginated(sink, cursor, header, &widths, TextStyle::cell_header(), None)?;
    for row in &data {
        draw_row_paginated(sink, cursor, row, &widths, TextStyle::cell(), Some(header))?;
    }
    Ok(())
}

/// Pad short rows with empty cells up to the header's column count and drop
/// cells beyond it, so the width arithmetic stays well-defined.
fn normalize_row(row: &[String], columns: usize) -> Vec<String> {
    let mut cells: Vec<String> = row.iter().take(columns).cloned().collect();
    cells.resize(columns, String::new());
    cells
}

/// Compute the immutable per-table column widths.
///
/// Each column gets its widest cell (header measured bold) plus padding,
/// clamped to half the usable width so one verbose column cannot dominate.
/// If the sum still exceeds the usable width, all widths shrink
/// proportionally; tables never overflow sideways.
pub(crate) fn column_widths(
    header: &[String],
    data: &[Vec<String>],
    geometry: &PageGeometry,
) -> Vec<f64> {
    let usable = geometry.usable_width();
    let mut widths: Vec<f64> = header
        .iter()
        .enumerate()
        .map(|(i, header_cell)| {
            let mut natural = natural_cell_width(header_cell, TextStyle::cell_header());
            for row in data {
                natural = natural.max(natural_cell_width(&row[i], TextStyle::cell()));
            }
            (natural + 2.0 * CELL_PADDING).min(usable / 2.0).max(MIN_COLUMN_WIDTH)
        })
        .collect();

    let total: f64 = widths.iter().sum();
    if total > usable {
        let factor = usable / total;
        for width in &mut widths {
            *width *= factor;
        }
    }
    widths
}

/// Unwrapped width of a cell, honoring manual line breaks
fn natural_cell_width(cell: &str, style: TextStyle) -> f64 {
    cell.split(CELL_BREAK)
        .map(|segment| text_width(segment.trim(), style))
        .fold(0.0, f64::max)
}

/// Wrapped lines of a cell at its column width
fn cell_lines(cell: &str, column_width: f64, style: TextStyle) -> Vec<String> {
    let inner = (column_width - 2.0 * CELL_PADDING).max(1.0);
    cell.split(CELL_BREAK)
        .flat_map(|segment| wrap_text(segment.trim(), inner, style))
        .collect()
}

/// Height of a row: its tallest wrapped cell plus padding on both sides
fn row_height(cells: &[String], widths: &[f64], style: TextStyle) -> f64 {
    let lh = line_height(style);
    let tallest = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| cell_lines(cell, *width, style).len() as f64 * lh)
        .fold(lh, f64::max);
    tallest + 2.0 * CELL_PADDING
}

/// Draw one row, breaking the page first if it would not fit. A data row
/// landing on a fresh page is preceded by a redrawn header at the same
/// column widths, so a continuation page never shows body rows without
/// their header.
fn draw_row_paginated<S: DocumentSink>(
    sink: &mut S,
    cursor: &mut LayoutCursor,
    cells: &[String],
    widths: &[f64],
    style: TextStyle,
    header: Option<&[String]>,
) -> RendererResult<()> {
    let geometry = sink.geometry();
    let height = row_height(cells, widths, style);

    if cursor.y + height > geometry.content_bottom() && cursor.y > geometry.margins.top {
        debug!("table row does not fit on page {}, continuing", cursor.page_index + 1);
        sink.add_page()?;
        cursor.y = geometry.margins.top;
        cursor.page_index += 1;
        if let Some(header) = header {
            draw_row(sink, cursor, header, widths, TextStyle::cell_header())?;
        }
    }

    draw_row(sink, cursor, cells, widths, style)
}

fn draw_row<S: DocumentSink>(
    sink: &mut S,
    cursor: &mut LayoutCursor,
    cells: &[String],
    widths: &[f64],
    style: TextStyle,
) -> RendererResult<()> {
    let geometry = sink.geometry();
    let height = row_height(cells, widths, style);
    let rect_bottom = geometry.size.height - cursor.y - height;
    let lh = line_height(style);

    let mut x = geometry.margins.left;
    for (cell, width) in cells.iter().zip(widths) {
        sink.stroke_rect(x, rect_bottom, *width, height)?;
        let mut line_top = cursor.y + CELL_PADDING;
        for line in cell_lines(cell, *width, style) {
            let baseline = geometry.size.height - line_top - style.size * ASCENT_FACTOR;
            sink.draw_text(&line, x + CELL_PADDING, baseline, style)?;
            line_top += lh;
        }
        x += width;
    }

    cursor.y += height;
    Ok(())
}
