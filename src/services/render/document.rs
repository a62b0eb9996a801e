// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Single-page PDF encoding of a report.
//!
//! Layout is in PDF points measured from the top of a US-Letter page.
//! There is no pagination: rows past [`ROWS_PER_PAGE`] fall off the page.

use crate::models::ReportRow;
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Pt,
};

pub const TITLE: &str = "Users and Posts Report";

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 60.0;

const TITLE_SIZE: f32 = 18.0;
const TEXT_SIZE: f32 = 9.5;

const HEADER_TOP: f32 = 100.0;
const ROW_PITCH: f32 = 32.0;
const FIRST_ROW_TOP: f32 = HEADER_TOP + 30.0;
const RULE_TOP: f32 = HEADER_TOP + ROW_PITCH - 10.0;
const RULE_LEFT: f32 = 50.0;
const RULE_RIGHT: f32 = 550.0;
const COLUMNS: [f32; 4] = [60.0, 170.0, 370.0, 490.0];

const HEADERS: [&str; 4] = ["User ID", "User Name", "Post Count", "Mean Character Count"];

/// Average glyph width of Helvetica-Bold as a fraction of the font size.
/// Builtin fonts carry no metrics, so centering is approximate.
const BOLD_CHAR_WIDTH: f32 = 0.56;

/// Number of rows that fit on the single page.
pub const ROWS_PER_PAGE: usize = 19;

pub(super) fn encode(rows: &[ReportRow]) -> Result<Vec<u8>, printpdf::Error> {
    let (doc, page, layer) = PdfDocument::new(
        TITLE,
        Mm::from(Pt(PAGE_WIDTH)),
        Mm::from(Pt(PAGE_HEIGHT)),
        "Report",
    );
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let layer = doc.get_page(page).get_layer(layer);

    let title_width = TITLE.chars().count() as f32 * TITLE_SIZE * BOLD_CHAR_WIDTH;
    let title_x = MARGIN + (PAGE_WIDTH - 2.0 * MARGIN - title_width).max(0.0) / 2.0;
    text(&layer, TITLE, TITLE_SIZE, title_x, MARGIN, &bold);

    for (x, title) in COLUMNS.iter().zip(HEADERS) {
        text(&layer, title, TEXT_SIZE, *x, HEADER_TOP, &bold);
    }

    layer.add_line(Line {
        points: vec![
            (point(RULE_LEFT, RULE_TOP), false),
            (point(RULE_RIGHT, RULE_TOP), false),
        ],
        is_closed: false,
    });

    for (i, row) in rows.iter().enumerate() {
        let top = FIRST_ROW_TOP + i as f32 * ROW_PITCH;
        let cells = [
            row.user_id.to_string(),
            row.name.clone(),
            row.post_count.to_string(),
            row.mean_display(),
        ];
        for (x, cell) in COLUMNS.iter().zip(cells) {
            text(&layer, cell, TEXT_SIZE, *x, top, &regular);
        }
    }

    doc.save_to_bytes()
}

/// Convert a top-left based position in points to a PDF point.
fn point(x: f32, top: f32) -> Point {
    Point::new(Mm::from(Pt(x)), Mm::from(Pt(PAGE_HEIGHT - top)))
}

/// Draw `s` with its top edge at `top`.
fn text(
    layer: &PdfLayerReference,
    s: impl Into<String>,
    size: f32,
    x: f32,
    top: f32,
    font: &IndirectFontRef,
) {
    let baseline = PAGE_HEIGHT - top - size;
    layer.use_text(s, size, Mm::from(Pt(x)), Mm::from(Pt(baseline)), font);
}
