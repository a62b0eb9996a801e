// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spreadsheet (.xlsx) encoding of a report.

use crate::models::ReportRow;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

pub const SHEET_NAME: &str = "Report";

pub const HEADERS: [&str; 4] = ["User ID", "User Name", "Post Count", "Mean Character Count"];

/// Encode `rows` as a one-sheet workbook: a bold header row, then one row
/// per report row. The mean is written as two-decimal text.
pub(super) fn encode(rows: &[ReportRow]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &bold)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_number(r, 0, row.user_id as f64)?;
        sheet.write_string(r, 1, row.name.as_str())?;
        sheet.write_number(r, 2, row.post_count)?;
        sheet.write_string(r, 3, row.mean_display())?;
    }
    sheet.autofit();

    workbook.save_to_buffer()
}
