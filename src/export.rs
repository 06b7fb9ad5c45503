use crate::collection::generate_numbers;
use crate::models::{NumberRange, Snapshot};
use chrono::{DateTime, Local};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use std::fmt;

pub const SHEET_NAME: &str = "Collection Data";

/// Number/amount column pairs laid out side by side.
const COLUMN_PAIRS: u16 = 10;
/// Summary block sits in a side column, clear of the grid.
const SUMMARY_COL: u16 = 21;
const HEADER_ROW: u32 = 6;
const DATA_START_ROW: u32 = 7;

#[derive(Debug)]
pub enum ExportError {
    NoData,
    Workbook(XlsxError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => write!(f, "No data available to export"),
            Self::Workbook(err) => write!(f, "Failed to generate export workbook: {err}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<XlsxError> for ExportError {
    fn from(err: XlsxError) -> Self {
        Self::Workbook(err)
    }
}

pub fn export_filename(slug: &str, exported_at: DateTime<Local>) -> String {
    format!(
        "{slug}-collection-{}.xlsx",
        exported_at.format("%Y-%m-%d")
    )
}

/// Full-range pairs in key order: every number in the range appears once,
/// with the accumulated amount where one exists and zero otherwise.
pub fn merge_full_range(numbers: &Snapshot, range: NumberRange) -> Vec<(String, f64)> {
    let mut merged = generate_numbers(range);
    for (key, amount) in numbers {
        if *amount > 0.0 {
            merged.insert(key.clone(), *amount);
        }
    }
    merged.into_iter().collect()
}

/// Build the export workbook and return its bytes. Reads only; the live
/// snapshot is never touched.
pub fn build_workbook(
    numbers: &Snapshot,
    range: NumberRange,
    exported_at: DateTime<Local>,
) -> Result<Vec<u8>, ExportError> {
    let data = merge_full_range(numbers, range);
    if data.is_empty() {
        return Err(ExportError::NoData);
    }

    let total_amount: f64 = data.iter().map(|(_, amount)| amount).sum();

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let summary_label = Format::new().set_bold().set_font_size(14);
    let summary_value = Format::new().set_font_size(14);
    let header = Format::new()
        .set_bold()
        .set_font_size(18)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);
    let number_cell = Format::new()
        .set_font_size(18)
        .set_font_color(Color::Red)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);
    let amount_cell = Format::new()
        .set_font_size(18)
        .set_font_color(Color::Black)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    // Summary block
    sheet.write_with_format(0, SUMMARY_COL, "Collection Export Summary", &summary_label)?;
    sheet.write_with_format(1, SUMMARY_COL, "Export Date:", &summary_label)?;
    sheet.write_with_format(
        1,
        SUMMARY_COL + 1,
        exported_at.format("%Y-%m-%d").to_string(),
        &summary_value,
    )?;
    sheet.write_with_format(2, SUMMARY_COL, "Export Time:", &summary_label)?;
    sheet.write_with_format(
        2,
        SUMMARY_COL + 1,
        exported_at.format("%H:%M:%S").to_string(),
        &summary_value,
    )?;
    sheet.write_with_format(3, SUMMARY_COL, "Total Numbers:", &summary_label)?;
    sheet.write_with_format(3, SUMMARY_COL + 1, data.len() as f64, &summary_value)?;
    sheet.write_with_format(4, SUMMARY_COL, "Total Amount:", &summary_label)?;
    sheet.write_with_format(4, SUMMARY_COL + 1, total_amount, &summary_value)?;

    // Header row: one (number, "ST") label pair per column group
    for group in 0..COLUMN_PAIRS {
        let label = format!("{:0width$}", group, width = range.width);
        sheet.write_with_format(HEADER_ROW, group * 2, label, &header)?;
        sheet.write_with_format(HEADER_ROW, group * 2 + 1, "ST", &header)?;
    }

    // Data grid, column-major: fill down each column group before moving to
    // the next, so entry i lands at row i % rows, group i / rows.
    let rows = grid_rows(data.len());
    for row_offset in 0..rows {
        let row = DATA_START_ROW + row_offset as u32;
        for group in 0..COLUMN_PAIRS as usize {
            let index = row_offset + group * rows;
            let Some((key, amount)) = data.get(index) else {
                continue;
            };
            sheet.write_with_format(row, (group * 2) as u16, key.as_str(), &number_cell)?;
            sheet.write_with_format(row, (group * 2 + 1) as u16, *amount, &amount_cell)?;
        }
    }

    for col in 0..COLUMN_PAIRS * 2 {
        sheet.set_column_width(col, 10)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn grid_rows(total: usize) -> usize {
    total.div_ceil(COLUMN_PAIRS as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn exported_at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 30, 14, 30, 0).unwrap()
    }

    #[test]
    fn merged_pairs_always_cover_the_full_range() {
        let range = NumberRange::new(0, 99, 2);
        let mut numbers = generate_numbers(range);
        numbers.insert("05".into(), 12.5);

        let pairs = merge_full_range(&numbers, range);
        assert_eq!(pairs.len(), 100);
        assert_eq!(pairs[5], ("05".to_string(), 12.5));
        assert_eq!(pairs[6], ("06".to_string(), 0.0));
    }

    #[test]
    fn empty_active_set_exports_all_zeros() {
        let range = NumberRange::new(0, 9, 1);
        let pairs = merge_full_range(&Snapshot::new(), range);
        assert_eq!(pairs.len(), 10);
        assert!(pairs.iter().all(|(_, amount)| *amount == 0.0));

        let bytes = build_workbook(&Snapshot::new(), range, exported_at()).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn empty_range_yields_no_data_error() {
        let range = NumberRange::new(5, 3, 2);
        let err = build_workbook(&Snapshot::new(), range, exported_at()).unwrap_err();
        assert!(matches!(err, ExportError::NoData));
    }

    #[test]
    fn grid_is_column_major() {
        // 100 numbers over 10 column pairs means 10 rows: entry 23 sits in
        // row 3 of column group 2.
        assert_eq!(grid_rows(100), 10);
        let index = 3 + 2 * grid_rows(100);
        assert_eq!(index, 23);

        // an uneven range still rounds the row count up
        assert_eq!(grid_rows(95), 10);
        assert_eq!(grid_rows(13), 2);
    }

    #[test]
    fn filename_carries_slug_and_iso_date() {
        assert_eq!(
            export_filename("3up", exported_at()),
            "3up-collection-2026-08-30.xlsx"
        );
    }

    #[test]
    fn workbook_builds_for_a_real_collection() {
        let range = NumberRange::new(0, 999, 3);
        let mut numbers = generate_numbers(range);
        numbers.insert("042".into(), 250.0);

        let bytes = build_workbook(&numbers, range, exported_at()).unwrap();
        // xlsx files are zip archives
        assert_eq!(&bytes[..2], b"PK");
    }
}
