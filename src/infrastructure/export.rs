//! Spreadsheet export of a date window
//!
//! Produces a single-sheet XLSX workbook:
//!
//! ```text
//! | Day    | Date       | Weekday  |
//! |--------|------------|----------|
//! | Day -10| 04/03/2024 | Monday   |
//! | ...    | ...        | ...      |
//! | Day 32 | 15/04/2024 | Monday   |
//! ```

use crate::domain::DateEntry;
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

const HEADERS: [&str; 3] = ["Day", "Date", "Weekday"];
const COLUMN_WIDTHS: [f64; 3] = [10.0, 15.0, 20.0];

/// File name for an export made on `today`, e.g. `Edition_Dates_5-3-2024.xlsx`.
pub fn default_export_filename(today: NaiveDate) -> String {
    format!(
        "Edition_Dates_{}-{}-{}.xlsx",
        today.day(),
        today.month(),
        today.year()
    )
}

#[derive(Clone, Debug)]
pub struct SpreadsheetExporter {
    /// Worksheet name
    pub sheet_name: String,
}

impl Default for SpreadsheetExporter {
    fn default() -> Self {
        Self {
            sheet_name: "Edition Dates".into(),
        }
    }
}

impl SpreadsheetExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate workbook bytes
    pub fn render_to_bytes(&self, entries: &[DateEntry]) -> Result<Vec<u8>> {
        let mut workbook = self.build_workbook(entries)?;
        workbook
            .save_to_buffer()
            .context("Failed to create spreadsheet")
    }

    /// Write the workbook to `path`
    pub fn export(&self, entries: &[DateEntry], path: &Path) -> Result<()> {
        let mut workbook = self.build_workbook(entries)?;
        workbook
            .save(path)
            .with_context(|| format!("Failed to write spreadsheet {}", path.display()))?;

        log::info!("Exported {} dates to {}", entries.len(), path.display());
        Ok(())
    }

    fn build_workbook(&self, entries: &[DateEntry]) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        let sheet = workbook.add_worksheet();
        sheet
            .set_name(self.sheet_name.as_str())
            .context("Invalid worksheet name")?;

        for (col, title) in HEADERS.iter().enumerate() {
            sheet.write_with_format(0, col as u16, *title, &header)?;
        }

        for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
            sheet.set_column_width(col as u16, *width)?;
        }

        for (index, entry) in entries.iter().enumerate() {
            let row = index as u32 + 1;
            let label = entry.day_label();
            sheet.write_string(row, 0, label.as_str())?;
            sheet.write_string(row, 1, entry.formatted_date())?;
            sheet.write_string(row, 2, entry.weekday_name())?;
        }

        Ok(workbook)
    }
}
