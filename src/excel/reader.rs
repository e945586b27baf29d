//! Source price list reader - spreadsheet → SourceTable

use crate::config::MapperConfig;
use crate::error::{MapperError, MapperResult};
use crate::types::{CellValue, ColumnIndices, SourceRow, SourceTable};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the first worksheet of a vendor price list
pub struct SourceReader {
    path: PathBuf,
    header_row: u32,
}

impl SourceReader {
    /// Create a reader with the header row taken from `config`
    pub fn new<P: AsRef<Path>>(path: P, config: &MapperConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            header_row: config.header_row,
        }
    }

    /// Parse the source file, validating the required columns once.
    ///
    /// Fails with [`MapperError::Schema`] before any data row is read when a
    /// required column is absent.
    pub fn read(&self) -> MapperResult<SourceTable> {
        // Sheets<_> dispatches on extension: xlsx, xlsm, xlsb, xls, ods
        let mut workbook = open_workbook_auto(&self.path)?;

        let range = workbook.worksheet_range_at(0).ok_or_else(|| {
            MapperError::Data(format!(
                "Source file has no worksheets: {}",
                self.path.display()
            ))
        })??;

        let columns = self.header_names(&range);
        debug!(columns = ?columns, "source header");

        let indices = ColumnIndices::resolve(&columns)?;
        let rows = self.data_rows(&range, &indices);

        debug!(rows = rows.len(), path = %self.path.display(), "source rows read");
        Ok(SourceTable { columns, rows })
    }

    /// Header names from the configured physical row, trimmed.
    ///
    /// Columns are counted from column A so unnamed headers get stable
    /// positional names.
    fn header_names(&self, range: &Range<Data>) -> Vec<String> {
        let Some((_, end_col)) = range.end() else {
            return Vec::new();
        };

        (0..=end_col)
            .map(|col| match range.get_value((self.header_row, col)) {
                Some(Data::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
                Some(Data::Empty) | Some(Data::String(_)) | None => format!("Unnamed: {}", col),
                Some(other) => other.to_string().trim().to_string(),
            })
            .collect()
    }

    /// Every row below the header, in sheet order
    fn data_rows(&self, range: &Range<Data>, indices: &ColumnIndices) -> Vec<SourceRow> {
        let Some((end_row, _)) = range.end() else {
            return Vec::new();
        };

        let cell = |row: u32, col: usize| -> CellValue {
            range
                .get_value((row, col as u32))
                .map(Self::convert_cell)
                .unwrap_or(CellValue::Empty)
        };

        (self.header_row + 1..=end_row)
            .map(|row| SourceRow {
                sheet_row: row + 1,
                part_number: cell(row, indices.part_number),
                product_name: cell(row, indices.product_name),
                description: cell(row, indices.description),
                msrp_usd: cell(row, indices.msrp_usd),
                psni_partner_cost: cell(row, indices.psni_partner_cost),
            })
            .collect()
    }

    /// Convert a calamine cell to a reader-independent value
    fn convert_cell(data: &Data) -> CellValue {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::Bool(b) => CellValue::Boolean(*b),
            Data::DateTime(dt) => CellValue::Date(
                dt.as_datetime()
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| dt.as_f64().to_string()),
            ),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Date(s.clone()),
            Data::Error(e) => CellValue::Error(e.to_string()),
        }
    }
}
