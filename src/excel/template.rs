//! Template workbook editing - clear the body, write rows, save

use crate::error::MapperResult;
use crate::types::TemplateColumn;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use umya_spreadsheet::{Spreadsheet, Worksheet};

/// First template row below the header (1-based, as in Excel)
pub const FIRST_BODY_ROW: u32 = 2;

/// A loaded template workbook.
///
/// Only the active worksheet is edited; other sheets, styles and workbook
/// metadata are written back as they were read.
pub struct TemplateDocument {
    path: PathBuf,
    book: Spreadsheet,
}

impl TemplateDocument {
    /// Load the template (.xlsx) into memory
    pub fn open<P: AsRef<Path>>(path: P) -> MapperResult<Self> {
        let path = path.as_ref().to_path_buf();
        let book = umya_spreadsheet::reader::xlsx::read(&path)?;
        Ok(Self { path, book })
    }

    /// Path the template was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Highest used row of the active sheet (1-based, 0 when empty)
    pub fn highest_row(&self) -> u32 {
        self.book.get_active_sheet().get_highest_row()
    }

    /// Mapped columns whose row-1 name differs from the expected header
    pub fn header_mismatches(&self) -> Vec<TemplateColumn> {
        let sheet = self.book.get_active_sheet();
        TemplateColumn::ALL
            .iter()
            .copied()
            .filter(|col| sheet.get_value((col.index(), 1)).trim() != col.header())
            .collect()
    }

    /// Delete every row below the header.
    ///
    /// Returns the number of rows removed.
    pub fn clear_body(&mut self) -> u32 {
        let max_row = self.highest_row();
        if max_row < FIRST_BODY_ROW {
            return 0;
        }

        let count = max_row - 1;
        self.sheet_mut().remove_row(&FIRST_BODY_ROW, &count);
        debug!(rows = count, "cleared template body");
        count
    }

    /// Writer for a 1-based sheet row
    pub fn row(&mut self, row: u32) -> RowWriter<'_> {
        RowWriter {
            sheet: self.sheet_mut(),
            row,
        }
    }

    /// Persist the workbook, creating or overwriting `output`
    pub fn save<P: AsRef<Path>>(&self, output: P) -> MapperResult<()> {
        umya_spreadsheet::writer::xlsx::write(&self.book, output.as_ref())?;
        debug!(path = %output.as_ref().display(), "template saved");
        Ok(())
    }

    fn sheet_mut(&mut self) -> &mut Worksheet {
        self.book.get_active_sheet_mut()
    }
}

/// Cell writes for a single template row, addressed by [`TemplateColumn`]
pub struct RowWriter<'a> {
    sheet: &'a mut Worksheet,
    row: u32,
}

impl RowWriter<'_> {
    pub fn text(&mut self, column: TemplateColumn, value: &str) -> &mut Self {
        trace!(cell = %format!("{}{}", column.letter(), self.row), value, "write text");
        self.sheet
            .get_cell_mut((column.index(), self.row))
            .set_value_string(value);
        self
    }

    pub fn number(&mut self, column: TemplateColumn, value: f64) -> &mut Self {
        trace!(cell = %format!("{}{}", column.letter(), self.row), value, "write number");
        self.sheet
            .get_cell_mut((column.index(), self.row))
            .set_value_number(value);
        self
    }
}
