//! Spreadsheet I/O for the price list mapper
//!
//! - Reader: vendor price list (xlsx, xls, xlsb, ods) → SourceTable
//! - Template: Q360 import template (.xlsx), edited in place and saved

mod reader;
mod template;

pub use reader::SourceReader;
pub use template::{RowWriter, TemplateDocument, FIRST_BODY_ROW};
