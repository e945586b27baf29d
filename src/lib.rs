//! pricelist-mapper - Lightware price list → Q360 item template
//!
//! Reads a vendor price list, validates its columns, drops rows without a
//! numeric partner cost or a required field, and writes the survivors into
//! the body of a template workbook.
//!
//! # Example
//!
//! ```no_run
//! use pricelist_mapper::SpreadsheetMapper;
//! use std::path::Path;
//!
//! let mapper = SpreadsheetMapper::new();
//! let summary = mapper.run(
//!     Path::new("lightware.xlsx"),
//!     Path::new("q360_template.xlsx"),
//!     Path::new("q360_lightware.xlsx"),
//! )?;
//!
//! println!("Rows written: {}", summary.rows_processed);
//! println!("Rows excluded: {}", summary.rows_excluded);
//! # Ok::<(), pricelist_mapper::MapperError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod mapper;
pub mod types;

// Re-export commonly used types
pub use config::MapperConfig;
pub use error::{MapperError, MapperResult};
pub use mapper::SpreadsheetMapper;
pub use types::{FilteredRow, ProcessOutcome, ProcessSummary, SourceRow, SourceTable};
