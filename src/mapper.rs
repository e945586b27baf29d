//! Price list → template mapping pipeline
//!
//! Validate → coerce/filter → clear template body → populate → save.
//! Everything up to the filter runs before the template is opened, so a
//! schema or data error never touches the output path.

use crate::config::MapperConfig;
use crate::error::{MapperError, MapperResult};
use crate::excel::{SourceReader, TemplateDocument, FIRST_BODY_ROW};
use crate::types::{
    Cost, Exclusion, FilteredRow, ProcessOutcome, ProcessSummary, SourceRow, SourceTable,
    TemplateColumn,
};
use std::path::Path;
use tracing::{debug, info, warn};

/// Maps a vendor price list onto the template layout
#[derive(Debug, Clone, Default)]
pub struct SpreadsheetMapper {
    config: MapperConfig,
}

impl SpreadsheetMapper {
    /// Mapper with the default Lightware configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MapperConfig) -> Self {
        Self { config }
    }

    /// Run the transform and fold any failure into the JSON result shape
    pub fn process(&self, input: &Path, template: &Path, output: &Path) -> ProcessOutcome {
        let result = self.run(input, template, output);
        if let Err(e) = &result {
            warn!(error = %e, "price list mapping failed");
        }
        result.into()
    }

    /// Run the transform end to end
    pub fn run(&self, input: &Path, template: &Path, output: &Path) -> MapperResult<ProcessSummary> {
        info!(input = %input.display(), "reading source price list");
        let table = SourceReader::new(input, &self.config).read()?;

        let rows = self.filter_rows(&table)?;
        let rows_excluded = table.len() - rows.len();
        info!(
            total = table.len(),
            kept = rows.len(),
            excluded = rows_excluded,
            "source rows filtered"
        );

        let mut document = TemplateDocument::open(template)?;
        for column in document.header_mismatches() {
            warn!(
                column = %column.letter(),
                expected = column.header(),
                "template header mismatch"
            );
        }
        let cleared = document.clear_body();
        debug!(
            template = %document.path().display(),
            cleared,
            "template loaded"
        );

        self.populate(&mut document, &rows);
        document.save(output)?;
        info!(output = %output.display(), rows = rows.len(), "output written");

        Ok(ProcessSummary {
            rows_processed: rows.len(),
            rows_excluded,
            output_file: output.display().to_string(),
        })
    }

    /// Keep the rows that carry a numeric cost and every key field.
    ///
    /// The filter is stable. A surviving row whose MSRP is present but not
    /// numeric fails the whole run.
    pub fn filter_rows(&self, table: &SourceTable) -> MapperResult<Vec<FilteredRow>> {
        let mut kept = Vec::with_capacity(table.len());

        for row in &table.rows {
            match self.classify(row)? {
                Ok(filtered) => kept.push(filtered),
                Err(reason) => {
                    debug!(row = row.sheet_row, reason = ?reason, "row excluded");
                }
            }
        }

        Ok(kept)
    }

    /// Decide whether a single row survives, and why not if it doesn't
    pub fn classify(&self, row: &SourceRow) -> MapperResult<Result<FilteredRow, Exclusion>> {
        let standard_cost = match row.psni_partner_cost.to_cost() {
            Cost::Parsed(cost) => cost,
            Cost::Unparseable => return Ok(Err(Exclusion::UnparseableCost)),
        };

        if let Some(column) = row.missing_field(&self.config) {
            return Ok(Err(Exclusion::MissingField(column)));
        }

        let msrp = row.msrp_usd.as_number().ok_or_else(|| {
            MapperError::Data(format!(
                "Row {}: MSRP USD value '{}' is not a number",
                row.sheet_row,
                row.msrp_usd.as_text()
            ))
        })?;

        Ok(Ok(FilteredRow {
            master_no: row.part_number.as_text(),
            part_no: row.product_name.as_text(),
            description: row.description.as_text(),
            standard_cost,
            msrp,
        }))
    }

    /// Write every surviving row below the template header
    fn populate(&self, document: &mut TemplateDocument, rows: &[FilteredRow]) {
        for (offset, row) in (0u32..).zip(rows) {
            document
                .row(FIRST_BODY_ROW + offset)
                .text(TemplateColumn::MasterNo, &row.master_no)
                .text(TemplateColumn::PartNo, &row.part_no)
                .text(TemplateColumn::Description, &row.description)
                .number(TemplateColumn::StandardCost, row.standard_cost)
                .number(TemplateColumn::Msrp, row.msrp)
                .text(TemplateColumn::Manufacturer, &self.config.manufacturer)
                .text(TemplateColumn::Taxable, &self.config.taxable)
                .text(TemplateColumn::UseTaxFlag, &self.config.use_tax_flag);
        }
    }
}
