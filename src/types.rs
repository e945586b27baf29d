use crate::config::MapperConfig;
use crate::error::{MapperError, MapperResult};
use serde::Serialize;

//==============================================================================
// Source Cells
//==============================================================================

/// A single source cell after import, detached from the spreadsheet reader
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Boolean(bool),
    /// Date, time or duration cell, rendered as `YYYY-MM-DD HH:MM:SS` (ISO
    /// text for ISO-typed cells)
    Date(String),
    /// Formula error such as `#N/A` or `#REF!`
    Error(String),
}

impl CellValue {
    /// True when the cell carries no usable value
    pub fn is_missing(&self, config: &MapperConfig) -> bool {
        match self {
            CellValue::Empty | CellValue::Error(_) => true,
            CellValue::Text(s) => config.is_missing_text(s),
            CellValue::Number(n) => n.is_nan(),
            CellValue::Boolean(_) | CellValue::Date(_) => false,
        }
    }

    /// Render the cell as text for the template's string columns
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Boolean(b) => (if *b { "True" } else { "False" }).to_string(),
            CellValue::Date(s) | CellValue::Error(s) => s.clone(),
        }
    }

    /// Numeric reading of the cell, if it has one
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            CellValue::Number(n) => *n,
            CellValue::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
            CellValue::Empty | CellValue::Date(_) | CellValue::Error(_) => return None,
        };
        n.is_finite().then_some(n)
    }

    /// Coerce the cell into a partner cost
    pub fn to_cost(&self) -> Cost {
        match self.as_number() {
            Some(n) => Cost::Parsed(n),
            None => Cost::Unparseable,
        }
    }
}

/// Outcome of coercing `PSNI PARTNER COST`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cost {
    Parsed(f64),
    Unparseable,
}

//==============================================================================
// Source Schema
//==============================================================================

/// Columns the source price list must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredColumn {
    PartNumber,
    ProductName,
    Description,
    MsrpUsd,
    PsniPartnerCost,
}

impl RequiredColumn {
    pub const ALL: [RequiredColumn; 5] = [
        RequiredColumn::PartNumber,
        RequiredColumn::ProductName,
        RequiredColumn::Description,
        RequiredColumn::MsrpUsd,
        RequiredColumn::PsniPartnerCost,
    ];

    /// Header text as it appears in the vendor file (after trim)
    pub fn header(&self) -> &'static str {
        match self {
            RequiredColumn::PartNumber => "Part number",
            RequiredColumn::ProductName => "Product name",
            RequiredColumn::Description => "Description",
            RequiredColumn::MsrpUsd => "MSRP USD",
            RequiredColumn::PsniPartnerCost => "PSNI PARTNER COST",
        }
    }
}

/// Zero-based positions of the required columns within a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub part_number: usize,
    pub product_name: usize,
    pub description: usize,
    pub msrp_usd: usize,
    pub psni_partner_cost: usize,
}

impl ColumnIndices {
    /// Resolve every required column against the discovered header names.
    ///
    /// Matching is exact and case-sensitive; the first occurrence wins when
    /// a name is duplicated. All missing names are reported together.
    pub fn resolve(columns: &[String]) -> MapperResult<Self> {
        let find = |col: RequiredColumn| columns.iter().position(|c| c == col.header());

        let missing: Vec<String> = RequiredColumn::ALL
            .iter()
            .filter(|col| find(**col).is_none())
            .map(|col| col.header().to_string())
            .collect();

        match (
            find(RequiredColumn::PartNumber),
            find(RequiredColumn::ProductName),
            find(RequiredColumn::Description),
            find(RequiredColumn::MsrpUsd),
            find(RequiredColumn::PsniPartnerCost),
        ) {
            (
                Some(part_number),
                Some(product_name),
                Some(description),
                Some(msrp_usd),
                Some(psni_partner_cost),
            ) => Ok(Self {
                part_number,
                product_name,
                description,
                msrp_usd,
                psni_partner_cost,
            }),
            _ => Err(MapperError::Schema {
                missing,
                found: columns.to_vec(),
            }),
        }
    }
}

/// One data row of the source price list
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    /// 1-based row number as shown in Excel
    pub sheet_row: u32,
    pub part_number: CellValue,
    pub product_name: CellValue,
    pub description: CellValue,
    pub msrp_usd: CellValue,
    pub psni_partner_cost: CellValue,
}

impl SourceRow {
    /// First key field that is missing, if any
    pub fn missing_field(&self, config: &MapperConfig) -> Option<RequiredColumn> {
        [
            (RequiredColumn::PartNumber, &self.part_number),
            (RequiredColumn::ProductName, &self.product_name),
            (RequiredColumn::Description, &self.description),
            (RequiredColumn::MsrpUsd, &self.msrp_usd),
        ]
        .into_iter()
        .find(|(_, cell)| cell.is_missing(config))
        .map(|(col, _)| col)
    }
}

/// Parsed source sheet: discovered header names plus every data row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTable {
    pub columns: Vec<String>,
    pub rows: Vec<SourceRow>,
}

impl SourceTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Why a source row was left out of the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    UnparseableCost,
    MissingField(RequiredColumn),
}

/// A source row that survived filtering, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredRow {
    pub master_no: String,
    pub part_no: String,
    pub description: String,
    pub standard_cost: f64,
    pub msrp: f64,
}

//==============================================================================
// Template Layout
//==============================================================================

/// Template columns written by the mapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateColumn {
    MasterNo,
    PartNo,
    Description,
    Manufacturer,
    Taxable,
    UseTaxFlag,
    StandardCost,
    Msrp,
}

impl TemplateColumn {
    pub const ALL: [TemplateColumn; 8] = [
        TemplateColumn::MasterNo,
        TemplateColumn::PartNo,
        TemplateColumn::Description,
        TemplateColumn::Manufacturer,
        TemplateColumn::Taxable,
        TemplateColumn::UseTaxFlag,
        TemplateColumn::StandardCost,
        TemplateColumn::Msrp,
    ];

    /// 1-based worksheet column index (A = 1)
    pub fn index(&self) -> u32 {
        match self {
            TemplateColumn::MasterNo => 1,
            TemplateColumn::PartNo => 3,
            TemplateColumn::Description => 5,
            TemplateColumn::Manufacturer => 9,
            TemplateColumn::Taxable => 10,
            TemplateColumn::UseTaxFlag => 11,
            TemplateColumn::StandardCost => 19,
            TemplateColumn::Msrp => 20,
        }
    }

    /// Column letter as shown in Excel
    pub fn letter(&self) -> String {
        column_letter(self.index())
    }

    /// Template header text
    pub fn header(&self) -> &'static str {
        match self {
            TemplateColumn::MasterNo => "MASTERNO",
            TemplateColumn::PartNo => "PARTNO",
            TemplateColumn::Description => "DESCRIPTION",
            TemplateColumn::Manufacturer => "MANUFACTURER",
            TemplateColumn::Taxable => "TAXABLE",
            TemplateColumn::UseTaxFlag => "USETAXFLAG",
            TemplateColumn::StandardCost => "STANDARDCOST",
            TemplateColumn::Msrp => "MSRP",
        }
    }
}

/// Convert a 1-based column index to its letter (1→A, 26→Z, 27→AA)
pub fn column_letter(index: u32) -> String {
    let mut result = String::new();
    let mut num = index;

    while num > 0 {
        let remainder = (num - 1) % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        num = (num - 1) / 26;
    }

    result
}

//==============================================================================
// Results
//==============================================================================

/// Counts reported after a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessSummary {
    pub rows_processed: usize,
    pub rows_excluded: usize,
    pub output_file: String,
}

/// JSON payload printed by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProcessOutcome {
    Success {
        success: bool,
        #[serde(flatten)]
        summary: ProcessSummary,
    },
    Failure {
        error: String,
    },
}

impl From<MapperResult<ProcessSummary>> for ProcessOutcome {
    fn from(result: MapperResult<ProcessSummary>) -> Self {
        match result {
            Ok(summary) => ProcessOutcome::Success {
                success: true,
                summary,
            },
            Err(e) => ProcessOutcome::Failure {
                error: e.to_string(),
            },
        }
    }
}
