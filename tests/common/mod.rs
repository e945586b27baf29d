//! Shared fixtures: build source/template workbooks, read outputs back

#![allow(dead_code)]

use calamine::{open_workbook_auto, Data, Range, Reader};
use rust_xlsxwriter::Workbook;
use std::path::Path;

pub const REQUIRED_HEADERS: [&str; 5] = [
    "Part number",
    "Product name",
    "Description",
    "MSRP USD",
    "PSNI PARTNER COST",
];

/// Template header row A..U; only the mapped columns carry Q360 names
pub const TEMPLATE_HEADERS: [&str; 21] = [
    "MASTERNO",
    "COL_B",
    "PARTNO",
    "COL_D",
    "DESCRIPTION",
    "COL_F",
    "COL_G",
    "COL_H",
    "MANUFACTURER",
    "TAXABLE",
    "USETAXFLAG",
    "COL_L",
    "COL_M",
    "COL_N",
    "COL_O",
    "COL_P",
    "COL_Q",
    "COL_R",
    "STANDARDCOST",
    "MSRP",
    "COL_U",
];

/// Fixture cell
#[derive(Debug, Clone, Copy)]
pub enum Fx {
    S(&'static str),
    N(f64),
    E,
}

/// One source row in required-header order
pub fn price_row(part: Fx, product: Fx, description: Fx, msrp: Fx, cost: Fx) -> Vec<Fx> {
    vec![part, product, description, msrp, cost]
}

/// A fully valid row with numeric MSRP and cost
pub fn valid_row(part: &'static str, msrp: f64, cost: f64) -> Vec<Fx> {
    price_row(
        Fx::S(part),
        Fx::S("Product"),
        Fx::S("Description"),
        Fx::N(msrp),
        Fx::N(cost),
    )
}

/// Write a vendor price list: two title rows, header on row index 2, data below
pub fn write_source(path: &Path, headers: &[&str], rows: &[Vec<Fx>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Price list").unwrap();

    worksheet
        .write_string(0, 0, "Lightware Visual Engineering")
        .unwrap();
    worksheet.write_string(1, 0, "Partner price list").unwrap();

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(2, col as u16, *header).unwrap();
    }

    for (idx, row) in rows.iter().enumerate() {
        let excel_row = idx as u32 + 3;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Fx::S(s) => {
                    worksheet.write_string(excel_row, col as u16, *s).unwrap();
                }
                Fx::N(n) => {
                    worksheet.write_number(excel_row, col as u16, *n).unwrap();
                }
                Fx::E => {}
            }
        }
    }

    workbook.save(path).unwrap();
}

/// Write a template with a header row, `stale_rows` filled body rows and a
/// second "Notes" sheet
pub fn write_template(path: &Path, stale_rows: u32) {
    let mut workbook = Workbook::new();
    let items = workbook.add_worksheet();
    items.set_name("Items").unwrap();

    for (col, header) in TEMPLATE_HEADERS.iter().enumerate() {
        items.write_string(0, col as u16, *header).unwrap();
    }

    for row in 1..=stale_rows {
        for col in 0..TEMPLATE_HEADERS.len() as u16 {
            items.write_string(row, col, "stale").unwrap();
        }
    }

    let notes = workbook.add_worksheet();
    notes.set_name("Notes").unwrap();
    notes.write_string(0, 0, "Do not edit").unwrap();

    workbook.save(path).unwrap();
}

/// First worksheet of a workbook
pub fn read_first_sheet(path: &Path) -> Range<Data> {
    let mut workbook = open_workbook_auto(path).unwrap();
    workbook.worksheet_range_at(0).unwrap().unwrap()
}

pub fn sheet_names(path: &Path) -> Vec<String> {
    let workbook = open_workbook_auto(path).unwrap();
    workbook.sheet_names().to_vec()
}

/// Text cell at 0-based (row, col)
pub fn text_at(range: &Range<Data>, row: u32, col: u32) -> Option<String> {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// Numeric cell at 0-based (row, col)
pub fn number_at(range: &Range<Data>, row: u32, col: u32) -> Option<f64> {
    match range.get_value((row, col)) {
        Some(Data::Float(f)) => Some(*f),
        Some(Data::Int(i)) => Some(*i as f64),
        _ => None,
    }
}

/// True when the cell at 0-based (row, col) holds no value
pub fn is_blank(range: &Range<Data>, row: u32, col: u32) -> bool {
    matches!(range.get_value((row, col)), None | Some(Data::Empty))
}

/// Every cell of the sheet, row by row
pub fn cell_grid(range: &Range<Data>) -> Vec<Vec<Data>> {
    range.rows().map(|row| row.to_vec()).collect()
}

/// Rows below the header that hold at least one value
pub fn body_row_count(range: &Range<Data>) -> usize {
    let Some((end_row, end_col)) = range.end() else {
        return 0;
    };

    (1..=end_row)
        .filter(|row| {
            (0..=end_col).any(|col| !is_blank(range, *row, col))
        })
        .count()
}

/// Column A of every body row, in order
pub fn master_numbers(range: &Range<Data>) -> Vec<String> {
    let Some((end_row, _)) = range.end() else {
        return Vec::new();
    };

    (1..=end_row).filter_map(|row| text_at(range, row, 0)).collect()
}
