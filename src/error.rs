use thiserror::Error;

pub type MapperResult<T> = Result<T, MapperError>;

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("Failed to read source file: {0}")]
    Source(#[from] calamine::Error),

    #[error("Template error: {0}")]
    Template(#[from] umya_spreadsheet::XlsxError),

    #[error("Missing columns in source file: {missing:?}. Found columns: {found:?}")]
    Schema {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("Data error: {0}")]
    Data(String),
}
