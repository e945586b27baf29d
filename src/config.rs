//! Mapper configuration
//!
//! Everything the transform treats as a constant lives here so the library
//! can be pointed at a differently shaped price list without touching the
//! pipeline. The CLI always runs with [`MapperConfig::default`].

/// Text values the vendor export uses for "no value".
pub const DEFAULT_MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Mapper configuration
#[derive(Debug, Clone)]
pub struct MapperConfig {
    /// Zero-based physical row holding the source column names
    pub header_row: u32,
    /// Written to MANUFACTURER on every body row
    pub manufacturer: String,
    /// Written to TAXABLE on every body row
    pub taxable: String,
    /// Written to USETAXFLAG on every body row
    pub use_tax_flag: String,
    /// Text cells equal to one of these (after trim) count as missing
    pub missing_markers: Vec<String>,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            header_row: 2,
            manufacturer: "Lightware".to_string(),
            taxable: "Y".to_string(),
            use_tax_flag: "Y".to_string(),
            missing_markers: DEFAULT_MISSING_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl MapperConfig {
    /// True when `text` is empty or exactly one of the missing-value markers.
    ///
    /// No trimming: whitespace-only or padded text is a value.
    pub fn is_missing_text(&self, text: &str) -> bool {
        text.is_empty() || self.missing_markers.iter().any(|m| m == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = MapperConfig::default();
        assert_eq!(config.header_row, 2);
        assert_eq!(config.manufacturer, "Lightware");
        assert_eq!(config.taxable, "Y");
        assert_eq!(config.use_tax_flag, "Y");
    }

    #[test]
    fn test_is_missing_text() {
        let config = MapperConfig::default();
        assert!(config.is_missing_text(""));
        assert!(config.is_missing_text("N/A"));
        assert!(config.is_missing_text("NaN"));
        assert!(!config.is_missing_text("   "));
        assert!(!config.is_missing_text(" N/A "));
        assert!(!config.is_missing_text("LW-100"));
        assert!(!config.is_missing_text("n.a."));
    }
}
