//! Display configuration for variant tables and needle plots.
//!
//! Every field has a built-in default, so a configuration file only
//! needs to name what it overrides.

use crate::error::Result;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Column names of the variant table
    pub heading: Vec<String>,
    /// Value used for every annotation field of an unannotated variant
    pub placeholder: String,
    /// Joins annotation values that differ between transcripts
    pub annotation_separator: String,
    pub x_label: String,
    pub y_label: String,
    pub range_slider: bool,
    pub display_minor_domains: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            heading: [
                "CHROM",
                "POS",
                "REF",
                "ALT",
                "FILTER",
                "DP",
                "REF_DP",
                "ALT_DP",
                "AF",
                "HGVS_C",
                "HGVS_P",
                "HGVS_P_1LETTER",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            placeholder: "-".to_owned(),
            annotation_separator: " - ".to_owned(),
            x_label: "Genome Position".to_owned(),
            y_label: "Allele Frequency".to_owned(),
            range_slider: true,
            display_minor_domains: false,
        }
    }
}

impl DisplayConfig {
    /// Load a configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_default_heading_has_twelve_columns() {
        let config = DisplayConfig::default();
        assert_eq!(config.heading.len(), 12);
        assert_eq!(config.heading[0], "CHROM");
        assert_eq!(config.heading[11], "HGVS_P_1LETTER");
    }

    #[test]
    fn test_partial_json_keeps_defaults() -> Result<(), Box<dyn Error>> {
        let config = DisplayConfig::from_json(r#"{"placeholder": "NA", "range_slider": false}"#)?;
        assert_eq!(config.placeholder, "NA");
        assert!(!config.range_slider);
        assert_eq!(config.annotation_separator, " - ");
        assert_eq!(config.x_label, "Genome Position");
        Ok(())
    }
}
