use crate::prelude::*;
use log::{debug, warn};
use ndarray::Array2;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Variant core, per-sample measurement and annotation columns
pub const COLUMNS: usize = 5 + 4 + 3;

/// Display table of every variant observed in a sample
///
/// Serializes to `{"heading": [...], "variant_data": [[...], ...]}`.
/// `heading` is only present when the sample has observations and
/// both keys are absent when the sample does not exist.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VariantTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<Vec<String>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_rows"
    )]
    pub variant_data: Option<Array2<String>>,
}

fn serialize_rows<S: Serializer>(
    rows: &Option<Array2<String>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match rows {
        Some(rows) => serializer.collect_seq(rows.outer_iter().map(|row| row.to_vec())),
        None => serializer.serialize_none(),
    }
}

impl VariantTable {
    /// Number of variant rows
    pub fn len(&self) -> usize {
        self.variant_data.as_ref().map_or(0, |rows| rows.nrows())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Owned copy of row `idx`
    pub fn row(&self, idx: usize) -> Option<Vec<String>> {
        let rows = self.variant_data.as_ref()?;
        if idx < rows.nrows() {
            Some(rows.row(idx).to_vec())
        } else {
            None
        }
    }
}

/// Assemble the variant table of a sample
///
/// Each row is CHROM, POS, REF, ALT, FILTER, DP, REF_DP, ALT_DP, AF,
/// HGVS_C, HGVS_P and HGVS_P_1LETTER, in the order the store reports
/// the sample's observations.
pub fn variant_table<S: VariantStore>(
    store: &S,
    sample_id: SampleId,
    config: &DisplayConfig,
) -> Result<VariantTable> {
    let sample = match store.sample(sample_id)? {
        Some(sample) => sample,
        None => {
            warn!("sample {} not found, no variant table", sample_id);
            return Ok(VariantTable::default());
        }
    };

    let observations = store.variants_in_sample(sample.id)?;
    let labels: HashMap<ChromosomeId, String> = store
        .chromosomes()?
        .into_iter()
        .map(|c| (c.id, c.chromosome))
        .collect();

    let mut cells = Vec::with_capacity(observations.len() * COLUMNS);
    let mut n_rows = 0;
    for observation in &observations {
        let variant = match store.variant(observation.variant_id)? {
            Some(variant) => variant,
            None => {
                warn!(
                    "observation {} refers to missing variant {}",
                    observation.id, observation.variant_id
                );
                continue;
            }
        };
        cells.push(labels.get(&variant.chromosome_id).cloned().unwrap_or_default());
        cells.push(variant.pos.to_string());
        cells.push(variant.reference);
        cells.push(variant.alt);
        cells.push(variant.filter);
        cells.extend(observation.measurements().iter().cloned());
        cells.extend(reconcile(&store.annotations(variant.id)?, config).iter().cloned());
        n_rows += 1;
    }
    debug!("sample {} variant table has {} rows", sample.sample_name, n_rows);

    Ok(VariantTable {
        heading: if observations.is_empty() {
            None
        } else {
            Some(config.heading.clone())
        },
        variant_data: Some(Array2::from_shape_vec((n_rows, COLUMNS), cells)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::fixture;
    use std::error::Error;

    #[test]
    fn test_rows_combine_variant_measurement_and_annotation() -> Result<(), Box<dyn Error>> {
        let table = variant_table(&fixture(), 1, &DisplayConfig::default())?;
        assert_eq!(table.len(), 3);
        assert_eq!(table.heading.as_ref().map(|h| h.len()), Some(COLUMNS));
        let first: Vec<String> = [
            "NC_045512.2", "241", "C", "T", "PASS", "100", "40", "60", "0.98", "-", "-", "-",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(table.row(0), Some(first));
        assert_eq!(
            table.row(2).map(|r| r[9..].to_vec()),
            Some(vec![
                "c.1841A>G".to_owned(),
                "p.Asp614Gly - p.Asp615Gly".to_owned(),
                "p.D614G - p.D615G".to_owned(),
            ])
        );
        assert_eq!(table.row(3), None);
        Ok(())
    }

    #[test]
    fn test_sample_without_observations_has_no_heading() -> Result<(), Box<dyn Error>> {
        let table = variant_table(&fixture(), 2, &DisplayConfig::default())?;
        assert!(table.heading.is_none());
        assert!(table.is_empty());
        assert_eq!(serde_json::to_string(&table)?, r#"{"variant_data":[]}"#);
        Ok(())
    }

    #[test]
    fn test_unknown_sample_is_empty_object() -> Result<(), Box<dyn Error>> {
        let table = variant_table(&fixture(), 99, &DisplayConfig::default())?;
        assert_eq!(table, VariantTable::default());
        assert_eq!(serde_json::to_string(&table)?, "{}");
        Ok(())
    }

    #[test]
    fn test_serialized_rows_are_nested_sequences() -> Result<(), Box<dyn Error>> {
        let table = variant_table(&fixture(), 1, &DisplayConfig::default())?;
        let json = serde_json::to_value(&table)?;
        assert_eq!(json["heading"][0], "CHROM");
        assert_eq!(json["variant_data"].as_array().map(|rows| rows.len()), Some(3));
        assert_eq!(json["variant_data"][1][10], "p.Phe924Phe");
        Ok(())
    }
}
