#![crate_name = "variant_view"]
use serde::Deserialize;

pub mod prelude;

pub mod annotation;
pub mod config;
pub mod error;
pub mod lookup;
pub mod memory;
pub mod needle;
pub mod observable;
pub mod scalars;
pub mod sqlite;
pub mod store;
pub mod table;

pub type ChromosomeId = u32;
pub type OrganismId = u32;
pub type GeneId = u32;
pub type SampleId = u32;
pub type EffectId = u32;
pub type VariantId = u32;
pub type VariantInSampleId = u32;
pub type AnnotationId = u32;
pub type Position = u32;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Chromosome {
    pub id: ChromosomeId,
    pub chromosome: String,
    /// Creation time in seconds since the epoch
    pub created_at: i64,
}

impl Chromosome {
    pub fn new(id: ChromosomeId, chromosome: &str, created_at: i64) -> Self {
        Self {
            id,
            chromosome: chromosome.into(),
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrganismAnnotation {
    pub id: OrganismId,
    pub organism_code: String,
}

impl OrganismAnnotation {
    pub fn new(id: OrganismId, organism_code: &str) -> Self {
        Self {
            id,
            organism_code: organism_code.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Gene {
    pub id: GeneId,
    pub chromosome_id: ChromosomeId,
    pub gene_name: String,
    pub gene_start: Position,
    pub gene_end: Position,
}

impl Gene {
    pub fn new(
        id: GeneId,
        chromosome_id: ChromosomeId,
        gene_name: &str,
        gene_start: Position,
        gene_end: Position,
    ) -> Self {
        Self {
            id,
            chromosome_id,
            gene_name: gene_name.into(),
            gene_start,
            gene_end,
        }
    }

    /// Start and end joined with a hyphen, e.g. `"266-21555"`
    pub fn coordinates(&self) -> String {
        format!("{}-{}", self.gene_start, self.gene_end)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sample {
    pub id: SampleId,
    pub sample_name: String,
}

impl Sample {
    pub fn new(id: SampleId, sample_name: &str) -> Self {
        Self {
            id,
            sample_name: sample_name.into(),
        }
    }
}

/// Effect type referenced by annotations, e.g. `missense_variant`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Effect {
    pub id: EffectId,
    pub effect: String,
}

impl Effect {
    pub fn new(id: EffectId, effect: &str) -> Self {
        Self {
            id,
            effect: effect.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub chromosome_id: ChromosomeId,
    pub pos: Position,
    #[serde(rename = "ref")]
    pub reference: String,
    pub alt: String,
    pub filter: String,
}

impl Variant {
    pub fn new(
        id: VariantId,
        chromosome_id: ChromosomeId,
        pos: Position,
        reference: &str,
        alt: &str,
        filter: &str,
    ) -> Self {
        Self {
            id,
            chromosome_id,
            pos,
            reference: reference.into(),
            alt: alt.into(),
            filter: filter.into(),
        }
    }
}

/// Observation of a `Variant` in one `Sample`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariantInSample {
    pub id: VariantInSampleId,
    pub sample_id: SampleId,
    pub variant_id: VariantId,
    pub dp: u32,
    pub ref_dp: u32,
    pub alt_dp: u32,
    pub af: f64,
}

impl VariantInSample {
    /// DP, REF_DP, ALT_DP and AF as display strings
    ///
    /// AF always keeps a decimal point, `1.0` rather than `1`.
    pub fn measurements(&self) -> [String; 4] {
        [
            self.dp.to_string(),
            self.ref_dp.to_string(),
            self.alt_dp.to_string(),
            format!("{:?}", self.af),
        ]
    }
}

/// Predicted effect of a `Variant` on one transcript
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariantAnnotation {
    pub id: AnnotationId,
    pub variant_id: VariantId,
    pub effect_id: EffectId,
    pub hgvs_c: String,
    pub hgvs_p: String,
    pub hgvs_p_1letter: String,
}

impl VariantAnnotation {
    /// HGVS_C, HGVS_P and HGVS_P_1LETTER
    pub fn fields(&self) -> [&str; 3] {
        [&self.hgvs_c, &self.hgvs_p, &self.hgvs_p_1letter]
    }
}

/// A single row of any table a store holds
///
/// Stores that are filled from an arbitrary data source consume
/// an iterator of `Result<Record>`, see `MemoryStore::observe()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Chromosome(Chromosome),
    Organism(OrganismAnnotation),
    Gene(Gene),
    Sample(Sample),
    Effect(Effect),
    Variant(Variant),
    VariantInSample(VariantInSample),
    Annotation(VariantAnnotation),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_allele_frequency_keeps_decimal_point() {
        let observation = VariantInSample {
            id: 1,
            sample_id: 1,
            variant_id: 1,
            dp: 12,
            ref_dp: 0,
            alt_dp: 12,
            af: 1.0,
        };
        assert_eq!(observation.measurements(), ["12", "0", "12", "1.0"]);
    }

    #[test]
    fn test_fractional_allele_frequency_unchanged() {
        let observation = VariantInSample {
            id: 1,
            sample_id: 1,
            variant_id: 1,
            dp: 100,
            ref_dp: 2,
            alt_dp: 98,
            af: 0.98,
        };
        assert_eq!(observation.measurements()[3], "0.98");
    }
}
