//! Mutation data for needle plots.
//!
//! `needle_data()` gathers, for one sample, the position and allele
//! frequency of every observed variant, the effect of every annotation
//! of those variants and the genes of their chromosome. `needle_plot()`
//! wraps the result with the chart options.
//!
//! `mutation_groups` has one entry per annotation while `x` and `y` have
//! one per observation, so the lengths differ whenever a variant has no
//! annotation or two of them. Charts consuming this data must tolerate
//! that. An annotation whose effect row is missing still gets its entry,
//! as `null`.

use crate::lookup;
use crate::prelude::*;
use log::{debug, warn};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;

/// A gene drawn as a labelled region along the position axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Domain {
    pub name: String,
    /// `"start-end"`
    pub coord: String,
}

impl From<Gene> for Domain {
    fn from(gene: Gene) -> Self {
        Self {
            coord: gene.coordinates(),
            name: gene.gene_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MutationData {
    pub x: Vec<Position>,
    pub y: Vec<f64>,
    #[serde(rename = "mutationGroups")]
    pub mutation_groups: Vec<Option<String>>,
    pub domains: Vec<Domain>,
}

/// Genes of a chromosome as chart domains, in store order
pub fn domains<S: VariantStore>(store: &S, chromosome: ChromosomeId) -> Result<Vec<Domain>> {
    Ok(store
        .genes_on(chromosome)?
        .into_iter()
        .map(Domain::from)
        .collect())
}

/// Domains of the chromosome with the given label
///
/// Empty when the chromosome does not exist or has no genes.
pub fn domains_list<S: VariantStore>(store: &S, label: &str) -> Result<Vec<Domain>> {
    match lookup::gene_records(store, label)? {
        Some(genes) => Ok(genes.into_iter().map(Domain::from).collect()),
        None => Ok(vec![]),
    }
}

/// Chromosome of the last annotation of the first variant, falling
/// back to the second variant when the first is not annotated
pub fn resolve_chromosome<S: VariantStore>(
    store: &S,
    variants: &[VariantId],
) -> Result<ChromosomeId> {
    let tried: Vec<VariantId> = variants.iter().take(2).cloned().collect();
    for (idx, variant_id) in tried.iter().enumerate() {
        let annotation = match store.annotations(*variant_id)?.pop() {
            Some(annotation) => annotation,
            None => continue,
        };
        if let Some(variant) = store.variant(annotation.variant_id)? {
            if idx > 0 {
                warn!(
                    "variant {} is not annotated, chromosome taken from variant {}",
                    tried[0], variant_id
                );
            }
            return Ok(variant.chromosome_id);
        }
    }
    Err(Error::ChromosomeUnresolvable { tried })
}

/// Collect the needle-plot data of a sample
///
/// An unknown sample or one without observations gives empty data.
/// Fails with `Error::ChromosomeUnresolvable` when neither of the first
/// two observed variants is annotated.
pub fn needle_data<S: VariantStore>(store: &S, sample_id: SampleId) -> Result<MutationData> {
    let mut data = MutationData::default();
    let sample = match store.sample(sample_id)? {
        Some(sample) => sample,
        None => {
            warn!("sample {} not found, no mutation data", sample_id);
            return Ok(data);
        }
    };
    let observations = store.variants_in_sample(sample.id)?;
    if observations.is_empty() {
        return Ok(data);
    }

    let mut v_ids = Vec::with_capacity(observations.len());
    for observation in &observations {
        let pos = match store.variant(observation.variant_id)? {
            Some(variant) => variant.pos,
            None => {
                warn!(
                    "observation {} refers to missing variant {}",
                    observation.id, observation.variant_id
                );
                continue;
            }
        };
        data.x.push(pos);
        data.y.push(observation.af);
        v_ids.push(observation.variant_id);
    }

    let mut effects: HashMap<EffectId, Option<String>> = HashMap::new();
    for annotation in store.annotations_for(&v_ids)? {
        if !effects.contains_key(&annotation.effect_id) {
            let label = store.effect(annotation.effect_id)?.map(|e| e.effect);
            if label.is_none() {
                warn!(
                    "annotation {} refers to missing effect {}",
                    annotation.id, annotation.effect_id
                );
            }
            effects.insert(annotation.effect_id, label);
        }
        data.mutation_groups
            .push(effects.get(&annotation.effect_id).cloned().flatten());
    }

    let chromosome = resolve_chromosome(store, &v_ids)?;
    data.domains = domains(store, chromosome)?;
    debug!(
        "sample {}: {} positions, {} mutation groups, {} domains",
        sample.sample_name,
        data.x.len(),
        data.mutation_groups.len(),
        data.domains.len()
    );
    Ok(data)
}

/// Chart-ready needle plot properties
pub fn needle_plot(data: &MutationData, config: &DisplayConfig) -> Result<Value> {
    Ok(json!({
        "mutationData": serde_json::to_value(data)?,
        "rangeSlider": config.range_slider,
        "xlabel": config.x_label,
        "ylabel": config.y_label,
        "domainStyle": { "displayMinorDomains": config.display_minor_domains },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{fixture, MemoryStore};
    use std::error::Error;

    #[test]
    fn test_domains_in_store_order() -> Result<(), Box<dyn Error>> {
        let mut store = MemoryStore::new();
        store
            .insert(Record::Chromosome(Chromosome::new(1, "chr", 0)))
            .insert(Record::Gene(Gene::new(1, 1, "G1", 10, 50)))
            .insert(Record::Gene(Gene::new(2, 1, "G2", 60, 90)));
        assert_eq!(
            serde_json::to_value(domains(&store, 1)?)?,
            json!([{"name": "G1", "coord": "10-50"}, {"name": "G2", "coord": "60-90"}])
        );
        assert_eq!(domains_list(&store, "chr")?.len(), 2);
        assert!(domains_list(&store, "other")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_needle_data_keeps_length_mismatch() -> Result<(), Box<dyn Error>> {
        let data = needle_data(&fixture(), 1)?;
        assert_eq!(data.x, vec![241, 3037, 23403]);
        assert_eq!(data.y, vec![0.98, 0.5, 0.25]);
        assert_eq!(
            data.mutation_groups,
            vec![
                Some("synonymous_variant".to_owned()),
                Some("missense_variant".to_owned()),
                Some("missense_variant".to_owned()),
            ]
        );
        assert_eq!(data.domains.len(), 2);

        // one observation, two annotations
        let mut store = fixture();
        store.insert(Record::VariantInSample(VariantInSample {
            id: 4,
            sample_id: 2,
            variant_id: 3,
            dp: 10,
            ref_dp: 5,
            alt_dp: 5,
            af: 0.5,
        }));
        let data = needle_data(&store, 2)?;
        assert_eq!(data.x.len(), 1);
        assert_eq!(data.mutation_groups.len(), 2);
        assert_ne!(data.x.len(), data.mutation_groups.len());
        Ok(())
    }

    #[test]
    fn test_missing_effect_keeps_its_mutation_group() -> Result<(), Box<dyn Error>> {
        let mut store = fixture();
        store.insert(Record::Annotation(VariantAnnotation {
            id: 9,
            variant_id: 2,
            effect_id: 77,
            hgvs_c: "c.2772C>T".into(),
            hgvs_p: "p.Phe924Phe".into(),
            hgvs_p_1letter: "p.F924F".into(),
        }));
        let data = needle_data(&store, 1)?;
        assert_eq!(data.mutation_groups.len(), 4);
        assert_eq!(data.mutation_groups[3], None);
        let json = serde_json::to_value(&data)?;
        assert!(json["mutationGroups"][3].is_null());
        Ok(())
    }

    #[test]
    fn test_chart_shape_has_no_variant_ids() -> Result<(), Box<dyn Error>> {
        let json = serde_json::to_value(needle_data(&fixture(), 1)?)?;
        let keys: Vec<&String> = json.as_object().map(|o| o.keys().collect()).unwrap_or_default();
        assert_eq!(keys.len(), 4);
        assert!(json.get("v_id").is_none());
        assert_eq!(json["mutationGroups"][0], "synonymous_variant");
        assert_eq!(json["domains"][1]["coord"], "21563-25384");
        Ok(())
    }

    #[test]
    fn test_chromosome_falls_back_to_second_variant() -> Result<(), Box<dyn Error>> {
        // variant 1 is not annotated, variant 2 is
        assert_eq!(resolve_chromosome(&fixture(), &[1, 2])?, 1);
        Ok(())
    }

    #[test]
    fn test_chromosome_unresolvable_without_annotations() -> Result<(), Box<dyn Error>> {
        let mut store = fixture();
        store.insert(Record::Variant(Variant::new(4, 1, 500, "G", "A", "PASS")));
        match resolve_chromosome(&store, &[1, 4, 2]) {
            Err(crate::error::Error::ChromosomeUnresolvable { tried }) => {
                assert_eq!(tried, vec![1, 4])
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(resolve_chromosome(&store, &[1]).is_err());
        Ok(())
    }

    #[test]
    fn test_needle_data_fails_when_chromosome_unresolvable() {
        let mut store = MemoryStore::new();
        store
            .insert(Record::Sample(Sample::new(1, "s1")))
            .insert(Record::Variant(Variant::new(1, 1, 10, "A", "C", "PASS")))
            .insert(Record::Variant(Variant::new(2, 1, 20, "A", "C", "PASS")))
            .insert(Record::VariantInSample(VariantInSample {
                id: 1,
                sample_id: 1,
                variant_id: 1,
                dp: 1,
                ref_dp: 0,
                alt_dp: 1,
                af: 1.0,
            }))
            .insert(Record::VariantInSample(VariantInSample {
                id: 2,
                sample_id: 1,
                variant_id: 2,
                dp: 1,
                ref_dp: 0,
                alt_dp: 1,
                af: 1.0,
            }));
        assert!(needle_data(&store, 1).is_err());
    }

    #[test]
    fn test_empty_sample_gives_empty_data() -> Result<(), Box<dyn Error>> {
        assert_eq!(needle_data(&fixture(), 2)?, MutationData::default());
        assert_eq!(needle_data(&fixture(), 99)?, MutationData::default());
        Ok(())
    }

    #[test]
    fn test_needle_plot_properties() -> Result<(), Box<dyn Error>> {
        let config = DisplayConfig {
            range_slider: false,
            ..DisplayConfig::default()
        };
        let plot = needle_plot(&needle_data(&fixture(), 1)?, &config)?;
        assert_eq!(plot["rangeSlider"], false);
        assert_eq!(plot["xlabel"], "Genome Position");
        assert_eq!(plot["ylabel"], "Allele Frequency");
        assert_eq!(plot["domainStyle"]["displayMinorDomains"], false);
        assert_eq!(plot["mutationData"]["x"][2], 23403);
        Ok(())
    }
}
