use crate::prelude::*;
use std::collections::HashSet;

/// A `VariantStore` holding every table in memory
///
/// Records keep the order they were observed in, which is the
/// natural order this store reports.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    chromosomes: Vec<Chromosome>,
    organisms: Vec<OrganismAnnotation>,
    genes: Vec<Gene>,
    samples: Vec<Sample>,
    effects: Vec<Effect>,
    variants: Vec<Variant>,
    variants_in_sample: Vec<VariantInSample>,
    annotations: Vec<VariantAnnotation>,
}

impl MemoryStore {
    /// Constructs a new empty `MemoryStore`
    ///
    /// The store can be filled up iteratively by calling `observe()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a single `Record`
    pub fn insert(&mut self, record: Record) -> &mut Self {
        match record {
            Record::Chromosome(r) => self.chromosomes.push(r),
            Record::Organism(r) => self.organisms.push(r),
            Record::Gene(r) => self.genes.push(r),
            Record::Sample(r) => self.samples.push(r),
            Record::Effect(r) => self.effects.push(r),
            Record::Variant(r) => self.variants.push(r),
            Record::VariantInSample(r) => self.variants_in_sample.push(r),
            Record::Annotation(r) => self.annotations.push(r),
        }
        self
    }

    /// Observe all the records in the argument.
    ///
    /// Stops at the first failed record; records observed before
    /// it are kept.
    pub fn observe<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<Record>>,
    {
        for record in records {
            self.insert(record?);
        }
        Ok(())
    }

    /// Number of records across all tables
    pub fn len(&self) -> usize {
        self.chromosomes.len()
            + self.organisms.len()
            + self.genes.len()
            + self.samples.len()
            + self.effects.len()
            + self.variants.len()
            + self.variants_in_sample.len()
            + self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl VariantStore for MemoryStore {
    fn chromosomes(&self) -> Result<Vec<Chromosome>> {
        Ok(self.chromosomes.clone())
    }

    fn organisms(&self) -> Result<Vec<OrganismAnnotation>> {
        Ok(self.organisms.clone())
    }

    fn genes(&self) -> Result<Vec<Gene>> {
        Ok(self.genes.clone())
    }

    fn sample(&self, id: SampleId) -> Result<Option<Sample>> {
        Ok(self.samples.iter().find(|s| s.id == id).cloned())
    }

    fn sample_by_name(&self, name: &str) -> Result<Option<Sample>> {
        Ok(self.samples.iter().find(|s| s.sample_name == name).cloned())
    }

    fn effect(&self, id: EffectId) -> Result<Option<Effect>> {
        Ok(self.effects.iter().find(|e| e.id == id).cloned())
    }

    fn variant(&self, id: VariantId) -> Result<Option<Variant>> {
        Ok(self.variants.iter().find(|v| v.id == id).cloned())
    }

    fn variants_in_sample(&self, sample: SampleId) -> Result<Vec<VariantInSample>> {
        Ok(self
            .variants_in_sample
            .iter()
            .filter(|v| v.sample_id == sample)
            .cloned()
            .collect())
    }

    fn variants_in_sample_on(&self, chromosome: ChromosomeId) -> Result<Vec<VariantInSample>> {
        let on_chromosome: HashSet<VariantId> = self
            .variants
            .iter()
            .filter(|v| v.chromosome_id == chromosome)
            .map(|v| v.id)
            .collect();
        Ok(self
            .variants_in_sample
            .iter()
            .filter(|v| on_chromosome.contains(&v.variant_id))
            .cloned()
            .collect())
    }

    fn annotations_for(&self, variants: &[VariantId]) -> Result<Vec<VariantAnnotation>> {
        Ok(self
            .annotations
            .iter()
            .filter(|a| variants.contains(&a.variant_id))
            .cloned()
            .collect())
    }
}

/// Small fixture shared by the tests of the aggregation modules
///
/// Sample 1 observes variants 1, 2 and 3 on chromosome 1; variant 1 has
/// no annotation, variant 2 has one and variant 3 has two transcripts
/// that agree on the coding change only. Sample 2 has no observations.
#[cfg(test)]
pub(crate) fn fixture() -> MemoryStore {
    let mut store = MemoryStore::new();
    let annotation = |id, variant_id, effect_id, c: &str, p: &str, p1: &str| VariantAnnotation {
        id,
        variant_id,
        effect_id,
        hgvs_c: c.into(),
        hgvs_p: p.into(),
        hgvs_p_1letter: p1.into(),
    };
    let observation = |id, sample_id, variant_id, af| VariantInSample {
        id,
        sample_id,
        variant_id,
        dp: 100,
        ref_dp: 40,
        alt_dp: 60,
        af,
    };
    store
        .insert(Record::Chromosome(Chromosome::new(1, "NC_045512.2", 10)))
        .insert(Record::Chromosome(Chromosome::new(2, "MN908947.3", 5)))
        .insert(Record::Organism(OrganismAnnotation::new(1, "NC_045512")))
        .insert(Record::Gene(Gene::new(1, 1, "ORF1ab", 266, 21555)))
        .insert(Record::Gene(Gene::new(2, 1, "S", 21563, 25384)))
        .insert(Record::Sample(Sample::new(1, "2018185")))
        .insert(Record::Sample(Sample::new(2, "210067")))
        .insert(Record::Effect(Effect::new(1, "missense_variant")))
        .insert(Record::Effect(Effect::new(2, "synonymous_variant")))
        .insert(Record::Variant(Variant::new(1, 1, 241, "C", "T", "PASS")))
        .insert(Record::Variant(Variant::new(2, 1, 3037, "C", "T", "PASS")))
        .insert(Record::Variant(Variant::new(3, 1, 23403, "A", "G", "PASS")))
        .insert(Record::VariantInSample(observation(1, 1, 1, 0.98)))
        .insert(Record::VariantInSample(observation(2, 1, 2, 0.5)))
        .insert(Record::VariantInSample(observation(3, 1, 3, 0.25)))
        .insert(Record::Annotation(annotation(
            1, 2, 2, "c.2772C>T", "p.Phe924Phe", "p.F924F",
        )))
        .insert(Record::Annotation(annotation(
            2, 3, 1, "c.1841A>G", "p.Asp614Gly", "p.D614G",
        )))
        .insert(Record::Annotation(annotation(
            3, 3, 1, "c.1841A>G", "p.Asp615Gly", "p.D615G",
        )));
    store
}
