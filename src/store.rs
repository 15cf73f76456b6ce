//! Read-only repository interface over the variant schema.
//!
//! Every method returns records in the store's natural order. Missing
//! records are an empty `Vec` or `None`, never an error; errors are
//! reserved for a store that cannot be read.

use crate::prelude::*;

pub trait VariantStore {
    fn chromosomes(&self) -> Result<Vec<Chromosome>>;

    fn organisms(&self) -> Result<Vec<OrganismAnnotation>>;

    fn genes(&self) -> Result<Vec<Gene>>;

    fn sample(&self, id: SampleId) -> Result<Option<Sample>>;

    fn sample_by_name(&self, name: &str) -> Result<Option<Sample>>;

    fn effect(&self, id: EffectId) -> Result<Option<Effect>>;

    fn variant(&self, id: VariantId) -> Result<Option<Variant>>;

    /// Every observation of the given sample
    fn variants_in_sample(&self, sample: SampleId) -> Result<Vec<VariantInSample>>;

    /// Every observation whose variant lies on the given chromosome
    fn variants_in_sample_on(&self, chromosome: ChromosomeId) -> Result<Vec<VariantInSample>>;

    /// Annotations whose variant is any of `variants`
    fn annotations_for(&self, variants: &[VariantId]) -> Result<Vec<VariantAnnotation>>;

    fn annotations(&self, variant: VariantId) -> Result<Vec<VariantAnnotation>> {
        self.annotations_for(&[variant])
    }

    fn chromosomes_labelled(&self, label: &str) -> Result<Vec<Chromosome>> {
        Ok(self
            .chromosomes()?
            .into_iter()
            .filter(|c| c.chromosome == label)
            .collect())
    }

    fn organisms_with_code(&self, code: &str) -> Result<Vec<OrganismAnnotation>> {
        Ok(self
            .organisms()?
            .into_iter()
            .filter(|o| o.organism_code == code)
            .collect())
    }

    fn genes_on(&self, chromosome: ChromosomeId) -> Result<Vec<Gene>> {
        Ok(self
            .genes()?
            .into_iter()
            .filter(|g| g.chromosome_id == chromosome)
            .collect())
    }

    /// Genes whose name matches ignoring case
    fn genes_named(&self, name: &str) -> Result<Vec<Gene>> {
        let name = name.to_lowercase();
        Ok(self
            .genes()?
            .into_iter()
            .filter(|g| g.gene_name.to_lowercase() == name)
            .collect())
    }
}
