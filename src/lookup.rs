//! Single-record fetchers and small list helpers.
//!
//! A missing record is `None` (or an empty list), never an error.

use crate::prelude::*;

/// Every chromosome, or `None` when none is defined
pub fn all_chromosomes<S: VariantStore>(store: &S) -> Result<Option<Vec<Chromosome>>> {
    let chromosomes = store.chromosomes()?;
    Ok(if chromosomes.is_empty() {
        None
    } else {
        Some(chromosomes)
    })
}

/// Every organism annotation, or `None` when none is defined
pub fn all_organisms<S: VariantStore>(store: &S) -> Result<Option<Vec<OrganismAnnotation>>> {
    let organisms = store.organisms()?;
    Ok(if organisms.is_empty() {
        None
    } else {
        Some(organisms)
    })
}

/// The earliest created chromosome
pub fn default_chromosome<S: VariantStore>(store: &S) -> Result<Option<Chromosome>> {
    // min_by_key keeps the first of equal keys
    Ok(store
        .chromosomes()?
        .into_iter()
        .min_by_key(|c| c.created_at))
}

pub fn organism<S: VariantStore>(
    store: &S,
    organism_code: &str,
) -> Result<Option<OrganismAnnotation>> {
    Ok(store.organisms_with_code(organism_code)?.pop())
}

pub fn chromosome<S: VariantStore>(store: &S, label: &str) -> Result<Option<Chromosome>> {
    Ok(store.chromosomes_labelled(label)?.pop())
}

/// The last gene whose name matches ignoring case
pub fn gene<S: VariantStore>(store: &S, gene_name: &str) -> Result<Option<Gene>> {
    Ok(store.genes_named(gene_name)?.pop())
}

/// Names of the genes on a chromosome
pub fn gene_names<S: VariantStore>(store: &S, chromosome: &Chromosome) -> Result<Vec<String>> {
    Ok(store
        .genes_on(chromosome.id)?
        .into_iter()
        .map(|g| g.gene_name)
        .collect())
}

/// Genes of the chromosome with the given label, `None` if there are none
pub fn gene_records<S: VariantStore>(store: &S, label: &str) -> Result<Option<Vec<Gene>>> {
    let genes = match chromosome(store, label)? {
        Some(chromosome) => store.genes_on(chromosome.id)?,
        None => vec![],
    };
    Ok(if genes.is_empty() { None } else { Some(genes) })
}

/// Sample name of every observation on a chromosome
///
/// One entry per observation, highest sample id first.
pub fn sample_names_on<S: VariantStore>(store: &S, chromosome: &Chromosome) -> Result<Vec<String>> {
    let mut observations = store.variants_in_sample_on(chromosome.id)?;
    observations.sort_by(|a, b| b.sample_id.cmp(&a.sample_id));
    let mut names = Vec::with_capacity(observations.len());
    for observation in observations {
        if let Some(sample) = store.sample(observation.sample_id)? {
            names.push(sample.sample_name);
        }
    }
    Ok(names)
}
