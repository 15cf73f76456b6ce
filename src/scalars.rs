//! One value per observation of a sample.
//!
//! The sample and the chromosome are both checked before the walk. When
//! either does not resolve the result is `SampleScalars::NotFound`,
//! which callers must keep apart from a resolved sample without
//! observations (`Values` holding an empty `Vec`).
//!
//! The chromosome is only checked for existence; observations on other
//! chromosomes are still walked.

use crate::lookup;
use crate::prelude::*;
use log::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum SampleScalars<T> {
    NotFound,
    Values(Vec<T>),
}

impl<T> SampleScalars<T> {
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound => true,
            Self::Values(_) => false,
        }
    }

    pub fn values(&self) -> Option<&[T]> {
        match self {
            Self::NotFound => None,
            Self::Values(values) => Some(values.as_slice()),
        }
    }

    pub fn into_option(self) -> Option<Vec<T>> {
        match self {
            Self::NotFound => None,
            Self::Values(values) => Some(values),
        }
    }
}

/// The observations of `sample_name`, or `None` when the sample or
/// the chromosome cannot be resolved
fn observations<S: VariantStore>(
    store: &S,
    sample_name: &str,
    chromosome: &str,
) -> Result<Option<Vec<VariantInSample>>> {
    if lookup::chromosome(store, chromosome)?.is_none() {
        warn!("chromosome {} not found", chromosome);
        return Ok(None);
    }
    match store.sample_by_name(sample_name)? {
        Some(sample) => Ok(Some(store.variants_in_sample(sample.id)?)),
        None => {
            warn!("sample {} not found", sample_name);
            Ok(None)
        }
    }
}

pub fn allele_frequencies<S: VariantStore>(
    store: &S,
    sample_name: &str,
    chromosome: &str,
) -> Result<SampleScalars<f64>> {
    Ok(match observations(store, sample_name, chromosome)? {
        Some(observations) => SampleScalars::Values(observations.iter().map(|o| o.af).collect()),
        None => SampleScalars::NotFound,
    })
}

pub fn positions<S: VariantStore>(
    store: &S,
    sample_name: &str,
    chromosome: &str,
) -> Result<SampleScalars<Position>> {
    let observations = match observations(store, sample_name, chromosome)? {
        Some(observations) => observations,
        None => return Ok(SampleScalars::NotFound),
    };
    let mut positions = Vec::with_capacity(observations.len());
    for observation in observations {
        if let Some(variant) = store.variant(observation.variant_id)? {
            positions.push(variant.pos);
        }
    }
    Ok(SampleScalars::Values(positions))
}

/// Effect of the first annotation of each observed variant
///
/// Unannotated variants contribute nothing.
pub fn effects<S: VariantStore>(
    store: &S,
    sample_name: &str,
    chromosome: &str,
) -> Result<SampleScalars<String>> {
    let observations = match observations(store, sample_name, chromosome)? {
        Some(observations) => observations,
        None => return Ok(SampleScalars::NotFound),
    };
    let mut effects = Vec::with_capacity(observations.len());
    for observation in observations {
        let first = store.annotations(observation.variant_id)?.into_iter().next();
        if let Some(annotation) = first {
            if let Some(effect) = store.effect(annotation.effect_id)? {
                effects.push(effect.effect);
            }
        }
    }
    Ok(SampleScalars::Values(effects))
}
