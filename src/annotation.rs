//! Reconciliation of the transcript annotations of one variant.
//!
//! A variant covered by two overlapping transcripts carries two
//! annotations. They are folded into a single HGVS_C, HGVS_P and
//! HGVS_P_1LETTER triple field by field: a value both transcripts agree
//! on is kept as is, differing values are joined with the configured
//! separator (`" - "` by default).

use crate::prelude::*;
use log::warn;

/// HGVS_C, HGVS_P and HGVS_P_1LETTER of a variant
pub type AnnotationFields = [String; 3];

/// Folds the annotations of a single variant into one set of fields
///
/// No annotation yields the placeholder in every field and a single
/// annotation is used verbatim. More than two annotations follow the
/// same per-field rule: a field shared by all of them is kept, any
/// disagreement joins every value in store order.
pub fn reconcile(annotations: &[VariantAnnotation], config: &DisplayConfig) -> AnnotationFields {
    match annotations {
        [] => [
            config.placeholder.clone(),
            config.placeholder.clone(),
            config.placeholder.clone(),
        ],
        [only] => {
            let [c, p, p1] = only.fields();
            [c.to_owned(), p.to_owned(), p1.to_owned()]
        }
        [first, rest @ ..] => {
            if rest.len() > 1 {
                warn!(
                    "variant {} has {} annotations, merging all of them",
                    first.variant_id,
                    annotations.len()
                );
            }
            let merge = |idx: usize| -> String {
                let value = first.fields()[idx];
                if rest.iter().all(|a| a.fields()[idx] == value) {
                    value.to_owned()
                } else {
                    annotations
                        .iter()
                        .map(|a| a.fields()[idx])
                        .collect::<Vec<_>>()
                        .join(&config.annotation_separator)
                }
            };
            [merge(0), merge(1), merge(2)]
        }
    }
}
