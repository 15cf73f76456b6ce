pub use crate::annotation::{reconcile, AnnotationFields};
pub use crate::config::DisplayConfig;
pub use crate::error::{Error, Result};
pub use crate::memory::MemoryStore;
pub use crate::needle::{needle_plot, Domain, MutationData};
pub use crate::observable::{CsvBuilder, Table};
pub use crate::scalars::SampleScalars;
pub use crate::sqlite::SqliteStore;
pub use crate::store::VariantStore;
pub use crate::table::VariantTable;
pub use crate::{
    AnnotationId, Chromosome, ChromosomeId, Effect, EffectId, Gene, GeneId, OrganismAnnotation,
    OrganismId, Position, Record, Sample, SampleId, Variant, VariantAnnotation, VariantId,
    VariantInSample, VariantInSampleId,
};
