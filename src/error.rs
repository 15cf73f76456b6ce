use crate::VariantId;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// None of the candidate variants carries an annotation, so the
    /// chromosome of the chart cannot be determined.
    #[error("no chromosome resolvable from annotations of variants {tried:?}")]
    ChromosomeUnresolvable { tried: Vec<VariantId> },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("table shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
