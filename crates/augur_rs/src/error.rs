//! Error types for catalog loading.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// Input is not valid JSON or does not fit the record shape.
    #[error("invalid catalog JSON: {0}")]
    Json(String),
    /// Two records of the same kind share an id.
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
