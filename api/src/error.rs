use sea_orm::DbErr;
use thiserror::Error;

/// Typed failures surfaced by the record store and the reporting layer.
///
/// The GraphQL layer maps each variant to a machine-readable error code; no
/// variant is retried locally, callers always see the failure.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error("{child} write references missing {parent} {parent_id}")]
    ReferentialIntegrity {
        child: &'static str,
        parent: &'static str,
        parent_id: i32,
    },
    #[error("invalid {field} value '{value}'")]
    InvalidEnumValue { field: &'static str, value: String },
    #[error("{0}")]
    InvalidValue(String),
    #[error(transparent)]
    Db(#[from] DbErr),
}
