use practice_core::model::{AssessmentSessionId, TrackId};

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Maps a driver error, turning unique-index violations into `Conflict`.
pub(crate) fn db(e: sqlx::Error) -> StorageError {
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => StorageError::Conflict,
        _ => StorageError::Connection(e.to_string()),
    }
}

fn i64_to_u64(field: &'static str, v: i64) -> Result<u64, StorageError> {
    u64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} sign overflow")))
}

pub(crate) fn id_to_i64(field: &'static str, v: u64) -> Result<i64, StorageError> {
    i64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} overflow")))
}

pub(crate) fn session_id_from_i64(v: i64) -> Result<AssessmentSessionId, StorageError> {
    Ok(AssessmentSessionId::new(i64_to_u64("session_id", v)?))
}

pub(crate) fn track_id_from_i64(v: i64) -> Result<TrackId, StorageError> {
    Ok(TrackId::new(i64_to_u64("track_id", v)?))
}
