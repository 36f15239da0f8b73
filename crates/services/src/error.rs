//! Shared error types for the services crate.

use thiserror::Error;

use practice_core::model::{AssessmentError, TrackError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `AssessmentService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `TrackMaintenanceService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrackMaintenanceError {
    #[error(transparent)]
    Track(#[from] TrackError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
