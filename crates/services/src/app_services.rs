use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::assessment_service::AssessmentService;
use crate::error::AppServicesError;
use crate::track_maintenance::TrackMaintenanceService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    assessments: Arc<AssessmentService>,
    track_maintenance: Arc<TrackMaintenanceService>,
}

impl AppServices {
    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock) -> Self {
        Self {
            assessments: Arc::new(AssessmentService::new(clock, Arc::clone(&storage.sessions))),
            track_maintenance: Arc::new(TrackMaintenanceService::new(Arc::clone(
                &storage.tracks,
            ))),
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock))
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::from_storage(&Storage::in_memory(), clock)
    }

    #[must_use]
    pub fn assessments(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessments)
    }

    #[must_use]
    pub fn track_maintenance(&self) -> Arc<TrackMaintenanceService> {
        Arc::clone(&self.track_maintenance)
    }
}
