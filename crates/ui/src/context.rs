use std::sync::Arc;

use services::{AssessmentService, TrackMaintenanceService};

pub trait UiApp: Send + Sync {
    /// Signed-in learner, if any. Anonymous visitors get no dashboard history.
    fn current_user_id(&self) -> Option<String>;

    fn assessments(&self) -> Arc<AssessmentService>;
    fn track_maintenance(&self) -> Arc<TrackMaintenanceService>;
}

#[derive(Clone)]
pub struct AppContext {
    current_user_id: Option<String>,
    assessments: Arc<AssessmentService>,
    track_maintenance: Arc<TrackMaintenanceService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            current_user_id: app.current_user_id(),
            assessments: app.assessments(),
            track_maintenance: app.track_maintenance(),
        }
    }

    #[must_use]
    pub fn current_user_id(&self) -> Option<String> {
        self.current_user_id.clone()
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
