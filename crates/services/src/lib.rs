#![forbid(unsafe_code)]

pub mod app_services;
pub mod assessment_service;
pub mod error;
pub mod realtime;
pub mod track_maintenance;

pub use practice_core::Clock;

pub use app_services::AppServices;
pub use assessment_service::AssessmentService;
pub use error::{AppServicesError, AssessmentServiceError, TrackMaintenanceError};
pub use track_maintenance::{
    CORRECTED_SLUG, MALFORMED_SLUG, SlugFixOutcome, SlugReport, TrackMaintenanceService,
    TrackSlugEntry,
};
