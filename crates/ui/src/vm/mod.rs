mod assessment_vm;
mod dashboard_vm;
mod rating_vm;
mod time_fmt;

pub use assessment_vm::{AssessmentResultVm, map_assessment_result};
pub use dashboard_vm::{DashboardSessionVm, DashboardVm, build_dashboard};
pub use rating_vm::{RatingMeta, RatingTier};
pub use time_fmt::{format_datetime, format_score};
