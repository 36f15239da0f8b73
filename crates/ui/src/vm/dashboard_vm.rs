use practice_core::model::{AssessmentSession, SessionStats};

use crate::vm::rating_vm::RatingTier;
use crate::vm::time_fmt::{format_datetime, format_score};

/// One row of the dashboard's recent-activity list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardSessionVm {
    pub session_id: u64,
    pub completed_at: String,
    pub recorded_at_str: String,
    pub score_str: String,
    pub answer_count: usize,
    pub rating: RatingTier,
}

impl From<&AssessmentSession> for DashboardSessionVm {
    fn from(session: &AssessmentSession) -> Self {
        Self {
            session_id: session.id().value(),
            completed_at: session.completed_at().to_owned(),
            recorded_at_str: format_datetime(session.created_at()),
            score_str: session.score().map_or_else(|| "-".to_owned(), format_score),
            answer_count: session.answers().len(),
            rating: RatingTier::from_score(session.score()),
        }
    }
}

/// Aggregates shown at the top of the learner dashboard.
///
/// Totals come from every session the learner has; `recent` is only the
/// latest page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub total_sessions: u64,
    pub scored_sessions: u64,
    pub average_score_str: String,
    pub best_score_str: String,
    pub recent: Vec<DashboardSessionVm>,
}

#[must_use]
pub fn build_dashboard(stats: &SessionStats, recent: &[AssessmentSession]) -> DashboardVm {
    DashboardVm {
        total_sessions: stats.total,
        scored_sessions: stats.scored,
        average_score_str: stats.average_score.map_or_else(|| "-".to_owned(), format_score),
        best_score_str: stats.best_score.map_or_else(|| "-".to_owned(), format_score),
        recent: recent.iter().map(DashboardSessionVm::from).collect(),
    }
}
