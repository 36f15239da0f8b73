use practice_core::model::AssessmentSession;

use crate::vm::rating_vm::RatingTier;
use crate::vm::time_fmt::{format_datetime, format_score};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssessmentResultVm {
    pub session_id: u64,
    pub user_label: String,
    pub completed_at: String,
    pub recorded_at_str: String,
    pub score_str: String,
    pub rating: RatingTier,
    /// Answers are opaque documents; the result page shows them as compact JSON.
    pub answers: Vec<String>,
}

#[must_use]
pub fn map_assessment_result(session: &AssessmentSession) -> AssessmentResultVm {
    AssessmentResultVm {
        session_id: session.id().value(),
        user_label: session.user_id().unwrap_or("Anonymous").to_owned(),
        completed_at: session.completed_at().to_owned(),
        recorded_at_str: format_datetime(session.created_at()),
        score_str: session.score().map_or_else(|| "-".to_owned(), format_score),
        rating: RatingTier::from_score(session.score()),
        answers: session.answers().iter().map(ToString::to_string).collect(),
    }
}
