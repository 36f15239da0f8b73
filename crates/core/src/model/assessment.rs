use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::model::AssessmentSessionId;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("score must be a finite number, got {0}")]
    NonFiniteScore(f64),
}

//
// ─── SUBMISSION ────────────────────────────────────────────────────────────────
//

/// A submitted set of answers, before the store assigns an id and creation time.
///
/// Answer records are opaque JSON documents; their shape is owned by whichever
/// assessment produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssessmentSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub answers: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub completed_at: String,
}

impl NewAssessmentSession {
    #[must_use]
    pub fn new(completed_at: impl Into<String>) -> Self {
        Self {
            user_id: None,
            answers: Vec::new(),
            score: None,
            completed_at: completed_at.into(),
        }
    }

    #[must_use]
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    #[must_use]
    pub fn with_answers(mut self, answers: Vec<Value>) -> Self {
        self.answers = answers;
        self
    }

    #[must_use]
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Structural check only. Answer shapes are never inspected.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::NonFiniteScore` for NaN or infinite scores,
    /// which have no JSON representation.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        match self.score {
            Some(score) if !score.is_finite() => Err(AssessmentError::NonFiniteScore(score)),
            _ => Ok(()),
        }
    }
}

/// Totals over every session a learner has submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub total: u64,
    pub scored: u64,
    pub average_score: Option<f64>,
    pub best_score: Option<f64>,
}

//
// ─── PERSISTED SESSION ─────────────────────────────────────────────────────────
//

/// One recorded attempt at an assessment. Write-once: there are no mutators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSession {
    id: AssessmentSessionId,
    user_id: Option<String>,
    answers: Vec<Value>,
    score: Option<f64>,
    completed_at: String,
    created_at: DateTime<Utc>,
}

impl AssessmentSession {
    /// Build the stored form of a submission.
    #[must_use]
    pub fn from_submission(
        id: AssessmentSessionId,
        submission: NewAssessmentSession,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id: submission.user_id,
            answers: submission.answers,
            score: submission.score,
            completed_at: submission.completed_at,
            created_at,
        }
    }

    /// Rehydrate a session from storage.
    #[must_use]
    pub fn from_persisted(
        id: AssessmentSessionId,
        user_id: Option<String>,
        answers: Vec<Value>,
        score: Option<f64>,
        completed_at: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            answers,
            score,
            completed_at,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> AssessmentSessionId {
        self.id
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    #[must_use]
    pub fn answers(&self) -> &[Value] {
        &self.answers
    }

    #[must_use]
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    #[must_use]
    pub fn completed_at(&self) -> &str {
        &self.completed_at
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use serde_json::json;

    #[test]
    fn rejects_nan_score() {
        let draft = NewAssessmentSession::new("2024-01-01T00:00:00Z").with_score(f64::NAN);
        assert!(matches!(
            draft.validate(),
            Err(AssessmentError::NonFiniteScore(_))
        ));
    }

    #[test]
    fn accepts_any_answer_shape() {
        let draft = NewAssessmentSession::new("done")
            .with_answers(vec![json!(1), json!({"q": "a", "picked": [1, 2]}), json!(null)])
            .with_score(-3.5);
        assert!(draft.validate().is_ok());

        let session =
            AssessmentSession::from_submission(AssessmentSessionId::new(1), draft, fixed_now());
        assert_eq!(session.answers().len(), 3);
        assert_eq!(session.user_id(), None);
        assert_eq!(session.completed_at(), "done");
        assert_eq!(session.created_at(), fixed_now());
    }

    #[test]
    fn submission_deserializes_from_camel_case() {
        let draft: NewAssessmentSession = serde_json::from_value(json!({
            "userId": "u-1",
            "answers": [{"id": 1}],
            "completedAt": "2024-05-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(draft.user_id.as_deref(), Some("u-1"));
        assert_eq!(draft.score, None);
        assert_eq!(draft.answers, vec![json!({"id": 1})]);
    }

    #[test]
    fn submission_requires_answers_field() {
        let missing = serde_json::from_value::<NewAssessmentSession>(json!({
            "completedAt": "2024-05-01T10:00:00Z"
        }));
        assert!(missing.is_err());

        let empty: NewAssessmentSession = serde_json::from_value(json!({
            "answers": [],
            "completedAt": "2024-05-01T10:00:00Z"
        }))
        .unwrap();
        assert!(empty.answers.is_empty());
    }
}
