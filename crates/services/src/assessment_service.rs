use std::sync::Arc;

use practice_core::model::{
    AssessmentSession, AssessmentSessionId, NewAssessmentSession, SessionStats,
};
use storage::repository::{AssessmentSessionRepository, InMemoryRepository};

use crate::Clock;
use crate::error::AssessmentServiceError;

/// Write and read paths for assessment sessions.
///
/// The service owns the clock that stamps `created_at`; callers only supply the
/// completion timestamp they observed.
#[derive(Clone)]
pub struct AssessmentService {
    clock: Clock,
    sessions: Arc<dyn AssessmentSessionRepository>,
}

impl AssessmentService {
    #[must_use]
    pub fn new(clock: Clock, sessions: Arc<dyn AssessmentSessionRepository>) -> Self {
        Self { clock, sessions }
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(clock, Arc::new(InMemoryRepository::new()))
    }

    /// Persist a submitted set of answers as a new, immutable session.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentServiceError::Assessment` for a non-finite score.
    /// Returns `AssessmentServiceError::Storage` if the insert fails.
    pub async fn create_session(
        &self,
        submission: NewAssessmentSession,
    ) -> Result<AssessmentSessionId, AssessmentServiceError> {
        submission.validate()?;
        let created_at = self.clock.now();
        let id = self.sessions.insert_session(&submission, created_at).await?;
        tracing::debug!(
            %id,
            user_id = submission.user_id.as_deref().unwrap_or("anonymous"),
            answers = submission.answers.len(),
            "assessment session created"
        );
        Ok(id)
    }

    /// Fetch a session by id.
    ///
    /// Returns `Ok(None)` when no such session exists.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentServiceError::Storage` if repository access fails.
    pub async fn get_session(
        &self,
        id: AssessmentSessionId,
    ) -> Result<Option<AssessmentSession>, AssessmentServiceError> {
        let session = self.sessions.get_session(id).await?;
        Ok(session)
    }

    /// Most recent sessions for a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentServiceError::Storage` if repository access fails.
    pub async fn list_recent_sessions(
        &self,
        user_id: &str,
        limit: u32,
    ) -> Result<Vec<AssessmentSession>, AssessmentServiceError> {
        let sessions = self.sessions.list_sessions_for_user(user_id, limit).await?;
        Ok(sessions)
    }

    /// Totals over all of a user's sessions, not just the recent page.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentServiceError::Storage` if repository access fails.
    pub async fn session_stats(
        &self,
        user_id: &str,
    ) -> Result<SessionStats, AssessmentServiceError> {
        let stats = self.sessions.session_stats_for_user(user_id).await?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Duration;
    use practice_core::time::fixed_now;
    use serde_json::json;

    #[tokio::test]
    async fn created_session_reads_back_with_server_timestamp() {
        let service = AssessmentService::in_memory(Clock::fixed(fixed_now()));
        let answers = vec![json!({"id": "q1", "value": "B"}), json!(3)];

        let id = service
            .create_session(
                NewAssessmentSession::new("2024-04-01T08:30:00Z")
                    .with_user("user-7")
                    .with_answers(answers.clone())
                    .with_score(90.0),
            )
            .await
            .unwrap();

        let session = service.get_session(id).await.unwrap().expect("persisted");
        assert_eq!(session.user_id(), Some("user-7"));
        assert_eq!(session.answers(), answers.as_slice());
        assert_eq!(session.score(), Some(90.0));
        assert_eq!(session.completed_at(), "2024-04-01T08:30:00Z");
        assert_eq!(session.created_at(), fixed_now());
        assert_ne!(session.created_at().to_rfc3339(), session.completed_at());
    }

    #[tokio::test]
    async fn each_create_returns_a_fresh_id() {
        let service = AssessmentService::in_memory(Clock::fixed(fixed_now()));
        let a = service
            .create_session(NewAssessmentSession::new("t"))
            .await
            .unwrap();
        let b = service
            .create_session(NewAssessmentSession::new("t"))
            .await
            .unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn unknown_id_is_absent_not_an_error() {
        let service = AssessmentService::in_memory(Clock::fixed(fixed_now()));
        let found = service
            .get_session(AssessmentSessionId::new(404))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn infinite_score_is_rejected_before_insert() {
        let repo = Arc::new(InMemoryRepository::new());
        let service = AssessmentService::new(Clock::fixed(fixed_now()), repo.clone());

        let err = service
            .create_session(NewAssessmentSession::new("t").with_score(f64::INFINITY))
            .await
            .unwrap_err();
        assert!(matches!(err, AssessmentServiceError::Assessment(_)));

        let stored = repo
            .get_session(AssessmentSessionId::new(1))
            .await
            .unwrap();
        assert!(stored.is_none());
    }

    #[tokio::test]
    async fn recent_sessions_follow_clock_order() {
        let repo: Arc<dyn AssessmentSessionRepository> = Arc::new(InMemoryRepository::new());
        let early = AssessmentService::new(Clock::fixed(fixed_now()), Arc::clone(&repo));
        let late = AssessmentService::new(
            Clock::fixed(fixed_now() + Duration::hours(1)),
            Arc::clone(&repo),
        );
        early
            .create_session(NewAssessmentSession::new("early").with_user("u"))
            .await
            .unwrap();
        late.create_session(NewAssessmentSession::new("late").with_user("u"))
            .await
            .unwrap();

        let recent = early.list_recent_sessions("u", 5).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].completed_at(), "late");
    }

    #[tokio::test]
    async fn stats_are_not_capped_by_the_recent_limit() {
        let service = AssessmentService::in_memory(Clock::fixed(fixed_now()));
        for i in 0..11 {
            service
                .create_session(
                    NewAssessmentSession::new(format!("run-{i}"))
                        .with_user("u")
                        .with_score(f64::from(i) * 10.0),
                )
                .await
                .unwrap();
        }

        let recent = service.list_recent_sessions("u", 10).await.unwrap();
        assert_eq!(recent.len(), 10);

        let stats = service.session_stats("u").await.unwrap();
        assert_eq!(stats.total, 11);
        assert_eq!(stats.best_score, Some(100.0));
        assert_eq!(stats.average_score, Some(50.0));
    }
}
