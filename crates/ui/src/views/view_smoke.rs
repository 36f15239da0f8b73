use std::sync::Arc;

use chrono::{DateTime, Utc};
use practice_core::model::{
    AssessmentSession, AssessmentSessionId, NewAssessmentSession, SessionStats, TrackDraft,
};
use practice_core::time::fixed_now;
use serde_json::json;
use storage::repository::{AssessmentSessionRepository, Storage, StorageError, TrackRepository};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

async fn insert_session(storage: &Storage, submission: NewAssessmentSession) -> AssessmentSessionId {
    storage
        .sessions
        .insert_session(&submission, fixed_now())
        .await
        .expect("insert session")
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_stats_and_rows() {
    let mut harness = setup_view_harness(ViewKind::Home, Some("learner-1"));
    insert_session(
        &harness.storage,
        NewAssessmentSession::new("2024-01-01T10:00:00Z")
            .with_user("learner-1")
            .with_answers(vec![json!(1), json!(2)])
            .with_score(90.0),
    )
    .await;
    insert_session(
        &harness.storage,
        NewAssessmentSession::new("2024-01-02T10:00:00Z")
            .with_user("learner-1")
            .with_score(60.0),
    )
    .await;
    insert_session(
        &harness.storage,
        NewAssessmentSession::new("2024-01-03T10:00:00Z")
            .with_user("someone-else")
            .with_score(10.0),
    )
    .await;

    let html = harness.settle().await;
    assert!(html.contains("Dashboard"), "missing title in {html}");
    assert!(html.contains("Score: 90"), "missing row score in {html}");
    assert!(html.contains("Score: 60"), "missing row score in {html}");
    assert!(!html.contains("Score: 10"), "other learner leaked into {html}");
    assert!(html.contains("75"), "missing average in {html}");
    assert!(html.contains("Excellent"), "missing rating in {html}");
    assert!(html.contains("2 answers"), "missing answer count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_totals_cover_more_than_the_recent_page() {
    let mut harness = setup_view_harness(ViewKind::Home, Some("learner-1"));
    for i in 0..12 {
        insert_session(
            &harness.storage,
            NewAssessmentSession::new(format!("run-{i}"))
                .with_user("learner-1")
                .with_score(f64::from(i) * 5.0),
        )
        .await;
    }

    let html = harness.settle().await;
    assert_eq!(html.matches("session-link").count(), 10, "recent page size in {html}");
    assert!(html.contains(">12<"), "missing full session total in {html}");
    assert!(html.contains("27.5"), "average must include older sessions in {html}");
    assert!(html.contains("55"), "missing best score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Home, Some("learner-1"));
    let html = harness.settle().await;
    assert!(html.contains("No assessments yet"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_prompts_anonymous_visitor() {
    let mut harness = setup_view_harness(ViewKind::Home, None);
    insert_session(
        &harness.storage,
        NewAssessmentSession::new("t").with_score(99.0),
    )
    .await;

    let html = harness.settle().await;
    assert!(html.contains("Sign in to keep track"), "missing prompt in {html}");
    assert!(html.contains("No assessments yet"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_smoke_renders_details() {
    let storage = Storage::in_memory();
    let id = insert_session(
        &storage,
        NewAssessmentSession::new("2024-03-05T12:00:00Z")
            .with_user("learner-9")
            .with_answers(vec![json!(1234), json!(5678)])
            .with_score(72.5),
    )
    .await;

    let mut harness =
        setup_view_harness_with_storage(ViewKind::Assessment(id.value()), None, storage);
    let html = harness.settle().await;
    assert!(html.contains("Assessment Result"), "missing title in {html}");
    assert!(html.contains("learner-9"), "missing learner in {html}");
    assert!(html.contains("2024-03-05T12:00:00Z"), "missing completion in {html}");
    assert!(html.contains("72.5"), "missing score in {html}");
    assert!(html.contains("Good"), "missing rating in {html}");
    assert!(html.contains("Answers (2)"), "missing answer heading in {html}");
    assert!(html.contains("1234"), "missing answer in {html}");
    assert!(html.contains("5678"), "missing answer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_smoke_renders_anonymous_unscored_session() {
    let storage = Storage::in_memory();
    let id = insert_session(&storage, NewAssessmentSession::new("2024-03-05T12:00:00Z")).await;

    let mut harness =
        setup_view_harness_with_storage(ViewKind::Assessment(id.value()), None, storage);
    let html = harness.settle().await;
    assert!(html.contains("Anonymous"), "missing anonymous label in {html}");
    assert!(html.contains("Unrated"), "missing unrated badge in {html}");
    assert!(html.contains("No answers were submitted."), "missing empty answers in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_smoke_reports_missing_session() {
    let mut harness = setup_view_harness(ViewKind::Assessment(404), None);
    let html = harness.settle().await;
    assert!(html.contains("Session not found."), "missing not-found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tracks_view_smoke_lists_bad_slugs() {
    let storage = Storage::in_memory();
    for (title, slug) in [("AB", "a-b"), ("Broken", "a--b"), ("C", "c")] {
        storage
            .tracks
            .insert_track(TrackDraft::new(title, slug).validate().unwrap())
            .await
            .expect("insert track");
    }

    let mut harness = setup_view_harness_with_storage(ViewKind::Tracks, None, storage);
    let html = harness.settle().await;
    assert!(html.contains("Track Slugs"), "missing title in {html}");
    assert!(html.contains("Total tracks: 3"), "missing total in {html}");
    assert!(html.contains("a--b"), "missing bad slug in {html}");
    assert!(html.contains("Broken"), "missing bad title in {html}");
    assert!(!html.contains("All slugs look good."), "unexpected ok state in {html}");
    assert!(html.contains("Fix known slug"), "missing fix button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tracks_view_smoke_reports_clean_catalog() {
    let storage = Storage::in_memory();
    storage
        .tracks
        .insert_track(TrackDraft::new("Intro", "intro").validate().unwrap())
        .await
        .expect("insert track");

    let mut harness = setup_view_harness_with_storage(ViewKind::Tracks, None, storage);
    let html = harness.settle().await;
    assert!(html.contains("Total tracks: 1"), "missing total in {html}");
    assert!(html.contains("All slugs look good."), "missing ok state in {html}");
}

struct FailingSessionRepo;

#[async_trait::async_trait]
impl AssessmentSessionRepository for FailingSessionRepo {
    async fn insert_session(
        &self,
        _submission: &NewAssessmentSession,
        _created_at: DateTime<Utc>,
    ) -> Result<AssessmentSessionId, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_session(
        &self,
        _id: AssessmentSessionId,
    ) -> Result<Option<AssessmentSession>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_sessions_for_user(
        &self,
        _user_id: &str,
        _limit: u32,
    ) -> Result<Vec<AssessmentSession>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn session_stats_for_user(&self, _user_id: &str) -> Result<SessionStats, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

fn failing_storage() -> Storage {
    Storage {
        sessions: Arc::new(FailingSessionRepo),
        tracks: Storage::in_memory().tracks,
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_error_state() {
    let mut harness =
        setup_view_harness_with_storage(ViewKind::Home, Some("learner-1"), failing_storage());
    let html = harness.settle().await;
    assert!(html.contains("Something went wrong"), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_smoke_renders_error_state() {
    let mut harness =
        setup_view_harness_with_storage(ViewKind::Assessment(1), None, failing_storage());
    let html = harness.settle().await;
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(!html.contains("Session not found."), "error shown as absence in {html}");
}
