use async_trait::async_trait;
use chrono::{DateTime, Utc};
use practice_core::model::{
    AssessmentSession, AssessmentSessionId, NewAssessmentSession, PracticeTrack, SessionStats,
    TrackId, TrackSlug, ValidatedTrack,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Write-once store of assessment sessions.
///
/// No update or delete: a session is immutable once inserted.
#[async_trait]
pub trait AssessmentSessionRepository: Send + Sync {
    /// Insert a new session, stamping `created_at`, and return its id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn insert_session(
        &self,
        submission: &NewAssessmentSession,
        created_at: DateTime<Utc>,
    ) -> Result<AssessmentSessionId, StorageError>;

    /// Fetch a session by id. Missing ids are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn get_session(
        &self,
        id: AssessmentSessionId,
    ) -> Result<Option<AssessmentSession>, StorageError>;

    /// Sessions submitted by `user_id`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_sessions_for_user(
        &self,
        user_id: &str,
        limit: u32,
    ) -> Result<Vec<AssessmentSession>, StorageError>;

    /// Count and score aggregates over all of `user_id`'s sessions.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn session_stats_for_user(&self, user_id: &str) -> Result<SessionStats, StorageError>;
}

/// Catalog of practice tracks, keyed by id and uniquely indexed by slug.
#[async_trait]
pub trait TrackRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the slug is already taken.
    async fn insert_track(&self, track: ValidatedTrack) -> Result<TrackId, StorageError>;

    /// Every track in id order. No pagination.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_tracks(&self) -> Result<Vec<PracticeTrack>, StorageError>;

    /// Exact-match lookup on the slug index.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn find_track_by_slug(&self, slug: &str) -> Result<Option<PracticeTrack>, StorageError>;

    /// Patch the slug of one track.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the track is missing and
    /// `StorageError::Conflict` if another track already uses `slug`.
    async fn update_track_slug(&self, id: TrackId, slug: &TrackSlug) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    sessions: Arc<Mutex<Vec<AssessmentSession>>>,
    tracks: Arc<Mutex<Vec<PracticeTrack>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait]
impl AssessmentSessionRepository for InMemoryRepository {
    async fn insert_session(
        &self,
        submission: &NewAssessmentSession,
        created_at: DateTime<Utc>,
    ) -> Result<AssessmentSessionId, StorageError> {
        let mut guard = self.sessions.lock().map_err(poisoned)?;
        let id = AssessmentSessionId::new(guard.len() as u64 + 1);
        guard.push(AssessmentSession::from_submission(
            id,
            submission.clone(),
            created_at,
        ));
        Ok(id)
    }

    async fn get_session(
        &self,
        id: AssessmentSessionId,
    ) -> Result<Option<AssessmentSession>, StorageError> {
        let guard = self.sessions.lock().map_err(poisoned)?;
        Ok(guard.iter().find(|s| s.id() == id).cloned())
    }

    async fn list_sessions_for_user(
        &self,
        user_id: &str,
        limit: u32,
    ) -> Result<Vec<AssessmentSession>, StorageError> {
        let guard = self.sessions.lock().map_err(poisoned)?;
        let mut found: Vec<AssessmentSession> = guard
            .iter()
            .filter(|s| s.user_id() == Some(user_id))
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        found.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(found)
    }

    async fn session_stats_for_user(&self, user_id: &str) -> Result<SessionStats, StorageError> {
        let guard = self.sessions.lock().map_err(poisoned)?;
        let mut stats = SessionStats::default();
        let mut sum = 0.0;
        for session in guard.iter().filter(|s| s.user_id() == Some(user_id)) {
            stats.total += 1;
            if let Some(score) = session.score() {
                stats.scored += 1;
                sum += score;
                stats.best_score = Some(stats.best_score.map_or(score, |best| best.max(score)));
            }
        }
        #[allow(clippy::cast_precision_loss)]
        let scored = stats.scored as f64;
        if stats.scored > 0 {
            stats.average_score = Some(sum / scored);
        }
        Ok(stats)
    }
}

#[async_trait]
impl TrackRepository for InMemoryRepository {
    async fn insert_track(&self, track: ValidatedTrack) -> Result<TrackId, StorageError> {
        let mut guard = self.tracks.lock().map_err(poisoned)?;
        if guard.iter().any(|t| t.slug() == &track.slug) {
            return Err(StorageError::Conflict);
        }
        let next = guard.iter().map(|t| t.id().value()).max().unwrap_or(0) + 1;
        let id = TrackId::new(next);
        guard.push(track.assign_id(id));
        Ok(id)
    }

    async fn list_tracks(&self) -> Result<Vec<PracticeTrack>, StorageError> {
        let guard = self.tracks.lock().map_err(poisoned)?;
        Ok(guard.clone())
    }

    async fn find_track_by_slug(&self, slug: &str) -> Result<Option<PracticeTrack>, StorageError> {
        let guard = self.tracks.lock().map_err(poisoned)?;
        Ok(guard.iter().find(|t| t.slug().as_str() == slug).cloned())
    }

    async fn update_track_slug(&self, id: TrackId, slug: &TrackSlug) -> Result<(), StorageError> {
        let mut guard = self.tracks.lock().map_err(poisoned)?;
        if guard.iter().any(|t| t.id() != id && t.slug() == slug) {
            return Err(StorageError::Conflict);
        }
        let index = guard
            .iter()
            .position(|t| t.id() == id)
            .ok_or(StorageError::NotFound)?;
        let track = guard.remove(index);
        guard.insert(index, track.with_slug(slug.clone()));
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn AssessmentSessionRepository>,
    pub tracks: Arc<dyn TrackRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let sessions: Arc<dyn AssessmentSessionRepository> = Arc::new(repo.clone());
        let tracks: Arc<dyn TrackRepository> = Arc::new(repo);
        Self { sessions, tracks }
    }
}
