use std::sync::Arc;

use practice_core::model::{PracticeTrack, TrackSlug};
use serde::Serialize;
use storage::repository::TrackRepository;

use crate::error::TrackMaintenanceError;

/// Slug the creator studio generated for the optimization & debugging track.
pub const MALFORMED_SLUG: &str = "prompt-optimization--debugging";

/// Replacement for [`MALFORMED_SLUG`].
pub const CORRECTED_SLUG: &str = "prompt-optimization-debugging";

/// Title and slug of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackSlugEntry {
    pub title: String,
    pub slug: String,
}

impl From<&PracticeTrack> for TrackSlugEntry {
    fn from(track: &PracticeTrack) -> Self {
        Self {
            title: track.title().to_owned(),
            slug: track.slug().as_str().to_owned(),
        }
    }
}

/// Result of scanning every slug in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugReport {
    pub total: usize,
    pub bad_slugs: Vec<TrackSlugEntry>,
    pub all_slugs: Vec<String>,
}

/// Outcome of the one-shot slug repair. Not finding the track is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugFixOutcome {
    pub success: bool,
    pub message: String,
}

/// Operational tooling over the practice-track catalog.
///
/// Every read is a full scan. Fine for a catalog of tens of tracks; not meant
/// for user-facing paths.
#[derive(Clone)]
pub struct TrackMaintenanceService {
    tracks: Arc<dyn TrackRepository>,
}

impl TrackMaintenanceService {
    #[must_use]
    pub fn new(tracks: Arc<dyn TrackRepository>) -> Self {
        Self { tracks }
    }

    /// List every slug and flag the ones containing a doubled hyphen.
    ///
    /// # Errors
    ///
    /// Returns `TrackMaintenanceError::Storage` if the scan fails.
    pub async fn check_all_slugs(&self) -> Result<SlugReport, TrackMaintenanceError> {
        let tracks = self.tracks.list_tracks().await?;
        let bad_slugs: Vec<TrackSlugEntry> = tracks
            .iter()
            .filter(|t| t.slug().is_malformed())
            .map(TrackSlugEntry::from)
            .collect();
        if !bad_slugs.is_empty() {
            tracing::warn!(count = bad_slugs.len(), "malformed track slugs found");
        }

        Ok(SlugReport {
            total: tracks.len(),
            bad_slugs,
            all_slugs: tracks
                .iter()
                .map(|t| t.slug().as_str().to_owned())
                .collect(),
        })
    }

    /// Every track as a title/slug pair, unfiltered.
    ///
    /// # Errors
    ///
    /// Returns `TrackMaintenanceError::Storage` if the scan fails.
    pub async fn check_slugs(&self) -> Result<Vec<TrackSlugEntry>, TrackMaintenanceError> {
        let tracks = self.tracks.list_tracks().await?;
        Ok(tracks.iter().map(TrackSlugEntry::from).collect())
    }

    /// Rewrite [`MALFORMED_SLUG`] to [`CORRECTED_SLUG`].
    ///
    /// Only this one known slug is repaired. A second run reports not-found.
    /// If another track already holds [`CORRECTED_SLUG`], nothing is changed
    /// and the slug index conflict is returned as an error.
    ///
    /// # Errors
    ///
    /// Returns `TrackMaintenanceError::Storage(StorageError::Conflict)` when the
    /// corrected slug is taken, and `TrackMaintenanceError::Storage` for any
    /// other lookup or patch failure.
    pub async fn fix_track_slug(&self) -> Result<SlugFixOutcome, TrackMaintenanceError> {
        let Some(track) = self.tracks.find_track_by_slug(MALFORMED_SLUG).await? else {
            tracing::info!(slug = MALFORMED_SLUG, "no track to repair");
            return Ok(SlugFixOutcome {
                success: false,
                message: format!("Track with slug '{MALFORMED_SLUG}' not found (may already be fixed)"),
            });
        };

        let corrected = TrackSlug::new(CORRECTED_SLUG)?;
        self.tracks.update_track_slug(track.id(), &corrected).await?;
        tracing::info!(
            track_id = %track.id(),
            from = MALFORMED_SLUG,
            to = CORRECTED_SLUG,
            "repaired track slug"
        );

        Ok(SlugFixOutcome {
            success: true,
            message: format!("Fixed slug from '{MALFORMED_SLUG}' to '{CORRECTED_SLUG}'"),
        })
    }
}
