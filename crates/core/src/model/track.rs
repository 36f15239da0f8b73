use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::TrackId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrackError {
    #[error("track title cannot be empty")]
    EmptyTitle,
    #[error("track slug cannot be empty")]
    EmptySlug,
}

/// URL identifier of a practice track.
///
/// Construction only trims and rejects empty input. Malformed slugs still have
/// to be representable so diagnostics can find them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackSlug(String);

impl TrackSlug {
    /// Marker of a malformed slug: two hyphens in a row.
    pub const DOUBLED_HYPHEN: &'static str = "--";

    /// # Errors
    ///
    /// Returns `TrackError::EmptySlug` if the value is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TrackError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TrackError::EmptySlug);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Rehydrate a slug exactly as stored. Blank or padded values are kept so
    /// catalog scans report what the database actually holds.
    #[must_use]
    pub fn from_persisted(value: String) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.0.contains(Self::DOUBLED_HYPHEN)
    }
}

impl fmt::Display for TrackSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// ─── TRACK TYPES ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDraft {
    pub title: String,
    pub slug: String,
}

impl TrackDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `TrackError` when the title or slug is blank.
    pub fn validate(self) -> Result<ValidatedTrack, TrackError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TrackError::EmptyTitle);
        }
        Ok(ValidatedTrack {
            title: title.to_owned(),
            slug: TrackSlug::new(self.slug)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTrack {
    pub title: String,
    pub slug: TrackSlug,
}

impl ValidatedTrack {
    #[must_use]
    pub fn assign_id(self, id: TrackId) -> PracticeTrack {
        PracticeTrack {
            id,
            title: self.title,
            slug: self.slug,
        }
    }
}

/// A practice track in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticeTrack {
    id: TrackId,
    title: String,
    slug: TrackSlug,
}

impl PracticeTrack {
    /// Rehydrate a track from storage without re-validating the title or slug.
    #[must_use]
    pub fn from_persisted(id: TrackId, title: String, slug: TrackSlug) -> Self {
        Self { id, title, slug }
    }

    #[must_use]
    pub fn id(&self) -> TrackId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn slug(&self) -> &TrackSlug {
        &self.slug
    }

    #[must_use]
    pub fn with_slug(mut self, slug: TrackSlug) -> Self {
        self.slug = slug;
        self
    }
}
