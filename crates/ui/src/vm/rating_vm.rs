/// Rating bands shown next to a score in the arena and on results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatingTier {
    Excellent,
    Good,
    Fair,
    NeedsWork,
    Unrated,
}

/// Display metadata for one rating tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatingMeta {
    pub label: &'static str,
    pub class: &'static str,
    pub description: &'static str,
}

impl RatingTier {
    /// Band for a 0-100 score. Scores outside the range clamp to the nearest band.
    #[must_use]
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            None => Self::Unrated,
            Some(s) if s.is_nan() => Self::Unrated,
            Some(s) if s >= 85.0 => Self::Excellent,
            Some(s) if s >= 70.0 => Self::Good,
            Some(s) if s >= 50.0 => Self::Fair,
            Some(_) => Self::NeedsWork,
        }
    }

    #[must_use]
    pub fn meta(self) -> RatingMeta {
        match self {
            Self::Excellent => RatingMeta {
                label: "Excellent",
                class: "rating-excellent",
                description: "Clear, specific and well structured.",
            },
            Self::Good => RatingMeta {
                label: "Good",
                class: "rating-good",
                description: "Solid prompt with room to tighten.",
            },
            Self::Fair => RatingMeta {
                label: "Fair",
                class: "rating-fair",
                description: "Works, but misses important context.",
            },
            Self::NeedsWork => RatingMeta {
                label: "Needs work",
                class: "rating-needs-work",
                description: "Revisit the track before the next round.",
            },
            Self::Unrated => RatingMeta {
                label: "Unrated",
                class: "rating-unrated",
                description: "No score was recorded.",
            },
        }
    }
}
