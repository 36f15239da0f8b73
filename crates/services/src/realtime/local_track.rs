use std::sync::Arc;

use practice_core::model::realtime::{LocalParticipant, TrackPublication, TrackSource};

/// A local participant's published track, as handed to media widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackReference {
    pub participant_identity: String,
    pub source: TrackSource,
    pub publication: TrackPublication,
}

/// Memoizes track references so an unchanged publication keeps the same `Arc`.
///
/// Keyed on (source, publication sid, participant identity). One cache per
/// widget, like one hook instance per component.
#[derive(Debug, Default)]
pub struct LocalTrackRefs {
    cached: Option<Arc<TrackReference>>,
}

impl LocalTrackRefs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference to the track `participant` publishes for `source`, if any.
    pub fn track_ref(
        &mut self,
        source: TrackSource,
        participant: &LocalParticipant,
    ) -> Option<Arc<TrackReference>> {
        let Some(publication) = participant.publication(source) else {
            self.cached = None;
            return None;
        };

        if let Some(cached) = &self.cached {
            if cached.source == source
                && cached.publication.sid == publication.sid
                && cached.participant_identity == participant.identity
            {
                return Some(Arc::clone(cached));
            }
        }

        let fresh = Arc::new(TrackReference {
            participant_identity: participant.identity.clone(),
            source,
            publication: publication.clone(),
        });
        self.cached = Some(Arc::clone(&fresh));
        Some(fresh)
    }
}
