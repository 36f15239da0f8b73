use practice_core::model::realtime::{ParticipantPermissions, TrackSource};

/// What the local participant may publish, flattened for the control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishPermissions {
    pub microphone: bool,
    pub camera: bool,
    pub screen_share: bool,
    pub data: bool,
}

impl Default for PublishPermissions {
    fn default() -> Self {
        Self {
            microphone: true,
            camera: true,
            screen_share: true,
            data: true,
        }
    }
}

impl PublishPermissions {
    /// Map SDK permissions. Before the server sends any, everything is allowed.
    #[must_use]
    pub fn from_participant(permissions: Option<&ParticipantPermissions>) -> Self {
        let Some(permissions) = permissions else {
            return Self::default();
        };

        let can_publish_source = |source: TrackSource| {
            permissions.can_publish
                && (permissions.can_publish_sources.is_empty()
                    || permissions.can_publish_sources.contains(&source))
        };

        Self {
            microphone: can_publish_source(TrackSource::Microphone),
            camera: can_publish_source(TrackSource::Camera),
            screen_share: can_publish_source(TrackSource::ScreenShare),
            data: permissions.can_publish_data,
        }
    }
}
