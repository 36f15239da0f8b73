//! Snapshots of state owned by the external real-time SDK.
//!
//! Nothing here drives the SDK. These are plain values the SDK binding hands
//! over so adapters in the services crate can map them for the UI.

use serde::{Deserialize, Serialize};

/// Media (or data) source a participant may publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackSource {
    Camera,
    Microphone,
    ScreenShare,
    ScreenShareAudio,
    Unknown,
}

/// Publish permissions the server granted to the local participant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParticipantPermissions {
    pub can_publish: bool,
    pub can_publish_data: bool,
    pub can_subscribe: bool,
    /// Empty means every source is allowed.
    pub can_publish_sources: Vec<TrackSource>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackPublication {
    pub sid: String,
    pub source: TrackSource,
    pub muted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalParticipant {
    pub identity: String,
    pub publications: Vec<TrackPublication>,
    pub permissions: Option<ParticipantPermissions>,
}

impl LocalParticipant {
    #[must_use]
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            publications: Vec::new(),
            permissions: None,
        }
    }

    /// The publication currently sending `source`, if any.
    #[must_use]
    pub fn publication(&self, source: TrackSource) -> Option<&TrackPublication> {
        self.publications.iter().find(|p| p.source == source)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Reconnecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentState {
    #[default]
    Disconnected,
    Connecting,
    Initializing,
    Listening,
    Thinking,
    Speaking,
    Failed,
}

/// Connection and agent state as last reported by the SDK.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AgentSnapshot {
    pub connection: ConnectionState,
    pub agent: AgentState,
    pub failure_reasons: Vec<String>,
}

impl AgentSnapshot {
    #[must_use]
    pub fn new(connection: ConnectionState, agent: AgentState) -> Self {
        Self {
            connection,
            agent,
            failure_reasons: Vec::new(),
        }
    }

    #[must_use]
    pub fn failed(connection: ConnectionState, reasons: Vec<String>) -> Self {
        Self {
            connection,
            agent: AgentState::Failed,
            failure_reasons: reasons,
        }
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connection == ConnectionState::Connected
    }
}
