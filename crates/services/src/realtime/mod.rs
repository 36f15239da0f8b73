//! Adapters over state owned by the external real-time SDK.
//!
//! The SDK runs the session and track state machines. These types only map
//! what it reports into values the UI can render, and react to agent failure.

mod agent_errors;
mod local_track;
mod permissions;

pub use agent_errors::{
    AgentErrorMonitor, AgentFailure, Notifier, SessionControl, Toast, watch_agent_errors,
};
pub use local_track::{LocalTrackRefs, TrackReference};
pub use permissions::PublishPermissions;
