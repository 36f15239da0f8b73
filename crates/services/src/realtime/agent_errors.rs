use std::sync::Arc;

use practice_core::model::realtime::{AgentSnapshot, AgentState};
use tokio::sync::watch;

const REASON_SEPARATOR: &str = "; ";

/// User-facing notification raised by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

/// Shows toasts. Implemented by the UI shell.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Ends the SDK session. Teardown itself belongs to the SDK.
pub trait SessionControl: Send + Sync {
    fn end(&self);
}

/// Failure reasons reported by the agent at the moment it entered `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentFailure {
    pub reasons: Vec<String>,
}

impl AgentFailure {
    #[must_use]
    pub fn message(&self) -> String {
        if self.reasons.is_empty() {
            return "The agent stopped responding.".to_owned();
        }
        self.reasons.join(REASON_SEPARATOR)
    }

    #[must_use]
    pub fn to_toast(&self) -> Toast {
        Toast {
            title: "Session ended".to_owned(),
            description: self.message(),
        }
    }
}

/// Edge detector for agent failure.
///
/// Reports once when the session is connected and the agent is failed, then
/// stays quiet until that condition clears.
#[derive(Debug, Default)]
pub struct AgentErrorMonitor {
    reported: bool,
}

impl AgentErrorMonitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, snapshot: &AgentSnapshot) -> Option<AgentFailure> {
        let failing = snapshot.is_connected() && snapshot.agent == AgentState::Failed;
        if !failing {
            self.reported = false;
            return None;
        }
        if self.reported {
            return None;
        }
        self.reported = true;
        Some(AgentFailure {
            reasons: snapshot.failure_reasons.clone(),
        })
    }
}

/// Follow SDK snapshots until the sender goes away, toasting and ending the
/// session on each agent failure.
///
/// `watch` keeps only the latest value, so a failure that clears before this
/// task observes it is never reported.
pub async fn watch_agent_errors(
    mut snapshots: watch::Receiver<AgentSnapshot>,
    notifier: Arc<dyn Notifier>,
    control: Arc<dyn SessionControl>,
) {
    let mut monitor = AgentErrorMonitor::new();
    loop {
        let snapshot = snapshots.borrow_and_update().clone();
        if let Some(failure) = monitor.observe(&snapshot) {
            tracing::warn!(reasons = %failure.message(), "agent failed; ending session");
            notifier.notify(failure.to_toast());
            control.end();
        }
        if snapshots.changed().await.is_err() {
            break;
        }
    }
}
