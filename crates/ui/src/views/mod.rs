mod assessment;
mod dashboard;
mod state;
mod tracks;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assessment::AssessmentResultView;
pub use dashboard::HomeView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use tracks::TrackDiagnosticsView;
