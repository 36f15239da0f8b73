use dioxus::prelude::*;
use services::{AssessmentServiceError, TrackMaintenanceError};

/// Why a view could not show its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The store could not be reached or returned unreadable rows.
    Storage,
    /// The data broke a domain rule.
    Invalid,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Storage => "Something went wrong reading saved data. Please try again.",
            Self::Invalid => "Something went wrong: this record is not valid.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<AssessmentServiceError> for ViewError {
    fn from(err: AssessmentServiceError) -> Self {
        match err {
            AssessmentServiceError::Storage(_) => Self::Storage,
            AssessmentServiceError::Assessment(_) => Self::Invalid,
            _ => Self::Unknown,
        }
    }
}

impl From<TrackMaintenanceError> for ViewError {
    fn from(err: TrackMaintenanceError) -> Self {
        match err {
            TrackMaintenanceError::Storage(_) => Self::Storage,
            TrackMaintenanceError::Track(_) => Self::Invalid,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
