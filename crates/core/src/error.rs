use thiserror::Error;

use crate::model::{AssessmentError, TrackError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Track(#[from] TrackError),
}
