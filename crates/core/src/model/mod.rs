mod assessment;
mod ids;
pub mod realtime;
mod track;

pub use assessment::{AssessmentError, AssessmentSession, NewAssessmentSession, SessionStats};
pub use ids::{AssessmentSessionId, ParseIdError, TrackId};
pub use track::{PracticeTrack, TrackDraft, TrackError, TrackSlug, ValidatedTrack};
