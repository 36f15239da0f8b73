mod loading;
mod rating;

pub use loading::{LoadingState, ShimmerText};
pub use rating::RatingBadge;
