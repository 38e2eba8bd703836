use thiserror::Error;

/// Failures surfaced to whoever triggered a listing, match or filter action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("request did not complete, please try again")]
    NetworkFailure,

    #[error("session expired, please log in again")]
    Unauthorized,

    #[error("select at least one favorite dog to find a match")]
    EmptyFavorites,

    #[error("{0}")]
    Validation(String),
}

impl ListingError {
    /// Errors that end the session instead of showing a notification.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ListingError::Unauthorized)
    }
}
