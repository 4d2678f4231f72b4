//! Error types for the reservation layer.

use crate::ConflictId;

/// Errors a [`ReservationService`](crate::ReservationService) backend can
/// report.
///
/// The in-memory store never produces these. They exist for backends
/// that talk to something real (a calendar, a booking API), and so the
/// transport layer has a concrete type to log when it masks a failed
/// delete.
#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    /// The backing system failed or could not be reached.
    #[error("reservation backend failed: {0}")]
    Backend(String),

    /// The backend refused to delete a conference it knows about.
    #[error("could not delete conference {0}: {1}")]
    DeleteFailed(ConflictId, String),
}
