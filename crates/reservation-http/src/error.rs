//! HTTP error type and its Axum integration.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reservation_core::ReservationError;

use crate::wire::MessageBody;

/// Failures the HTTP layer reports to Jicofo.
///
/// A conflict or a policy rejection is not an error and never shows up
/// here; those are ordinary responses built by the handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A create request was missing `name`, `start_time` or `mail_owner`.
    #[error("missing parameters from Jicofo")]
    MissingParams,

    /// No active conference has the requested id.
    #[error("unknown conference")]
    UnknownConference,

    /// The reservation backend failed.
    #[error(transparent)]
    Service(#[from] ReservationError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Jicofo treats anything but 200/403/409 on create as a
            // failure; 500 matches what existing deployments return.
            ApiError::MissingParams | ApiError::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UnknownConference => StatusCode::NOT_FOUND,
        }
    }

    /// Message placed in the `{"message": ...}` body.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::MissingParams => "Internal server error (Missing Jicofo params)",
            ApiError::UnknownConference => "unknown conference",
            ApiError::Service(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Service(e) = &self {
            tracing::error!(error = %e, "reservation backend failed");
        }
        let status = self.status_code();
        (status, Json(MessageBody::new(self.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MissingParams.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::UnknownConference.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(ReservationError::Backend("down".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_service_error_message_is_sanitized() {
        let err = ApiError::from(ReservationError::Backend("db password wrong".into()));
        assert_eq!(err.public_message(), "Internal server error");
        // Display still carries the detail for logs.
        assert!(err.to_string().contains("db password wrong"));
    }

    #[test]
    fn test_into_response_sets_status() {
        let response = ApiError::UnknownConference.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
