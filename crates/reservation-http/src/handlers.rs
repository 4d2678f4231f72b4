//! Request handlers for the `/conference` endpoints.
//!
//! Each handler turns the HTTP request into one call on the
//! [`ReservationService`] and renders the result. No reservation logic
//! lives here.

use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Path, State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reservation_core::{ConflictId, CreationResult, ReservationService};

use crate::ApiError;
use crate::wire::{ConferenceBody, ConflictBody, CreateConferenceForm, MessageBody};

/// `POST /conference`
///
/// - 200 with the new conference
/// - 409 with `conflict_id` if the room is already active
/// - 403 with the policy's message if creation was refused
/// - 500 if a form field is missing or the backend failed
pub async fn create_conference<S: ReservationService>(
    State(service): State<Arc<S>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Response, ApiError> {
    let form = match form {
        Ok(Form(pairs)) => CreateConferenceForm::from_pairs(pairs),
        Err(rejection) => {
            tracing::error!(error = %rejection, "unreadable create form");
            CreateConferenceForm::default()
        }
    };

    let Some(request) = form.into_request() else {
        tracing::error!("missing params from Jicofo");
        return Err(ApiError::MissingParams);
    };

    let response = match service.create_conference(request).await? {
        CreationResult::Created(info) => {
            (StatusCode::OK, Json(ConferenceBody::from(info))).into_response()
        }
        CreationResult::AlreadyExists(info) => (
            StatusCode::CONFLICT,
            Json(ConflictBody {
                conflict_id: info.conflict_id,
            }),
        )
            .into_response(),
        CreationResult::Rejected { message } => {
            (StatusCode::FORBIDDEN, Json(MessageBody::new(message))).into_response()
        }
    };
    Ok(response)
}

/// `GET /conference/{conflict_id}`
///
/// 200 with the conference, or 404 if the id is unknown or not an
/// integer.
pub async fn get_conference<S: ReservationService>(
    State(service): State<Arc<S>>,
    Path(raw_id): Path<String>,
) -> Result<Json<ConferenceBody>, ApiError> {
    let conflict_id = parse_conflict_id(&raw_id).ok_or(ApiError::UnknownConference)?;

    service
        .get_conference(conflict_id)
        .await?
        .map(|info| Json(ConferenceBody::from(info)))
        .ok_or(ApiError::UnknownConference)
}

/// `DELETE /conference/{conflict_id}`
///
/// Always answers 200 `{"message": "OK"}` for an integer id, whatever
/// the backend did. An integer too large to be a conflict id can't name a
/// conference, so it is answered the same way without a backend call. Jicofo reuses or expires rooms incorrectly when a
/// delete reports anything else, so backend errors (and panics) are
/// logged and dropped here on purpose.
///
/// Jicofo may never call this after the last participant leaves, only on
/// expiry; the registry doesn't depend on it being prompt.
pub async fn delete_conference<S: ReservationService>(
    State(service): State<Arc<S>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let Some(conflict_id) = parse_conflict_id(&raw_id) else {
        if !is_decimal(&raw_id) {
            return Err(ApiError::UnknownConference);
        }
        tracing::debug!(raw_id = %raw_id, "delete for out-of-range id");
        return Ok(Json(MessageBody::new("OK")));
    };

    // Run on its own task so a panicking backend surfaces as a JoinError
    // instead of tearing down the connection.
    let task = tokio::spawn(async move { service.delete_conference(conflict_id).await });
    match task.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            tracing::error!(%conflict_id, error = %e, "delete_conference failed");
        }
        Err(e) => {
            tracing::error!(%conflict_id, error = %e, "delete_conference task aborted");
        }
    }

    Ok(Json(MessageBody::new("OK")))
}

/// Parses a path segment the way Jicofo formats ids: plain decimal digits.
fn parse_conflict_id(raw: &str) -> Option<ConflictId> {
    if !is_decimal(raw) {
        return None;
    }
    raw.parse().ok().map(ConflictId)
}

fn is_decimal(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}
