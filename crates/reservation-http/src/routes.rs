use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::ReservationService;

/// Builds the router for the reservation endpoints.
///
/// The service is shared by every request; construct it once at startup.
pub fn router<S: ReservationService>(service: Arc<S>) -> Router {
    Router::new()
        .route("/conference", post(handlers::create_conference::<S>))
        .route(
            "/conference/{conflict_id}",
            get(handlers::get_conference::<S>).delete(handlers::delete_conference::<S>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
