//! HTTP endpoints for Jicofo's reservation system.
//!
//! Jicofo's `reservation` module calls three endpoints on the proxy:
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | `POST` | `/conference` | 200 conference, 409 `conflict_id`, 403 `message` |
//! | `GET` | `/conference/{conflict_id}` | 200 conference, 404 |
//! | `DELETE` | `/conference/{conflict_id}` | always 200 |
//!
//! [`router`] wires them to any [`ReservationService`].

mod error;
pub mod handlers;
mod routes;
pub mod wire;

pub use error::ApiError;
pub use routes::router;

pub use reservation_core::ReservationService;
