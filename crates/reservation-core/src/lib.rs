//! Conference reservations for the Jicofo reservation proxy.
//!
//! Before Jicofo lets a room be used it asks the proxy whether the
//! conference may be created. This crate answers that question and keeps
//! track of the numeric "conflict id" assigned to each active room.
//!
//! # Key types
//!
//! - [`ConflictIdGenerator`]: random 9-digit ids, never reused
//! - [`ConferenceRegistry`]: room name ↔ conflict id ↔ [`ConferenceInfo`]
//! - [`CreationPolicy`]: hook that may reject a create request
//! - [`ReservationService`]: the create/get/delete seam the HTTP layer calls
//! - [`InMemoryReservations`]: a registry behind a mutex
//!
//! # How it fits in the stack
//!
//! ```text
//! HTTP layer (reservation-http)  ← parses forms, renders JSON
//!     ↕
//! ReservationService (this crate)  ← policy, locking
//!     ↕
//! ConferenceRegistry → ConflictIdGenerator
//! ```

#![allow(async_fn_in_trait)]

mod config;
mod error;
mod generator;
mod policy;
mod registry;
mod service;
mod types;

pub use config::{DEFAULT_DURATION_SECS, RegistryConfig};
pub use error::ReservationError;
pub use generator::{CONFLICT_ID_MAX, CONFLICT_ID_MIN, ConflictIdGenerator};
pub use policy::{AllowAll, CreationPolicy, PolicyDecision};
pub use registry::ConferenceRegistry;
pub use service::{InMemoryReservations, ReservationService};
pub use types::{ConferenceInfo, ConferenceRequest, ConflictId, CreationResult};
