//! # Reservation proxy
//!
//! A reservation system for Jitsi's conference focus (Jicofo). Jicofo
//! asks the proxy before opening a room; the proxy answers yes, no, or
//! "already exists" and tracks a numeric conflict id for each active
//! room.
//!
//! The crates underneath:
//!
//! - `reservation-core`: conflict ids, the registry, the service trait
//! - `reservation-http`: the `/conference` endpoints
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reservation_proxy::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ProxyError> {
//!     ProxyServer::builder()
//!         .bind("0.0.0.0:8080")
//!         .build_in_memory()
//!         .await?
//!         .run()
//!         .await
//! }
//! ```
//!
//! To plug in real booking rules, implement
//! [`CreationPolicy`](reservation_core::CreationPolicy) and pass
//! `InMemoryReservations::with_policy(..)` to
//! [`ProxyServerBuilder::build`], or implement
//! [`ReservationService`](reservation_core::ReservationService) for a
//! backend of your own.

mod config;
mod error;
mod server;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use server::{ProxyServer, ProxyServerBuilder};

/// Re-exports the types most setups need.
pub mod prelude {
    pub use crate::{ProxyConfig, ProxyError, ProxyServer, ProxyServerBuilder};
    pub use reservation_core::{
        AllowAll, ConferenceInfo, ConferenceRequest, ConflictId, CreationPolicy, CreationResult,
        InMemoryReservations, PolicyDecision, RegistryConfig, ReservationError,
        ReservationService,
    };
}
