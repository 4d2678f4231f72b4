//! Creation policy hook.
//!
//! The proxy itself has no opinion on who may open a room. A
//! [`CreationPolicy`] gets to look at every create request before the
//! registry does and may refuse it with a message for the user. Plug in
//! a calendar check, an allow-list, or a booking API here.
//!
//! The reference policy, [`AllowAll`], never refuses.

use crate::ConferenceRequest;

/// What a policy decided about a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    /// Go ahead: look up or allocate the conference.
    Allow,

    /// Refuse. The message is passed through to the user.
    Reject(String),
}

/// Decides whether a conference may be created.
///
/// Called before any lookup or id allocation, and outside the registry
/// lock, so implementations are free to await I/O.
///
/// # Example
///
/// ```rust
/// use reservation_core::{ConferenceRequest, CreationPolicy, PolicyDecision};
///
/// /// Only rooms with a team prefix may be opened.
/// struct TeamRoomsOnly;
///
/// impl CreationPolicy for TeamRoomsOnly {
///     async fn review(&self, request: &ConferenceRequest) -> PolicyDecision {
///         if request.room_name.starts_with("team-") {
///             PolicyDecision::Allow
///         } else {
///             PolicyDecision::Reject("only team rooms can be booked".into())
///         }
///     }
/// }
/// ```
pub trait CreationPolicy: Send + Sync + 'static {
    /// Reviews a create request.
    fn review(
        &self,
        request: &ConferenceRequest,
    ) -> impl std::future::Future<Output = PolicyDecision> + Send;
}

/// Policy that allows every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl CreationPolicy for AllowAll {
    async fn review(&self, _request: &ConferenceRequest) -> PolicyDecision {
        PolicyDecision::Allow
    }
}
