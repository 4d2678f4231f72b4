//! Value types shared by the registry, the service trait, and the
//! HTTP layer above it.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ConflictId
// ---------------------------------------------------------------------------

/// The numeric identifier Jicofo uses to refer to a reserved conference.
///
/// Newtype over `u64` so it can't be mixed up with other integers (a
/// duration, a count). Serialized as the bare number because Jicofo
/// expects an integer `id` field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ConflictId(pub u64);

impl ConflictId {
    /// Returns the underlying `u64` value.
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConflictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ConferenceRequest
// ---------------------------------------------------------------------------

/// A request from the caller to create (or re-enter) a conference room.
///
/// All three fields are expected to be non-empty by the time a request
/// reaches the registry. Checking that is the transport layer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConferenceRequest {
    /// Short room name (not the full MUC address).
    pub room_name: String,

    /// Caller's timestamp, kept verbatim. Jicofo sends
    /// `yyyy-MM-dd'T'HH:mm:ss.SSSX` but nothing here parses it.
    pub start_time: String,

    /// Owner identifier as provided by the caller.
    pub mail_owner: String,
}

impl ConferenceRequest {
    /// Convenience constructor.
    pub fn new(
        room_name: impl Into<String>,
        start_time: impl Into<String>,
        mail_owner: impl Into<String>,
    ) -> Self {
        Self {
            room_name: room_name.into(),
            start_time: start_time.into(),
            mail_owner: mail_owner.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// ConferenceInfo
// ---------------------------------------------------------------------------

/// The registry's record of an active conference.
///
/// Built once on a successful create and never mutated afterwards. The
/// registry hands out clones; the stored copy only goes away on delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceInfo {
    /// Room name, unique among active conferences.
    pub room_name: String,

    /// Identifier allocated for this conference. Never reused.
    pub conflict_id: ConflictId,

    /// Owner identifier, opaque.
    pub mail_owner: String,

    /// Caller-supplied start time, opaque.
    pub start_time: String,

    /// Maximum lifetime in seconds. Advisory only: expiry is driven by
    /// the caller deleting the conference.
    pub duration: u64,
}

// ---------------------------------------------------------------------------
// CreationResult
// ---------------------------------------------------------------------------

/// Outcome of a create request.
///
/// Exactly three outcomes exist. A conflict and a policy rejection are
/// normal results, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationResult {
    /// A new conference was registered.
    Created(ConferenceInfo),

    /// The room is already active. Carries the existing record so the
    /// caller can reuse its conflict id.
    AlreadyExists(ConferenceInfo),

    /// The creation policy refused the request. The message is shown
    /// to the user.
    Rejected { message: String },
}

impl CreationResult {
    /// Returns the conflict id for `Created` and `AlreadyExists`.
    pub fn conflict_id(&self) -> Option<ConflictId> {
        match self {
            Self::Created(info) | Self::AlreadyExists(info) => Some(info.conflict_id),
            Self::Rejected { .. } => None,
        }
    }
}
