//! Request and response bodies exactly as Jicofo sends and expects them.

use reservation_core::{ConferenceInfo, ConferenceRequest, ConflictId};
use serde::{Deserialize, Serialize};

/// Form fields of `POST /conference`.
///
/// Jicofo sends `application/x-www-form-urlencoded`. Every field is
/// optional here so a missing one can be reported with Jicofo's
/// expected error body rather than a generic extractor rejection.
#[derive(Debug, Clone, Default)]
pub struct CreateConferenceForm {
    /// Short room name (not the full MUC address).
    pub name: Option<String>,
    /// Java `SimpleDateFormat` timestamp, `yyyy-MM-dd'T'HH:mm:ss.SSSX`.
    pub start_time: Option<String>,
    /// User id, e.g. `ab7bba1e-...@jitsi-host.domain`.
    pub mail_owner: Option<String>,
}

impl CreateConferenceForm {
    /// Builds the form from decoded key/value pairs. A repeated key keeps
    /// its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut form.name,
                "start_time" => &mut form.start_time,
                "mail_owner" => &mut form.mail_owner,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        form
    }

    /// Converts to a core request. `None` if any field is missing or empty.
    pub fn into_request(self) -> Option<ConferenceRequest> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Some(ConferenceRequest::new(
            present(self.name)?,
            present(self.start_time)?,
            present(self.mail_owner)?,
        ))
    }
}

/// A conference as Jicofo reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceBody {
    pub id: ConflictId,
    pub name: String,
    pub mail_owner: String,
    pub start_time: String,
    pub duration: u64,
}

impl From<ConferenceInfo> for ConferenceBody {
    fn from(info: ConferenceInfo) -> Self {
        Self {
            id: info.conflict_id,
            name: info.room_name,
            mail_owner: info.mail_owner,
            start_time: info.start_time,
            duration: info.duration,
        }
    }
}

/// Body of a 409: the id of the conference already using the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictBody {
    pub conflict_id: ConflictId,
}

/// `{"message": ...}`, used for rejections, errors, and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
