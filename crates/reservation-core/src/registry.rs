//! Conference registry: room names, conflict ids, and conference records.

use std::collections::HashMap;

use crate::{
    ConferenceInfo, ConferenceRequest, ConflictId, ConflictIdGenerator, CreationResult,
    RegistryConfig,
};

/// Tracks every active conference and the ids allocated for them.
///
/// Two maps are kept in lockstep:
///
/// ```text
/// rooms:    "room-a" ──→ 123456789
/// meetings: 123456789 ──→ ConferenceInfo { room_name: "room-a", .. }
/// ```
///
/// Every room in `rooms` points at a record in `meetings` whose
/// `room_name` is that room, and both maps always have the same size.
/// Inserts and removals touch both maps in the same method call.
///
/// # Concurrency
///
/// Plain `HashMap`s, no interior locking. The registry is owned by a
/// single [`InMemoryReservations`](crate::InMemoryReservations) which
/// serializes all access through one mutex.
#[derive(Debug)]
pub struct ConferenceRegistry {
    /// Active conferences, keyed by conflict id.
    meetings: HashMap<ConflictId, ConferenceInfo>,

    /// Room name → conflict id of its active conference.
    rooms: HashMap<String, ConflictId>,

    /// Ledger of every id ever issued.
    ids: ConflictIdGenerator,

    config: RegistryConfig,
}

impl ConferenceRegistry {
    /// Creates an empty registry.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            meetings: HashMap::new(),
            rooms: HashMap::new(),
            ids: ConflictIdGenerator::new(),
            config,
        }
    }

    /// Registers a conference for `request.room_name`, or reports the
    /// one that is already active.
    ///
    /// Repeated requests for an active room (retries, people re-entering
    /// the same room) always resolve to the same conflict id. Never
    /// returns [`CreationResult::Rejected`]; policy is applied before
    /// the registry is consulted.
    pub fn create(&mut self, request: ConferenceRequest) -> CreationResult {
        if let Some(existing) = self
            .rooms
            .get(&request.room_name)
            .and_then(|id| self.meetings.get(id))
        {
            tracing::debug!(
                room = %existing.room_name,
                conflict_id = %existing.conflict_id,
                "conference already exists"
            );
            return CreationResult::AlreadyExists(existing.clone());
        }

        let conflict_id = self.ids.generate();
        let info = ConferenceInfo {
            room_name: request.room_name,
            conflict_id,
            mail_owner: request.mail_owner,
            start_time: request.start_time,
            duration: self.config.duration_secs,
        };

        self.rooms.insert(info.room_name.clone(), conflict_id);
        self.meetings.insert(conflict_id, info.clone());

        tracing::info!(
            room = %info.room_name,
            %conflict_id,
            owner = %info.mail_owner,
            "conference created"
        );
        CreationResult::Created(info)
    }

    /// Looks up an active conference by id.
    pub fn get(&self, conflict_id: ConflictId) -> Option<&ConferenceInfo> {
        self.meetings.get(&conflict_id)
    }

    /// Removes a conference and its room entry.
    ///
    /// Unknown ids are a no-op and return `None`. The id stays in the
    /// generator's ledger either way.
    pub fn delete(&mut self, conflict_id: ConflictId) -> Option<ConferenceInfo> {
        let info = self.meetings.remove(&conflict_id)?;
        self.rooms.remove(&info.room_name);
        tracing::info!(room = %info.room_name, %conflict_id, "conference deleted");
        Some(info)
    }

    /// Returns the conflict id of the active conference in `room_name`.
    pub fn room_conflict_id(&self, room_name: &str) -> Option<ConflictId> {
        self.rooms.get(room_name).copied()
    }

    /// Returns `true` if `conflict_id` was ever allocated, active or not.
    pub fn was_issued(&self, conflict_id: ConflictId) -> bool {
        self.ids.is_issued(conflict_id)
    }

    /// Number of active conferences.
    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    /// Returns `true` if no conference is active.
    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }
}

impl Default for ConferenceRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for `ConferenceRegistry`, named
    //! `test_{function}_{scenario}_{expected}`.

    use std::collections::HashSet;

    use super::*;
    use crate::generator::{CONFLICT_ID_MAX, CONFLICT_ID_MIN};

    // -- Helpers ----------------------------------------------------------

    fn request(room: &str) -> ConferenceRequest {
        ConferenceRequest::new(room, "2024-01-01T10:00:00.000Z", "alice@host")
    }

    fn created(result: CreationResult) -> ConferenceInfo {
        match result {
            CreationResult::Created(info) => info,
            other => panic!("expected Created, got {other:?}"),
        }
    }

    /// Checks that the two maps agree with each other.
    fn assert_consistent(registry: &ConferenceRegistry) {
        assert_eq!(registry.rooms.len(), registry.meetings.len());
        for (room, id) in &registry.rooms {
            let info = registry
                .meetings
                .get(id)
                .unwrap_or_else(|| panic!("room {room} points at missing id {id}"));
            assert_eq!(&info.room_name, room);
        }
    }

    // =====================================================================
    // create()
    // =====================================================================

    #[test]
    fn test_create_new_room_returns_created() {
        let mut registry = ConferenceRegistry::default();

        let info = created(registry.create(request("room-a")));

        assert_eq!(info.room_name, "room-a");
        assert_eq!(info.start_time, "2024-01-01T10:00:00.000Z");
        assert_eq!(info.mail_owner, "alice@host");
        assert_eq!(info.duration, 21_600);
        assert!((CONFLICT_ID_MIN..=CONFLICT_ID_MAX).contains(&info.conflict_id.0));
        assert_eq!(registry.len(), 1);
        assert_consistent(&registry);
    }

    #[test]
    fn test_create_same_room_twice_returns_existing_id() {
        let mut registry = ConferenceRegistry::default();
        let first = created(registry.create(request("room-a")));

        let second = registry.create(ConferenceRequest::new("room-a", "later", "bob@host"));

        match second {
            CreationResult::AlreadyExists(existing) => {
                assert_eq!(existing.conflict_id, first.conflict_id);
                // The original record is untouched.
                assert_eq!(existing.mail_owner, "alice@host");
            }
            other => panic!("expected AlreadyExists, got {other:?}"),
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_create_distinct_rooms_distinct_ids() {
        let mut registry = ConferenceRegistry::default();
        let mut seen = HashSet::new();

        for n in 0..500 {
            let info = created(registry.create(request(&format!("room-{n}"))));
            assert!(seen.insert(info.conflict_id), "id reused");
        }

        assert_eq!(registry.len(), 500);
        assert_consistent(&registry);
    }

    #[test]
    fn test_create_uses_configured_duration() {
        let mut registry = ConferenceRegistry::new(RegistryConfig { duration_secs: 60 });

        let info = created(registry.create(request("room-a")));

        assert_eq!(info.duration, 60);
    }

    // =====================================================================
    // get()
    // =====================================================================

    #[test]
    fn test_get_after_create_round_trips_fields() {
        let mut registry = ConferenceRegistry::default();
        let info = created(registry.create(request("room-a")));

        assert_eq!(registry.get(info.conflict_id), Some(&info));
    }

    #[test]
    fn test_get_unknown_id_returns_none() {
        let registry = ConferenceRegistry::default();
        assert!(registry.get(ConflictId(123_456_789)).is_none());
    }

    // =====================================================================
    // delete()
    // =====================================================================

    #[test]
    fn test_delete_removes_both_entries() {
        let mut registry = ConferenceRegistry::default();
        let info = created(registry.create(request("room-a")));

        let removed = registry.delete(info.conflict_id);

        assert_eq!(removed, Some(info.clone()));
        assert!(registry.get(info.conflict_id).is_none());
        assert!(registry.room_conflict_id("room-a").is_none());
        assert!(registry.is_empty());
        assert_consistent(&registry);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut registry = ConferenceRegistry::default();
        let info = created(registry.create(request("room-a")));

        assert!(registry.delete(ConflictId(1)).is_none());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(info.conflict_id), Some(&info));
        assert_consistent(&registry);
    }

    #[test]
    fn test_delete_keeps_id_in_ledger() {
        let mut registry = ConferenceRegistry::default();
        let info = created(registry.create(request("room-a")));

        registry.delete(info.conflict_id);

        assert!(registry.was_issued(info.conflict_id));
    }

    #[test]
    fn test_delete_then_create_same_room_gets_new_id() {
        let mut registry = ConferenceRegistry::default();
        let first = created(registry.create(request("room-a")));
        registry.delete(first.conflict_id);

        let second = created(registry.create(request("room-a")));

        assert_ne!(first.conflict_id, second.conflict_id);
        assert_eq!(registry.room_conflict_id("room-a"), Some(second.conflict_id));
    }

    #[test]
    fn test_delete_leaves_other_rooms_alone() {
        let mut registry = ConferenceRegistry::default();
        let a = created(registry.create(request("room-a")));
        let b = created(registry.create(request("room-b")));

        registry.delete(a.conflict_id);

        assert_eq!(registry.get(b.conflict_id), Some(&b));
        assert_eq!(registry.room_conflict_id("room-b"), Some(b.conflict_id));
        assert_consistent(&registry);
    }
}
