//! The reservation service seam and its in-memory reference implementation.

use tokio::sync::Mutex;

use crate::{
    AllowAll, ConferenceInfo, ConferenceRegistry, ConferenceRequest, ConflictId,
    CreationPolicy, CreationResult, PolicyDecision, RegistryConfig, ReservationError,
};

/// The three operations Jicofo's reservation protocol needs.
///
/// The HTTP layer only ever talks to this trait. Swap the implementation
/// to back reservations with something other than process memory.
///
/// # Trait bounds
///
/// `Send + Sync + 'static` because one instance is shared (behind an
/// `Arc`) by every request task for the life of the server.
pub trait ReservationService: Send + Sync + 'static {
    /// Creates a conference, or reports the active one for the same room,
    /// or rejects the request.
    fn create_conference(
        &self,
        request: ConferenceRequest,
    ) -> impl std::future::Future<Output = Result<CreationResult, ReservationError>> + Send;

    /// Looks up an active conference. `Ok(None)` means not found.
    fn get_conference(
        &self,
        conflict_id: ConflictId,
    ) -> impl std::future::Future<Output = Result<Option<ConferenceInfo>, ReservationError>> + Send;

    /// Deletes a conference if it exists. Unknown ids are not an error.
    fn delete_conference(
        &self,
        conflict_id: ConflictId,
    ) -> impl std::future::Future<Output = Result<(), ReservationError>> + Send;
}

/// Reservations held in process memory.
///
/// One [`ConferenceRegistry`] behind one mutex. Every operation takes
/// the lock for its whole read-modify-write, so two concurrent creates
/// for the same room cannot both allocate, and a delete never leaves a
/// room entry pointing at a removed record. Nothing awaits while the
/// lock is held.
///
/// The [`CreationPolicy`] runs first, outside the lock.
pub struct InMemoryReservations<P: CreationPolicy = AllowAll> {
    registry: Mutex<ConferenceRegistry>,
    policy: P,
}

impl InMemoryReservations<AllowAll> {
    /// Creates a store that allows every request.
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_policy(config, AllowAll)
    }
}

impl<P: CreationPolicy> InMemoryReservations<P> {
    /// Creates a store that consults `policy` before each create.
    pub fn with_policy(config: RegistryConfig, policy: P) -> Self {
        Self {
            registry: Mutex::new(ConferenceRegistry::new(config)),
            policy,
        }
    }

    /// Number of active conferences.
    pub async fn active_count(&self) -> usize {
        self.registry.lock().await.len()
    }

    /// Returns `true` if `conflict_id` was ever allocated by this store.
    pub async fn was_issued(&self, conflict_id: ConflictId) -> bool {
        self.registry.lock().await.was_issued(conflict_id)
    }
}

impl Default for InMemoryReservations<AllowAll> {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl<P: CreationPolicy> ReservationService for InMemoryReservations<P> {
    async fn create_conference(
        &self,
        request: ConferenceRequest,
    ) -> Result<CreationResult, ReservationError> {
        if let PolicyDecision::Reject(message) = self.policy.review(&request).await {
            tracing::info!(room = %request.room_name, %message, "conference rejected by policy");
            return Ok(CreationResult::Rejected { message });
        }

        let mut registry = self.registry.lock().await;
        Ok(registry.create(request))
    }

    async fn get_conference(
        &self,
        conflict_id: ConflictId,
    ) -> Result<Option<ConferenceInfo>, ReservationError> {
        let registry = self.registry.lock().await;
        Ok(registry.get(conflict_id).cloned())
    }

    async fn delete_conference(&self, conflict_id: ConflictId) -> Result<(), ReservationError> {
        let mut registry = self.registry.lock().await;
        if registry.delete(conflict_id).is_none() {
            tracing::debug!(%conflict_id, "delete for unknown conference ignored");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RejectEverything;

    impl CreationPolicy for RejectEverything {
        async fn review(&self, _request: &ConferenceRequest) -> PolicyDecision {
            PolicyDecision::Reject("bookings are closed".into())
        }
    }

    fn request(room: &str) -> ConferenceRequest {
        ConferenceRequest::new(room, "2024-01-01T10:00:00.000Z", "alice@host")
    }

    #[tokio::test]
    async fn test_create_conference_default_policy_creates() {
        let store = InMemoryReservations::new(RegistryConfig::default());

        let result = store.create_conference(request("room-a")).await.unwrap();

        assert!(matches!(result, CreationResult::Created(_)));
        assert_eq!(store.active_count().await, 1);
    }

    #[tokio::test]
    async fn test_create_conference_rejecting_policy_allocates_nothing() {
        let store = InMemoryReservations::with_policy(RegistryConfig::default(), RejectEverything);

        let result = store.create_conference(request("room-a")).await.unwrap();

        assert_eq!(
            result,
            CreationResult::Rejected {
                message: "bookings are closed".into()
            }
        );
        assert_eq!(store.active_count().await, 0);
    }

    #[tokio::test]
    async fn test_get_conference_unknown_returns_none() {
        let store = InMemoryReservations::new(RegistryConfig::default());

        let found = store.get_conference(ConflictId(555_555_555)).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_conference_unknown_is_ok() {
        let store = InMemoryReservations::new(RegistryConfig::default());
        store.create_conference(request("room-a")).await.unwrap();

        store
            .delete_conference(ConflictId(555_555_555))
            .await
            .expect("unknown id must not be an error");

        assert_eq!(store.active_count().await, 1);
    }

    #[tokio::test]
    async fn test_delete_conference_known_removes_and_keeps_ledger() {
        let store = InMemoryReservations::new(RegistryConfig::default());
        let id = store
            .create_conference(request("room-a"))
            .await
            .unwrap()
            .conflict_id()
            .unwrap();

        store.delete_conference(id).await.unwrap();

        assert!(store.get_conference(id).await.unwrap().is_none());
        assert!(store.was_issued(id).await);
        assert_eq!(store.active_count().await, 0);
    }
}
