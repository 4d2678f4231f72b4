//! Conflict-id generator: random 9-digit ids that are never handed out twice.

use std::collections::HashSet;

use rand::Rng;

use crate::ConflictId;

/// Smallest id the generator produces.
pub const CONFLICT_ID_MIN: u64 = 100_000_000;

/// Largest id the generator produces.
pub const CONFLICT_ID_MAX: u64 = 999_999_999;

/// Issues conflict ids and remembers every one it has issued.
///
/// The ledger only grows. Deleting a conference does not release its id,
/// so a stale id from Jicofo can never match a newer conference.
///
/// Not synchronized; the owning registry is always accessed under a lock.
#[derive(Debug, Default)]
pub struct ConflictIdGenerator {
    issued: HashSet<ConflictId>,
}

impl ConflictIdGenerator {
    /// Creates a generator with an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws a fresh id using the thread-local RNG.
    pub fn generate(&mut self) -> ConflictId {
        self.generate_with(&mut rand::rng())
    }

    /// Draws a fresh id from `rng`.
    ///
    /// Rejection sampling: redraw until the value is not in the ledger.
    /// There is no retry cap; with ~900M possible values a collision is
    /// already rare and a long streak is not a practical concern.
    pub fn generate_with<R: Rng>(&mut self, rng: &mut R) -> ConflictId {
        loop {
            let id = ConflictId(rng.random_range(CONFLICT_ID_MIN..=CONFLICT_ID_MAX));
            // `insert` returns false when the value was already present.
            if self.issued.insert(id) {
                return id;
            }
            tracing::debug!(conflict_id = %id, "conflict id collision, redrawing");
        }
    }

    /// Returns `true` if `id` was ever issued by this generator.
    pub fn is_issued(&self, id: ConflictId) -> bool {
        self.issued.contains(&id)
    }

    /// Number of ids issued so far.
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}
