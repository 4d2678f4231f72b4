//! Registry configuration.

use serde::{Deserialize, Serialize};

/// Default conference duration: six hours, in seconds.
pub const DEFAULT_DURATION_SECS: u64 = 6 * 3600;

/// Settings applied to every conference the registry creates.
///
/// `Default` gives the production values; tests and the binary override
/// individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Duration reported to Jicofo for every conference, in seconds.
    ///
    /// This is a fixed policy value, not tracked per conference and not
    /// enforced by a timer.
    pub duration_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
        }
    }
}
