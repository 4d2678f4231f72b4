//! Command-line and environment configuration.

use clap::Parser;
use reservation_core::{DEFAULT_DURATION_SECS, RegistryConfig};

use crate::ProxyServerBuilder;

/// Settings for the `reservation-proxy` binary.
///
/// Every flag can also come from the environment, which is how the
/// proxy is usually configured next to a Jitsi deployment.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "reservation-proxy", version, about = "Reservation proxy for Jicofo")]
pub struct ProxyConfig {
    /// Address to listen on.
    #[arg(long = "bind", env = "RESERVATION_BIND", default_value = "127.0.0.1:8080")]
    pub bind_addr: String,

    /// Duration reported for every conference, in seconds.
    #[arg(long, env = "RESERVATION_DURATION_SECS", default_value_t = DEFAULT_DURATION_SECS)]
    pub duration_secs: u64,
}

impl ProxyConfig {
    /// Registry settings derived from this config.
    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            duration_secs: self.duration_secs,
        }
    }

    /// A server builder preloaded with this config.
    pub fn builder(&self) -> ProxyServerBuilder {
        ProxyServerBuilder::new()
            .bind(&self.bind_addr)
            .registry_config(self.registry_config())
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            duration_secs: DEFAULT_DURATION_SECS,
        }
    }
}
