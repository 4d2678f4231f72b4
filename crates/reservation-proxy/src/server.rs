//! `ProxyServer` builder and serve loop.
//!
//! Ties the layers together: a reservation service, the HTTP router in
//! front of it, and a TCP listener.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use reservation_core::{InMemoryReservations, RegistryConfig, ReservationService};
use tokio::net::TcpListener;

use crate::ProxyError;

/// Builder for configuring and starting the proxy.
///
/// # Example
///
/// ```rust,no_run
/// use reservation_proxy::prelude::*;
///
/// # async fn run() -> Result<(), ProxyError> {
/// let server = ProxyServer::builder()
///     .bind("0.0.0.0:8080")
///     .build_in_memory()
///     .await?;
/// server.run().await
/// # }
/// ```
pub struct ProxyServerBuilder {
    bind_addr: String,
    registry_config: RegistryConfig,
}

impl ProxyServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            registry_config: RegistryConfig::default(),
        }
    }

    /// Sets the address to listen on.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the registry configuration used by [`build_in_memory`](Self::build_in_memory).
    pub fn registry_config(mut self, config: RegistryConfig) -> Self {
        self.registry_config = config;
        self
    }

    /// Binds the listener and serves `service`.
    pub async fn build<S: ReservationService>(self, service: S) -> Result<ProxyServer, ProxyError> {
        let listener = TcpListener::bind(&self.bind_addr)
            .await
            .map_err(|source| ProxyError::Bind {
                addr: self.bind_addr.clone(),
                source,
            })?;

        let app = reservation_http::router(Arc::new(service));
        Ok(ProxyServer { listener, app })
    }

    /// Binds the listener and serves the in-memory reference store,
    /// which allows every create request.
    pub async fn build_in_memory(self) -> Result<ProxyServer, ProxyError> {
        let service = InMemoryReservations::new(self.registry_config.clone());
        self.build(service).await
    }
}

impl Default for ProxyServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound reservation proxy.
///
/// Call [`run()`](Self::run) to start answering requests.
pub struct ProxyServer {
    listener: TcpListener,
    app: Router,
}

impl ProxyServer {
    /// Creates a new builder.
    pub fn builder() -> ProxyServerBuilder {
        ProxyServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves requests until the process is terminated.
    pub async fn run(self) -> Result<(), ProxyError> {
        self.run_until(std::future::pending()).await
    }

    /// Serves requests until `shutdown` completes, then drains in-flight
    /// requests and returns.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), ProxyError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(addr) = self.listener.local_addr() {
            tracing::info!(%addr, "reservation proxy listening");
        }

        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ProxyError::Serve)?;

        tracing::info!("reservation proxy stopped");
        Ok(())
    }
}
