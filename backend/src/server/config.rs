//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

/// Default bind address used when `BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration for the given bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Build the configuration from the process environment.
    ///
    /// Reads `BIND_ADDR` (default `0.0.0.0:8080`).
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the configured address fails to parse.
    pub fn from_env() -> std::io::Result<Self> {
        let raw = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw.parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid BIND_ADDR {raw}: {e}"),
            )
        })?;
        Ok(Self::new(bind_addr))
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
