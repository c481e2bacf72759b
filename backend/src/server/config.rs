//! Server configuration: startup settings and the wiring config object.
//!
//! Settings come from the environment through OrthoConfig rather than
//! ad-hoc `std::env` reads scattered through the code, and are turned into
//! an explicit [`ServerConfig`] passed to the server constructor.

use backend::outbound::persistence::DbPool;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

/// Startup settings loaded from the `MOVIMIENTOS_*` environment.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MOVIMIENTOS")]
pub struct ServerSettings {
    /// PostgreSQL connection URL. Without one the server runs on fixture
    /// data, which is only useful for local exploration and tests.
    pub database_url: Option<String>,
    /// Interface to bind, defaulting to all interfaces.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
}

impl ServerSettings {
    /// Configured PostgreSQL URL, if any.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Bind address as an `(interface, port)` pair.
    pub fn bind_addr(&self) -> (String, u16) {
        (
            self.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration for the given bind address.
    #[must_use]
    pub fn new(bind_addr: (String, u16)) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for the persistence adapters.
    ///
    /// Without a pool the server falls back to fixture-backed ports.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> &(String, u16) {
        &self.bind_addr
    }
}
