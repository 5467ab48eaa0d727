//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CatalogueCommand, CatalogueQuery, ClimbingLogCommand, ClimbingLogQuery,
    FixtureCatalogueCommand, FixtureCatalogueQuery, FixtureClimbingLogCommand,
    FixtureClimbingLogQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub catalogue: Arc<dyn CatalogueQuery>,
    pub catalogue_commands: Arc<dyn CatalogueCommand>,
    pub climbing_log: Arc<dyn ClimbingLogQuery>,
    pub climbing_log_commands: Arc<dyn ClimbingLogCommand>,
}

impl HttpStatePorts {
    /// Ports backed by in-memory fixtures, used when no database is configured.
    ///
    /// # Examples
    /// ```
    /// use tickle::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts::fixtures());
    /// let _catalogue = state.catalogue.clone();
    /// ```
    pub fn fixtures() -> Self {
        Self {
            catalogue: Arc::new(FixtureCatalogueQuery),
            catalogue_commands: Arc::new(FixtureCatalogueCommand),
            climbing_log: Arc::new(FixtureClimbingLogQuery),
            climbing_log_commands: Arc::new(FixtureClimbingLogCommand),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub catalogue: Arc<dyn CatalogueQuery>,
    pub catalogue_commands: Arc<dyn CatalogueCommand>,
    pub climbing_log: Arc<dyn ClimbingLogQuery>,
    pub climbing_log_commands: Arc<dyn ClimbingLogCommand>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            catalogue,
            catalogue_commands,
            climbing_log,
            climbing_log_commands,
        } = ports;
        Self {
            catalogue,
            catalogue_commands,
            climbing_log,
            climbing_log_commands,
        }
    }
}
