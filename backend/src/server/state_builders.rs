//! Builders wiring repositories into the driving ports held by `HttpState`.

use std::sync::Arc;

use actix_web::web;

use tickle::domain::{CatalogueService, ClimbingLogService};
use tickle::inbound::http::state::{HttpState, HttpStatePorts};
use tickle::outbound::persistence::{
    DbPool, DieselAreaRepository, DieselAttemptRepository, DieselBoulderRepository,
    DieselDifficultyRepository, DieselRouteRepository, DieselTodoRepository,
    DieselUserRepository,
};

use super::ServerConfig;

fn diesel_ports(pool: &DbPool) -> HttpStatePorts {
    let catalogue = Arc::new(CatalogueService::new(
        Arc::new(DieselAreaRepository::new(pool.clone())),
        Arc::new(DieselDifficultyRepository::new(pool.clone())),
        Arc::new(DieselBoulderRepository::new(pool.clone())),
        Arc::new(DieselRouteRepository::new(pool.clone())),
    ));
    let climbing_log = Arc::new(ClimbingLogService::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselAttemptRepository::new(pool.clone())),
        Arc::new(DieselTodoRepository::new(pool.clone())),
    ));
    HttpStatePorts {
        catalogue: catalogue.clone(),
        catalogue_commands: catalogue,
        climbing_log: climbing_log.clone(),
        climbing_log_commands: climbing_log,
    }
}

/// Use database-backed services when a pool is configured, fixtures otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let ports = match &config.db_pool {
        Some(pool) => diesel_ports(pool),
        None => HttpStatePorts::fixtures(),
    };
    web::Data::new(HttpState::new(ports))
}
