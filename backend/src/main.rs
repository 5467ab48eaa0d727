//! Tickle entry-point: loads settings, prepares the database and serves the REST API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use tickle::inbound::http::health::HealthState;
use tickle::outbound::persistence::{DbPool, run_pending_migrations};
use tickle::settings::ServerSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| eyre!("failed to load settings: {e}"))?;
    let bind_addr = settings.bind_addr()?;
    let mut config = ServerConfig::new(bind_addr);

    if let (true, Some(database_url)) = (settings.run_migrations, settings.database_url.clone()) {
        let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&database_url))
            .await
            .wrap_err("migration task panicked")??;
        info!(applied, "database migrations complete");
    }

    match settings.pool_config()? {
        Some(pool_config) => {
            let pool = DbPool::new(pool_config)
                .await
                .wrap_err("failed to build database pool")?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database configured; serving fixture data"),
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting server");
    create_server(health_state, config)?.await?;
    Ok(())
}
