//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use tickle::Trace;
#[cfg(debug_assertions)]
use tickle::doc::ApiDoc;
use tickle::inbound::http::areas::{create_area, delete_area, get_area, list_areas};
use tickle::inbound::http::attempts::{create_attempt, list_attempts};
use tickle::inbound::http::boulders::{create_boulder, delete_boulder, get_boulder, list_boulders};
use tickle::inbound::http::difficulties::{
    create_difficulty, delete_difficulty, list_difficulties,
};
use tickle::inbound::http::health::{HealthState, live, ready};
use tickle::inbound::http::routes::{create_route, delete_route, get_route, list_routes};
use tickle::inbound::http::state::HttpState;
use tickle::inbound::http::todos::{create_todo, list_todos};
use tickle::inbound::http::users::{create_user, delete_user};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api/v1")
        .service(list_areas)
        .service(get_area)
        .service(create_area)
        .service(delete_area)
        .service(list_boulders)
        .service(get_boulder)
        .service(create_boulder)
        .service(delete_boulder)
        .service(list_routes)
        .service(get_route)
        .service(create_route)
        .service(delete_route)
        .service(list_difficulties)
        .service(create_difficulty)
        .service(delete_difficulty)
        .service(list_attempts)
        .service(create_attempt)
        .service(list_todos)
        .service(create_todo)
        .service(create_user)
        .service(delete_user);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The readiness flag is raised once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let bind_addr = config.bind_addr;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
