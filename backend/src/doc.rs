//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers for domain errors. Request and response bodies
//! are collected from the path definitions.
//!
//! The document is served by Swagger UI in debug builds and printed by
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tickle climbing log API",
        description = "Areas, boulders, routes and grades, plus each climber's attempts and todos."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::areas::list_areas,
        crate::inbound::http::areas::get_area,
        crate::inbound::http::areas::create_area,
        crate::inbound::http::areas::delete_area,
        crate::inbound::http::boulders::list_boulders,
        crate::inbound::http::boulders::get_boulder,
        crate::inbound::http::boulders::create_boulder,
        crate::inbound::http::boulders::delete_boulder,
        crate::inbound::http::routes::list_routes,
        crate::inbound::http::routes::get_route,
        crate::inbound::http::routes::create_route,
        crate::inbound::http::routes::delete_route,
        crate::inbound::http::difficulties::list_difficulties,
        crate::inbound::http::difficulties::create_difficulty,
        crate::inbound::http::difficulties::delete_difficulty,
        crate::inbound::http::attempts::list_attempts,
        crate::inbound::http::attempts::create_attempt,
        crate::inbound::http::todos::list_todos,
        crate::inbound::http::todos::create_todo,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "areas", description = "Crags and sub-areas"),
        (name = "boulders", description = "Boulder problems"),
        (name = "routes", description = "Roped routes and their pitches"),
        (name = "difficulties", description = "Boulder and route grade scales"),
        (name = "attempts", description = "Logged attempts"),
        (name = "todos", description = "Climbs users intend to try"),
        (name = "users", description = "Climbers owning attempts and todos"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    #[rstest]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        match error_schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(obj.properties.contains_key("code"));
                assert!(obj.properties.contains_key("message"));
                assert!(obj.properties.contains_key("traceId"));
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/v1/areas")]
    #[case("/api/v1/areas/{id}")]
    #[case("/api/v1/boulders/{id}")]
    #[case("/api/v1/routes")]
    #[case("/api/v1/attempts")]
    #[case("/api/v1/todos")]
    #[case("/api/v1/difficulties/{scale}/{id}")]
    #[case("/api/v1/users/{id}")]
    #[case("/health/ready")]
    fn document_lists_endpoint(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn response_bodies_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        for name in ["RouteBody", "AttemptBody", "TodoEntryBody", "AreaDetailBody"] {
            assert!(schemas.contains_key(name), "missing {name}");
        }
    }
}
