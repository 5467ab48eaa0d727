//! Multi-pitch route endpoints.
//!
//! ```text
//! GET    /api/v1/routes
//! GET    /api/v1/routes/{id}
//! POST   /api/v1/routes
//! DELETE /api/v1/routes/{id}
//! ```
//!
//! A route's grade is never stored; responses carry the hardest pitch's
//! grade, or `null` for a route with no pitches yet.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewPitch, NewRoute, NewRouteDraft, Pitch, ProtectionStyle, Route};
use crate::inbound::http::ApiResult;
use crate::inbound::http::boulders::{parse_climb_name, parse_mountainproject};
use crate::inbound::http::difficulties::DifficultyBody;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, field_error, parse_code, parse_optional_uuid, parse_or_generate_id, parse_order,
    parse_uuid,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PitchBody {
    #[schema(format = "uuid")]
    pub id: String,
    /// Position within the route, lowest first.
    pub order: u16,
    pub difficulty: DifficultyBody,
}

impl From<&Pitch> for PitchBody {
    fn from(value: &Pitch) -> Self {
        Self {
            id: value.id().to_string(),
            order: value.order(),
            difficulty: DifficultyBody::from(value.difficulty()),
        }
    }
}

/// A route with its pitches and derived grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(example = "The Nose")]
    pub name: String,
    #[schema(format = "uuid")]
    pub area_id: Option<String>,
    /// `sport`, `toprope` or `trad`.
    #[schema(example = "trad")]
    pub protection_style: String,
    #[schema(format = "uri")]
    pub mountainproject: Option<String>,
    pub pitches: Vec<PitchBody>,
    /// Hardest pitch grade; `null` when unrated.
    pub difficulty: Option<DifficultyBody>,
    #[schema(example = "The Nose (5.14a)")]
    pub display: String,
}

impl From<&Route> for RouteBody {
    fn from(value: &Route) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_string(),
            area_id: value.area_id().map(|id| id.to_string()),
            protection_style: value.protection_style().to_string(),
            mountainproject: value.mountainproject().map(|url| url.as_str().to_owned()),
            pitches: value.pitches().iter().map(PitchBody::from).collect(),
            difficulty: value.difficulty().map(DifficultyBody::from),
            display: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePitchRequest {
    #[schema(format = "uuid")]
    pub id: Option<String>,
    pub order: i32,
    /// Grade from the route scale.
    #[schema(format = "uuid")]
    pub difficulty_id: String,
}

/// Request payload for adding a route together with its pitches.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteRequest {
    #[schema(format = "uuid")]
    pub id: Option<String>,
    pub name: String,
    #[schema(format = "uuid")]
    pub area_id: Option<String>,
    #[schema(example = "sport")]
    pub protection_style: String,
    #[schema(format = "uri")]
    pub mountainproject: Option<String>,
    #[serde(default)]
    pub pitches: Vec<CreatePitchRequest>,
}

fn parse_pitch(payload: CreatePitchRequest) -> ApiResult<NewPitch> {
    Ok(NewPitch {
        id: parse_or_generate_id(payload.id, FieldName::new("pitches.id"))?,
        order: parse_order(payload.order, FieldName::new("pitches.order"))?,
        difficulty_id: parse_uuid(payload.difficulty_id, FieldName::new("pitches.difficultyId"))?,
    })
}

fn parse_new_route(payload: CreateRouteRequest) -> ApiResult<NewRoute> {
    let pitches = payload
        .pitches
        .into_iter()
        .map(parse_pitch)
        .collect::<ApiResult<Vec<_>>>()?;
    let draft = NewRouteDraft {
        id: parse_or_generate_id(payload.id, FieldName::new("id"))?,
        name: parse_climb_name(payload.name)?,
        area_id: parse_optional_uuid(payload.area_id, FieldName::new("areaId"))?,
        protection_style: parse_code::<ProtectionStyle>(
            payload.protection_style,
            FieldName::new("protectionStyle"),
        )?,
        mountainproject: parse_mountainproject(payload.mountainproject)?,
        pitches,
    };
    NewRoute::new(draft).map_err(|err| field_error(FieldName::new("pitches"), err))
}

/// List every route ordered by name.
#[utoipa::path(
    get,
    path = "/api/v1/routes",
    responses(
        (status = 200, description = "Routes with pitches", body = [RouteBody]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["routes"],
    operation_id = "listRoutes"
)]
#[get("/routes")]
pub async fn list_routes(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<RouteBody>>> {
    let routes = state.catalogue.list_routes().await?;
    Ok(web::Json(routes.iter().map(RouteBody::from).collect()))
}

/// Fetch one route.
#[utoipa::path(
    get,
    path = "/api/v1/routes/{id}",
    params(("id" = uuid::Uuid, Path, description = "Route identifier")),
    responses(
        (status = 200, description = "Route", body = RouteBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Route not found", body = ErrorSchema)
    ),
    tags = ["routes"],
    operation_id = "getRoute"
)]
#[get("/routes/{id}")]
pub async fn get_route(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<RouteBody>> {
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;
    let route = state.catalogue.get_route(id).await?;
    Ok(web::Json(RouteBody::from(&route)))
}

/// Add a route and its pitches in one transaction.
#[utoipa::path(
    post,
    path = "/api/v1/routes",
    request_body = CreateRouteRequest,
    responses(
        (status = 201, description = "Route created", body = RouteBody),
        (status = 400, description = "Invalid request or unknown grade/area", body = ErrorSchema),
        (status = 409, description = "Duplicate id or pitch order", body = ErrorSchema)
    ),
    tags = ["routes"],
    operation_id = "createRoute"
)]
#[post("/routes")]
pub async fn create_route(
    state: web::Data<HttpState>,
    payload: web::Json<CreateRouteRequest>,
) -> ApiResult<HttpResponse> {
    let route = parse_new_route(payload.into_inner())?;
    let created = state.catalogue_commands.create_route(route).await?;
    Ok(HttpResponse::Created().json(RouteBody::from(&created)))
}

/// Remove a route and its pitches.
#[utoipa::path(
    delete,
    path = "/api/v1/routes/{id}",
    params(("id" = uuid::Uuid, Path, description = "Route identifier")),
    responses(
        (status = 204, description = "Route and pitches deleted"),
        (status = 404, description = "Route not found", body = ErrorSchema),
        (status = 409, description = "Referenced by attempts or todos", body = ErrorSchema)
    ),
    tags = ["routes"],
    operation_id = "deleteRoute"
)]
#[delete("/routes/{id}")]
pub async fn delete_route(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;
    state.catalogue_commands.delete_route(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error;
    use crate::domain::ports::{MockCatalogueCommand, MockCatalogueQuery};
    use crate::inbound::http::state::HttpStatePorts;
    use crate::inbound::http::test_utils::{call_api, grade, route};
    use actix_web::dev::ServiceResponse;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use uuid::Uuid;

    async fn send(ports: HttpStatePorts, req: actix_test::TestRequest) -> ServiceResponse {
        call_api(
            ports,
            |cfg| {
                cfg.service(list_routes)
                    .service(get_route)
                    .service(create_route)
                    .service(delete_route);
            },
            req.to_request(),
        )
        .await
    }

    #[rstest]
    #[actix_web::test]
    async fn route_grade_is_the_hardest_pitch() {
        let nose = route(
            "The Nose",
            vec![grade(10, "5.10a"), grade(14, "5.12d"), grade(11, "5.10b")],
        );
        let id = nose.id();
        let mut query = MockCatalogueQuery::new();
        query
            .expect_get_route()
            .with(eq(id))
            .times(1)
            .return_once(move |_| Ok(nose));
        let mut ports = HttpStatePorts::fixtures();
        ports.catalogue = Arc::new(query);

        let res = send(
            ports,
            actix_test::TestRequest::get().uri(&format!("/api/v1/routes/{id}")),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: RouteBody = actix_test::read_body_json(res).await;
        assert_eq!(body.display, "The Nose (5.12d)");
        assert_eq!(body.pitches.len(), 3);
        assert_eq!(body.protection_style, "trad");
        assert_eq!(body.difficulty.map(|grade| grade.name).as_deref(), Some("5.12d"));
    }

    #[rstest]
    #[actix_web::test]
    async fn route_without_pitches_is_unrated() {
        let mut query = MockCatalogueQuery::new();
        query
            .expect_list_routes()
            .times(1)
            .return_once(|| Ok(vec![route("Unclimbed Arete", Vec::new())]));
        let mut ports = HttpStatePorts::fixtures();
        ports.catalogue = Arc::new(query);

        let res = send(ports, actix_test::TestRequest::get().uri("/api/v1/routes")).await;

        let body: Value = actix_test::read_body_json(res).await;
        assert!(body[0]["difficulty"].is_null());
        assert_eq!(body[0]["display"], "Unclimbed Arete (unrated)");
    }

    #[rstest]
    #[actix_web::test]
    async fn create_parses_pitches_and_style() {
        let grade_id = Uuid::new_v4();
        let mut commands = MockCatalogueCommand::new();
        commands
            .expect_create_route()
            .withf(move |new| {
                new.protection_style() == ProtectionStyle::Sport
                    && new.pitches().iter().map(|p| p.order).eq([1, 2])
                    && new.pitches().iter().all(|p| p.difficulty_id == grade_id)
            })
            .times(1)
            .return_once(|_| Ok(route("Sprayed", vec![grade(12, "5.11a")])));
        let mut ports = HttpStatePorts::fixtures();
        ports.catalogue_commands = Arc::new(commands);

        let res = send(
            ports,
            actix_test::TestRequest::post().uri("/api/v1/routes").set_json(json!({
                "name": "Sprayed",
                "protectionStyle": "sport",
                "pitches": [
                    {"order": 2, "difficultyId": grade_id.to_string()},
                    {"order": 1, "difficultyId": grade_id.to_string()}
                ]
            })),
        )
        .await;

        assert_eq!(res.status(), StatusCode::CREATED);
    }

    #[rstest]
    #[case(json!({"name": "X", "protectionStyle": "aid"}), "protectionStyle")]
    #[case(
        json!({"name": "X", "protectionStyle": "trad", "pitches": [
            {"order": 1, "difficultyId": "00000000-0000-0000-0000-000000000001"},
            {"order": 1, "difficultyId": "00000000-0000-0000-0000-000000000001"}
        ]}),
        "pitches"
    )]
    #[case(
        json!({"name": "X", "protectionStyle": "trad", "pitches": [
            {"order": 1, "difficultyId": "hard"}
        ]}),
        "pitches.difficultyId"
    )]
    #[actix_web::test]
    async fn invalid_routes_are_rejected(#[case] payload: Value, #[case] field: &str) {
        let res = send(
            HttpStatePorts::fixtures(),
            actix_test::TestRequest::post()
                .uri("/api/v1/routes")
                .set_json(payload),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["details"]["field"], field);
    }

    #[rstest]
    #[actix_web::test]
    async fn referenced_route_cannot_be_deleted() {
        let mut commands = MockCatalogueCommand::new();
        commands
            .expect_delete_route()
            .times(1)
            .return_once(|_| Err(Error::conflict("route is referenced by attempts")));
        let mut ports = HttpStatePorts::fixtures();
        ports.catalogue_commands = Arc::new(commands);

        let res = send(
            ports,
            actix_test::TestRequest::delete().uri(&format!("/api/v1/routes/{}", Uuid::new_v4())),
        )
        .await;

        assert_eq!(res.status(), StatusCode::CONFLICT);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["message"], "route is referenced by attempts");
    }
}
