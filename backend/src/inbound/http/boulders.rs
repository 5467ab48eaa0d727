//! Boulder problem endpoints.
//!
//! ```text
//! GET    /api/v1/boulders
//! GET    /api/v1/boulders/{id}
//! POST   /api/v1/boulders
//! DELETE /api/v1/boulders/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Boulder, ClimbName, MountainProjectUrl, NewBoulder};
use crate::inbound::http::ApiResult;
use crate::inbound::http::difficulties::DifficultyBody;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, field_error, parse_optional_uuid, parse_or_generate_id, parse_uuid,
};

/// A boulder problem with its grade resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoulderBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(example = "Midnight Lightning")]
    pub name: String,
    #[schema(format = "uuid")]
    pub area_id: Option<String>,
    /// `null` when unrated.
    pub difficulty: Option<DifficultyBody>,
    #[schema(format = "uri")]
    pub mountainproject: Option<String>,
    /// Human-readable label, e.g. `Midnight Lightning (V8)`.
    #[schema(example = "Midnight Lightning (V8)")]
    pub display: String,
}

impl From<&Boulder> for BoulderBody {
    fn from(value: &Boulder) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_string(),
            area_id: value.area_id().map(|id| id.to_string()),
            difficulty: value.difficulty().map(DifficultyBody::from),
            mountainproject: value.mountainproject().map(|url| url.as_str().to_owned()),
            display: value.to_string(),
        }
    }
}

/// Request payload for adding a boulder.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoulderRequest {
    /// Generated when absent.
    #[schema(format = "uuid")]
    pub id: Option<String>,
    pub name: String,
    #[schema(format = "uuid")]
    pub area_id: Option<String>,
    /// Grade from the boulder scale; omit for unrated.
    #[schema(format = "uuid")]
    pub difficulty_id: Option<String>,
    #[schema(format = "uri")]
    pub mountainproject: Option<String>,
}

/// Parse a climb name shared by boulder and route payloads.
pub(crate) fn parse_climb_name(raw: String) -> ApiResult<ClimbName> {
    ClimbName::new(raw).map_err(|err| field_error(FieldName::new("name"), err))
}

pub(crate) fn parse_mountainproject(raw: Option<String>) -> ApiResult<Option<MountainProjectUrl>> {
    raw.map(|url| {
        MountainProjectUrl::parse(&url)
            .map_err(|err| field_error(FieldName::new("mountainproject"), err))
    })
    .transpose()
}

fn parse_new_boulder(payload: CreateBoulderRequest) -> ApiResult<NewBoulder> {
    Ok(NewBoulder {
        id: parse_or_generate_id(payload.id, FieldName::new("id"))?,
        name: parse_climb_name(payload.name)?,
        area_id: parse_optional_uuid(payload.area_id, FieldName::new("areaId"))?,
        difficulty_id: parse_optional_uuid(payload.difficulty_id, FieldName::new("difficultyId"))?,
        mountainproject: parse_mountainproject(payload.mountainproject)?,
    })
}

/// List every boulder ordered by name.
#[utoipa::path(
    get,
    path = "/api/v1/boulders",
    responses(
        (status = 200, description = "Boulders", body = [BoulderBody]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["boulders"],
    operation_id = "listBoulders"
)]
#[get("/boulders")]
pub async fn list_boulders(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BoulderBody>>> {
    let boulders = state.catalogue.list_boulders().await?;
    Ok(web::Json(boulders.iter().map(BoulderBody::from).collect()))
}

/// Fetch one boulder.
#[utoipa::path(
    get,
    path = "/api/v1/boulders/{id}",
    params(("id" = uuid::Uuid, Path, description = "Boulder identifier")),
    responses(
        (status = 200, description = "Boulder", body = BoulderBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Boulder not found", body = ErrorSchema)
    ),
    tags = ["boulders"],
    operation_id = "getBoulder"
)]
#[get("/boulders/{id}")]
pub async fn get_boulder(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<BoulderBody>> {
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;
    let boulder = state.catalogue.get_boulder(id).await?;
    Ok(web::Json(BoulderBody::from(&boulder)))
}

/// Add a boulder.
#[utoipa::path(
    post,
    path = "/api/v1/boulders",
    request_body = CreateBoulderRequest,
    responses(
        (status = 201, description = "Boulder created", body = BoulderBody),
        (status = 400, description = "Invalid request or unknown grade/area", body = ErrorSchema),
        (status = 409, description = "Duplicate id", body = ErrorSchema)
    ),
    tags = ["boulders"],
    operation_id = "createBoulder"
)]
#[post("/boulders")]
pub async fn create_boulder(
    state: web::Data<HttpState>,
    payload: web::Json<CreateBoulderRequest>,
) -> ApiResult<HttpResponse> {
    let boulder = parse_new_boulder(payload.into_inner())?;
    let created = state.catalogue_commands.create_boulder(boulder).await?;
    Ok(HttpResponse::Created().json(BoulderBody::from(&created)))
}

/// Remove a boulder nobody has logged.
#[utoipa::path(
    delete,
    path = "/api/v1/boulders/{id}",
    params(("id" = uuid::Uuid, Path, description = "Boulder identifier")),
    responses(
        (status = 204, description = "Boulder deleted"),
        (status = 404, description = "Boulder not found", body = ErrorSchema),
        (status = 409, description = "Referenced by attempts or todos", body = ErrorSchema)
    ),
    tags = ["boulders"],
    operation_id = "deleteBoulder"
)]
#[delete("/boulders/{id}")]
pub async fn delete_boulder(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;
    state.catalogue_commands.delete_boulder(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
