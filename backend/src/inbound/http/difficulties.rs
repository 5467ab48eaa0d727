//! Grade catalogue endpoints for both difficulty scales.
//!
//! ```text
//! GET    /api/v1/difficulties/{scale}
//! POST   /api/v1/difficulties/{scale}
//! DELETE /api/v1/difficulties/{scale}/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Difficulty, DifficultyName, DifficultyScale};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, field_error, parse_code, parse_or_generate_id, parse_order, parse_uuid,
};

/// A grade as exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyBody {
    #[schema(format = "uuid")]
    pub id: String,
    /// Sort key; higher is harder.
    pub order: u16,
    #[schema(example = "5.10a")]
    pub name: String,
}

impl From<&Difficulty> for DifficultyBody {
    fn from(value: &Difficulty) -> Self {
        Self {
            id: value.id().to_string(),
            order: value.order(),
            name: value.name().to_string(),
        }
    }
}

/// Request payload for adding a grade to a scale.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDifficultyRequest {
    /// Generated when absent.
    #[schema(format = "uuid")]
    pub id: Option<String>,
    pub order: i32,
    pub name: String,
}

fn parse_scale(raw: String) -> ApiResult<DifficultyScale> {
    parse_code(raw, FieldName::new("scale"))
}

fn parse_difficulty(payload: CreateDifficultyRequest) -> ApiResult<Difficulty> {
    let id = parse_or_generate_id(payload.id, FieldName::new("id"))?;
    let order = parse_order(payload.order, FieldName::new("order"))?;
    let name =
        DifficultyName::new(payload.name).map_err(|err| field_error(FieldName::new("name"), err))?;
    Difficulty::new(id, order, name).map_err(|err| field_error(FieldName::new("order"), err))
}

/// List the grades of one scale, easiest first.
#[utoipa::path(
    get,
    path = "/api/v1/difficulties/{scale}",
    params(("scale" = String, Path, description = "`boulder` or `route`")),
    responses(
        (status = 200, description = "Grades ordered by sort key", body = [DifficultyBody]),
        (status = 400, description = "Unknown scale", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["difficulties"],
    operation_id = "listDifficulties"
)]
#[get("/difficulties/{scale}")]
pub async fn list_difficulties(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<DifficultyBody>>> {
    let scale = parse_scale(path.into_inner())?;
    let grades = state.catalogue.list_difficulties(scale).await?;
    Ok(web::Json(grades.iter().map(DifficultyBody::from).collect()))
}

/// Add a grade to a scale.
#[utoipa::path(
    post,
    path = "/api/v1/difficulties/{scale}",
    params(("scale" = String, Path, description = "`boulder` or `route`")),
    request_body = CreateDifficultyRequest,
    responses(
        (status = 201, description = "Grade created", body = DifficultyBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Duplicate id", body = ErrorSchema)
    ),
    tags = ["difficulties"],
    operation_id = "createDifficulty"
)]
#[post("/difficulties/{scale}")]
pub async fn create_difficulty(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CreateDifficultyRequest>,
) -> ApiResult<HttpResponse> {
    let scale = parse_scale(path.into_inner())?;
    let difficulty = parse_difficulty(payload.into_inner())?;
    let created = state
        .catalogue_commands
        .create_difficulty(scale, difficulty)
        .await?;
    Ok(HttpResponse::Created().json(DifficultyBody::from(&created)))
}

/// Remove a grade that nothing references.
#[utoipa::path(
    delete,
    path = "/api/v1/difficulties/{scale}/{id}",
    params(
        ("scale" = String, Path, description = "`boulder` or `route`"),
        ("id" = uuid::Uuid, Path, description = "Grade identifier")
    ),
    responses(
        (status = 204, description = "Grade deleted"),
        (status = 404, description = "Grade not found", body = ErrorSchema),
        (status = 409, description = "Grade still in use", body = ErrorSchema)
    ),
    tags = ["difficulties"],
    operation_id = "deleteDifficulty"
)]
#[delete("/difficulties/{scale}/{id}")]
pub async fn delete_difficulty(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (scale, id) = path.into_inner();
    let scale = parse_scale(scale)?;
    let id = parse_uuid(id, FieldName::new("id"))?;
    state.catalogue_commands.delete_difficulty(scale, id).await?;
    Ok(HttpResponse::NoContent().finish())
}
