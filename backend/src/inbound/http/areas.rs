//! Area endpoints: browsing the area tree and maintaining it.
//!
//! ```text
//! GET    /api/v1/areas
//! GET    /api/v1/areas/{id}
//! POST   /api/v1/areas
//! DELETE /api/v1/areas/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Area, AreaDetail, AreaName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::boulders::BoulderBody;
use crate::inbound::http::routes::RouteBody;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, field_error, parse_optional_uuid, parse_or_generate_id, parse_uuid,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AreaBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(example = "Camp 4")]
    pub name: String,
    /// `null` for top-level areas.
    #[schema(format = "uuid")]
    pub parent_id: Option<String>,
}

impl From<&Area> for AreaBody {
    fn from(value: &Area) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_string(),
            parent_id: value.parent_id().map(|id| id.to_string()),
        }
    }
}

/// An area with the areas and climbs placed directly inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AreaDetailBody {
    #[serde(flatten)]
    pub area: AreaBody,
    pub children: Vec<AreaBody>,
    pub boulders: Vec<BoulderBody>,
    pub routes: Vec<RouteBody>,
}

impl From<&AreaDetail> for AreaDetailBody {
    fn from(value: &AreaDetail) -> Self {
        Self {
            area: AreaBody::from(&value.area),
            children: value.children.iter().map(AreaBody::from).collect(),
            boulders: value.boulders.iter().map(BoulderBody::from).collect(),
            routes: value.routes.iter().map(RouteBody::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAreaRequest {
    #[schema(format = "uuid")]
    pub id: Option<String>,
    pub name: String,
    #[schema(format = "uuid")]
    pub parent_id: Option<String>,
}

fn parse_area(payload: CreateAreaRequest) -> ApiResult<Area> {
    let id = parse_or_generate_id(payload.id, FieldName::new("id"))?;
    let name = AreaName::new(payload.name).map_err(|err| field_error(FieldName::new("name"), err))?;
    let parent_id = parse_optional_uuid(payload.parent_id, FieldName::new("parentId"))?;
    Area::new(id, name, parent_id).map_err(|err| field_error(FieldName::new("parentId"), err))
}

/// List top-level areas ordered by name.
#[utoipa::path(
    get,
    path = "/api/v1/areas",
    responses(
        (status = 200, description = "Areas without a parent", body = [AreaBody]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["areas"],
    operation_id = "listAreas"
)]
#[get("/areas")]
pub async fn list_areas(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<AreaBody>>> {
    let areas = state.catalogue.list_top_level_areas().await?;
    Ok(web::Json(areas.iter().map(AreaBody::from).collect()))
}

/// Fetch one area with its children and climbs.
#[utoipa::path(
    get,
    path = "/api/v1/areas/{id}",
    params(("id" = uuid::Uuid, Path, description = "Area identifier")),
    responses(
        (status = 200, description = "Area detail", body = AreaDetailBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Area not found", body = ErrorSchema)
    ),
    tags = ["areas"],
    operation_id = "getArea"
)]
#[get("/areas/{id}")]
pub async fn get_area(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<AreaDetailBody>> {
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;
    let detail = state.catalogue.area_detail(id).await?;
    Ok(web::Json(AreaDetailBody::from(&detail)))
}

/// Add an area, optionally nested under a parent.
#[utoipa::path(
    post,
    path = "/api/v1/areas",
    request_body = CreateAreaRequest,
    responses(
        (status = 201, description = "Area created", body = AreaBody),
        (status = 400, description = "Invalid request or unknown parent", body = ErrorSchema),
        (status = 409, description = "Duplicate id", body = ErrorSchema)
    ),
    tags = ["areas"],
    operation_id = "createArea"
)]
#[post("/areas")]
pub async fn create_area(
    state: web::Data<HttpState>,
    payload: web::Json<CreateAreaRequest>,
) -> ApiResult<HttpResponse> {
    let area = parse_area(payload.into_inner())?;
    let created = state.catalogue_commands.create_area(area).await?;
    Ok(HttpResponse::Created().json(AreaBody::from(&created)))
}

/// Remove an empty area.
#[utoipa::path(
    delete,
    path = "/api/v1/areas/{id}",
    params(("id" = uuid::Uuid, Path, description = "Area identifier")),
    responses(
        (status = 204, description = "Area deleted"),
        (status = 404, description = "Area not found", body = ErrorSchema),
        (status = 409, description = "Area still holds areas or climbs", body = ErrorSchema)
    ),
    tags = ["areas"],
    operation_id = "deleteArea"
)]
#[delete("/areas/{id}")]
pub async fn delete_area(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;
    state.catalogue_commands.delete_area(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
