//! Attempt log endpoints.
//!
//! ```text
//! GET  /api/v1/attempts?user=<uuid>
//! POST /api/v1/attempts
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    Attempt, AttemptDraft, AttemptResult, ClimbRef, Protection, UserId, xor,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, exactly_one_climb_error, parse_code, parse_date, parse_optional_uuid,
    parse_or_generate_id, parse_uuid,
};

/// Optional owner filter shared by the log listings.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserFilter {
    /// Only return entries owned by this user.
    pub user: Option<String>,
}

impl UserFilter {
    pub(crate) fn parse(self) -> ApiResult<Option<UserId>> {
        Ok(parse_optional_uuid(self.user, FieldName::new("user"))?.map(UserId::from_uuid))
    }
}

/// Resolve the `boulderId`/`routeId` pair into exactly one climb.
pub(crate) fn parse_climb(
    boulder_id: Option<String>,
    route_id: Option<String>,
) -> ApiResult<ClimbRef> {
    if !xor(boulder_id.is_some(), route_id.is_some()) {
        return Err(exactly_one_climb_error());
    }
    let boulder_id = parse_optional_uuid(boulder_id, FieldName::new("boulderId"))?;
    let route_id = parse_optional_uuid(route_id, FieldName::new("routeId"))?;
    ClimbRef::from_columns(boulder_id, route_id).map_err(|_| exactly_one_climb_error())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttemptBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(format = "uuid")]
    pub user_id: String,
    #[schema(format = "date", example = "2024-05-18")]
    pub date: String,
    pub notes: String,
    /// Set when the attempt was on a boulder; `routeId` is then `null`.
    #[schema(format = "uuid")]
    pub boulder_id: Option<String>,
    #[schema(format = "uuid")]
    pub route_id: Option<String>,
    /// `send` or `fall`.
    #[schema(example = "fall")]
    pub result: String,
    pub prior_knowledge: bool,
    /// `none`, `bolts`, `gear`, `pad` or `tr`.
    #[schema(example = "pad")]
    pub protection_used: String,
}

impl From<&Attempt> for AttemptBody {
    fn from(value: &Attempt) -> Self {
        let climb = value.climb();
        Self {
            id: value.id().to_string(),
            user_id: value.user_id().to_string(),
            date: value.date().format("%Y-%m-%d").to_string(),
            notes: value.notes().to_owned(),
            boulder_id: climb.boulder_id().map(|id| id.to_string()),
            route_id: climb.route_id().map(|id| id.to_string()),
            result: value.result().to_string(),
            prior_knowledge: value.prior_knowledge(),
            protection_used: value.protection_used().to_string(),
        }
    }
}

const fn default_prior_knowledge() -> bool {
    true
}

/// Request payload for logging an attempt.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttemptRequest {
    #[schema(format = "uuid")]
    pub id: Option<String>,
    #[schema(format = "uuid")]
    pub user_id: String,
    #[schema(format = "date")]
    pub date: String,
    #[serde(default)]
    pub notes: String,
    /// Exactly one of `boulderId` and `routeId` must be set.
    #[schema(format = "uuid")]
    pub boulder_id: Option<String>,
    #[schema(format = "uuid")]
    pub route_id: Option<String>,
    pub result: String,
    /// Defaults to `true`.
    #[serde(default = "default_prior_knowledge")]
    pub prior_knowledge: bool,
    pub protection_used: String,
}

fn parse_attempt(payload: CreateAttemptRequest) -> ApiResult<Attempt> {
    Ok(Attempt::new(AttemptDraft {
        id: parse_or_generate_id(payload.id, FieldName::new("id"))?,
        user_id: UserId::from_uuid(parse_uuid(payload.user_id, FieldName::new("userId"))?),
        date: parse_date(payload.date, FieldName::new("date"))?,
        notes: payload.notes,
        climb: parse_climb(payload.boulder_id, payload.route_id)?,
        result: parse_code::<AttemptResult>(payload.result, FieldName::new("result"))?,
        prior_knowledge: payload.prior_knowledge,
        protection_used: parse_code::<Protection>(
            payload.protection_used,
            FieldName::new("protectionUsed"),
        )?,
    }))
}

/// List attempts ordered by date.
#[utoipa::path(
    get,
    path = "/api/v1/attempts",
    params(UserFilter),
    responses(
        (status = 200, description = "Attempts", body = [AttemptBody]),
        (status = 400, description = "Invalid user filter", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["attempts"],
    operation_id = "listAttempts"
)]
#[get("/attempts")]
pub async fn list_attempts(
    state: web::Data<HttpState>,
    query: web::Query<UserFilter>,
) -> ApiResult<web::Json<Vec<AttemptBody>>> {
    let user = query.into_inner().parse()?;
    let attempts = state.climbing_log.list_attempts(user).await?;
    Ok(web::Json(attempts.iter().map(AttemptBody::from).collect()))
}

/// Log an attempt on a boulder or a route.
#[utoipa::path(
    post,
    path = "/api/v1/attempts",
    request_body = CreateAttemptRequest,
    responses(
        (status = 201, description = "Attempt recorded", body = AttemptBody),
        (status = 400, description = "Invalid request or unknown user/climb", body = ErrorSchema),
        (status = 409, description = "Duplicate id", body = ErrorSchema)
    ),
    tags = ["attempts"],
    operation_id = "createAttempt"
)]
#[post("/attempts")]
pub async fn create_attempt(
    state: web::Data<HttpState>,
    payload: web::Json<CreateAttemptRequest>,
) -> ApiResult<HttpResponse> {
    let attempt = parse_attempt(payload.into_inner())?;
    let recorded = state.climbing_log_commands.record_attempt(attempt).await?;
    Ok(HttpResponse::Created().json(AttemptBody::from(&recorded)))
}
