//! Todo list endpoints.
//!
//! ```text
//! GET  /api/v1/todos?user=<uuid>
//! POST /api/v1/todos
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Protection, Todo, TodoDraft, TodoEntry, TodoStyle, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::attempts::{UserFilter, parse_climb};
use crate::inbound::http::difficulties::DifficultyBody;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_code, parse_or_generate_id, parse_uuid};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(format = "uuid")]
    pub user_id: String,
    pub notes: String,
    /// Intended protection: `none`, `bolts`, `gear`, `pad` or `tr`.
    pub protection: String,
    #[schema(format = "uuid")]
    pub boulder_id: Option<String>,
    #[schema(format = "uuid")]
    pub route_id: Option<String>,
    /// `onsight`, `flash`, `project` or `other`.
    #[schema(example = "project")]
    pub style: String,
}

impl From<&Todo> for TodoBody {
    fn from(value: &Todo) -> Self {
        let climb = value.climb();
        Self {
            id: value.id().to_string(),
            user_id: value.user_id().to_string(),
            notes: value.notes().to_owned(),
            protection: value.protection().to_string(),
            boulder_id: climb.boulder_id().map(|id| id.to_string()),
            route_id: climb.route_id().map(|id| id.to_string()),
            style: value.style().to_string(),
        }
    }
}

/// A todo together with the name and grade of the climb it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoEntryBody {
    #[serde(flatten)]
    pub todo: TodoBody,
    #[schema(example = "Midnight Lightning")]
    pub climb_name: String,
    /// Climb grade; `null` when unrated.
    pub difficulty: Option<DifficultyBody>,
    #[schema(example = "project Midnight Lightning (V8)")]
    pub display: String,
}

impl From<&TodoEntry> for TodoEntryBody {
    fn from(value: &TodoEntry) -> Self {
        Self {
            todo: TodoBody::from(value.todo()),
            climb_name: value.climb_name().to_string(),
            difficulty: value.difficulty().map(DifficultyBody::from),
            display: value.to_string(),
        }
    }
}

/// Request payload for adding a todo.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[schema(format = "uuid")]
    pub id: Option<String>,
    #[schema(format = "uuid")]
    pub user_id: String,
    #[serde(default)]
    pub notes: String,
    pub protection: String,
    /// Exactly one of `boulderId` and `routeId` must be set.
    #[schema(format = "uuid")]
    pub boulder_id: Option<String>,
    #[schema(format = "uuid")]
    pub route_id: Option<String>,
    pub style: String,
}

fn parse_todo(payload: CreateTodoRequest) -> ApiResult<Todo> {
    Ok(Todo::new(TodoDraft {
        id: parse_or_generate_id(payload.id, FieldName::new("id"))?,
        user_id: UserId::from_uuid(parse_uuid(payload.user_id, FieldName::new("userId"))?),
        notes: payload.notes,
        protection: parse_code::<Protection>(payload.protection, FieldName::new("protection"))?,
        climb: parse_climb(payload.boulder_id, payload.route_id)?,
        style: parse_code::<TodoStyle>(payload.style, FieldName::new("style"))?,
    }))
}

/// List todos: route todos by route name, then boulder todos by boulder name.
#[utoipa::path(
    get,
    path = "/api/v1/todos",
    params(UserFilter),
    responses(
        (status = 200, description = "Todos", body = [TodoEntryBody]),
        (status = 400, description = "Invalid user filter", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "listTodos"
)]
#[get("/todos")]
pub async fn list_todos(
    state: web::Data<HttpState>,
    query: web::Query<UserFilter>,
) -> ApiResult<web::Json<Vec<TodoEntryBody>>> {
    let user = query.into_inner().parse()?;
    let todos = state.climbing_log.list_todos(user).await?;
    Ok(web::Json(todos.iter().map(TodoEntryBody::from).collect()))
}

/// Add a climb to a user's todo list.
#[utoipa::path(
    post,
    path = "/api/v1/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo added", body = TodoBody),
        (status = 400, description = "Invalid request or unknown user/climb", body = ErrorSchema),
        (status = 409, description = "Duplicate id", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "createTodo"
)]
#[post("/todos")]
pub async fn create_todo(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTodoRequest>,
) -> ApiResult<HttpResponse> {
    let todo = parse_todo(payload.into_inner())?;
    let added = state.climbing_log_commands.add_todo(todo).await?;
    Ok(HttpResponse::Created().json(TodoBody::from(&added)))
}
