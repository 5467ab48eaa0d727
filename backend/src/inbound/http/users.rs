//! User registration endpoints.
//!
//! ```text
//! POST   /api/v1/users {"displayName":"Lynn Hill"}
//! DELETE /api/v1/users/{id}
//! ```
//!
//! There is no authentication; users exist so attempts and todos have an
//! owner, and deleting one removes everything they logged.

use actix_web::{HttpResponse, delete, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DisplayName, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, field_error, parse_or_generate_id, parse_uuid};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(example = "Lynn Hill")]
    pub display_name: String,
}

impl From<&User> for UserBody {
    fn from(value: &User) -> Self {
        Self {
            id: value.id().to_string(),
            display_name: value.display_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[schema(format = "uuid")]
    pub id: Option<String>,
    /// 3 to 32 letters, digits, spaces or underscores.
    pub display_name: String,
}

impl TryFrom<CreateUserRequest> for User {
    type Error = crate::domain::Error;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        let id = parse_or_generate_id(value.id, FieldName::new("id"))?;
        let display_name = DisplayName::new(value.display_name)
            .map_err(|err| field_error(FieldName::new("displayName"), err))?;
        Ok(User::new(UserId::from_uuid(id), display_name))
    }
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Duplicate id", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = User::try_from(payload.into_inner())?;
    let created = state.climbing_log_commands.register_user(user).await?;
    Ok(HttpResponse::Created().json(UserBody::from(&created)))
}

/// Delete a user together with their attempts and todos.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = uuid::Uuid, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User and log deleted"),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = UserId::from_uuid(parse_uuid(path.into_inner(), FieldName::new("id"))?);
    state.climbing_log_commands.remove_user(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockClimbingLogCommand;
    use crate::inbound::http::state::HttpStatePorts;
    use crate::inbound::http::test_utils::call_api;
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
                cfg.service(create_user).service(delete_user);
            },
            req.to_request(),
        )
        .await
    }

    #[rstest]
    #[actix_web::test]
    async fn registers_user_with_supplied_id() {
        let id = Uuid::new_v4();
        let res = send(
            HttpStatePorts::fixtures(),
            actix_test::TestRequest::post()
                .uri("/api/v1/users")
                .set_json(json!({"id": id.to_string(), "displayName": "Lynn Hill"})),
        )
        .await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body: UserBody = actix_test::read_body_json(res).await;
        assert_eq!(body.id, id.to_string());
        assert_eq!(body.display_name, "Lynn Hill");
    }

    #[rstest]
    #[case("ab")]
    #[case("no-hyphens")]
    #[actix_web::test]
    async fn invalid_display_names_are_rejected(#[case] name: &str) {
        let res = send(
            HttpStatePorts::fixtures(),
            actix_test::TestRequest::post()
                .uri("/api/v1/users")
                .set_json(json!({"displayName": name})),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["details"]["field"], "displayName");
    }

    #[rstest]
    #[actix_web::test]
    async fn deleting_a_user_returns_no_content() {
        let id = Uuid::new_v4();
        let mut commands = MockClimbingLogCommand::new();
        commands
            .expect_remove_user()
            .with(eq(UserId::from_uuid(id)))
            .times(1)
            .return_once(|_| Ok(()));
        let mut ports = HttpStatePorts::fixtures();
        ports.climbing_log_commands = Arc::new(commands);

        let res = send(
            ports,
            actix_test::TestRequest::delete().uri(&format!("/api/v1/users/{id}")),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }

    #[rstest]
    #[actix_web::test]
    async fn deleting_an_unknown_user_is_not_found() {
        let res = send(
            HttpStatePorts::fixtures(),
            actix_test::TestRequest::delete().uri(&format!("/api/v1/users/{}", Uuid::new_v4())),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
