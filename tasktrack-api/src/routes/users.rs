/// User endpoints
///
/// # Endpoints
///
/// - `POST /api/users/` - Create user (form: username, password)
/// - `GET /api/users/` - List users
/// - `DELETE /api/users/:user_id` - Delete user and their tasks

use crate::{
    app::AppState,
    error::{require_non_empty, ApiResult},
};
use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tasktrack_shared::{
    models::user::{CreateUser, UserRecord},
    schema::User,
};

/// Result envelope for user mutations
#[derive(Debug, Serialize, Deserialize)]
pub struct UserIdResponse {
    /// False when the targeted user does not exist
    pub ok: bool,

    pub user_id: i64,
}

/// Create user
///
/// The password is stored as submitted. There is no login.
///
/// # Endpoint
///
/// ```text
/// POST /api/users/
/// Content-Type: application/x-www-form-urlencoded
///
/// username=alice&password=secret
/// ```
///
/// # Response
///
/// ```json
/// { "ok": true, "user_id": 1 }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Missing username or password
pub async fn create_user(
    State(state): State<AppState>,
    form: Result<Form<CreateUser>, FormRejection>,
) -> ApiResult<Json<UserIdResponse>> {
    let Form(data) = form?;
    require_non_empty("username", &data.username)?;
    require_non_empty("password", &data.password)?;

    let user_id = UserRecord::create(&state.db, data).await?;

    Ok(Json(UserIdResponse { ok: true, user_id }))
}

/// List users
///
/// Returns `[{ "id": 1, "username": "alice" }, ...]` in creation order.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = UserRecord::list(&state.db).await?;
    Ok(Json(users))
}

/// Delete user
///
/// Responds `200` with `ok: false` if the user does not exist.
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<UserIdResponse>> {
    let Path(user_id) = path?;

    let deleted = UserRecord::delete(&state.db, user_id).await?;

    Ok(Json(UserIdResponse {
        ok: deleted,
        user_id,
    }))
}
