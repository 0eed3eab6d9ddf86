/// Task endpoints
///
/// # Endpoints
///
/// - `POST /api/tasks/` - Create task (form: title, user_id, category_id?, description?)
/// - `GET /api/tasks/` - List tasks, optionally `?category_ids=1&category_ids=2`
/// - `PUT /api/tasks/:task_id` - Partial update (form: title?, description?, category_id?)
/// - `DELETE /api/tasks/:task_id` - Delete task

use crate::{
    app::AppState,
    error::{require_non_empty, ApiError, ApiResult},
};
use axum::{
    extract::{
        rejection::{FormRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tasktrack_shared::{
    models::task::{CreateTask, TaskRecord, UpdateTask},
    schema::Task,
};

/// Query key carrying the category filter; may repeat
pub const CATEGORY_IDS_PARAM: &str = "category_ids";

/// Result envelope for task mutations
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskIdResponse {
    pub ok: bool,
    pub task_id: i64,
}

/// Create task
///
/// # Endpoint
///
/// ```text
/// POST /api/tasks/
/// Content-Type: application/x-www-form-urlencoded
///
/// title=write+spec&user_id=1&category_id=2&description=draft
/// ```
///
/// # Response
///
/// ```json
/// { "ok": true, "task_id": 1 }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Missing or blank title/user_id, non-integer ids
/// - `500 Internal Server Error`: user_id or category_id does not exist
pub async fn create_task(
    State(state): State<AppState>,
    form: Result<Form<CreateTask>, FormRejection>,
) -> ApiResult<Json<TaskIdResponse>> {
    let Form(data) = form?;
    require_non_empty("title", &data.title)?;

    let task_id = TaskRecord::create(&state.db, data).await?;

    Ok(Json(TaskIdResponse { ok: true, task_id }))
}

/// List tasks
///
/// Without `category_ids`, every task is returned. With one or more
/// `category_ids` values, only tasks in those categories are returned.
pub async fn list_tasks(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<Vec<Task>>> {
    let Query(pairs) = query?;
    let category_ids = parse_category_ids(&pairs)?;

    let tasks = TaskRecord::list(&state.db, Some(&category_ids)).await?;

    Ok(Json(tasks))
}

/// Update task
///
/// Only the submitted fields change. A request without a form body is an
/// empty update. Responds `200` with `ok: false` if the task does not exist.
pub async fn update_task(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    form: Result<Form<UpdateTask>, FormRejection>,
) -> ApiResult<Json<TaskIdResponse>> {
    let Path(task_id) = path?;
    let data = match form {
        Ok(Form(data)) => data,
        Err(FormRejection::InvalidFormContentType(_)) => UpdateTask::default(),
        Err(rejection) => return Err(rejection.into()),
    };

    let updated = TaskRecord::update(&state.db, task_id, data).await?;

    Ok(Json(TaskIdResponse {
        ok: updated,
        task_id,
    }))
}

/// Delete task
///
/// Responds `200` with `ok: false` if the task does not exist.
pub async fn delete_task(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<TaskIdResponse>> {
    let Path(task_id) = path?;

    let deleted = TaskRecord::delete(&state.db, task_id).await?;

    Ok(Json(TaskIdResponse {
        ok: deleted,
        task_id,
    }))
}

/// Collects every `category_ids` value from the query string
///
/// Unrelated keys are ignored. An empty result means "no filter".
fn parse_category_ids(pairs: &[(String, String)]) -> ApiResult<Vec<i64>> {
    pairs
        .iter()
        .filter(|(key, _)| key == CATEGORY_IDS_PARAM)
        .map(|(_, value)| {
            value.trim().parse::<i64>().map_err(|_| {
                ApiError::invalid(
                    CATEGORY_IDS_PARAM,
                    format!("'{}' is not a valid integer", value),
                )
            })
        })
        .collect()
}
