/// Category endpoints
///
/// # Endpoints
///
/// - `POST /api/categories/` - Create category (form: name)
/// - `GET /api/categories/` - List categories
/// - `DELETE /api/categories/:category_id` - Delete category

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
    models::category::{CategoryRecord, CreateCategory},
    schema::Category,
};

/// Result envelope for category mutations
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryIdResponse {
    pub ok: bool,
    pub category_id: i64,
}

/// Create category
///
/// ```text
/// POST /api/categories/
/// Content-Type: application/x-www-form-urlencoded
///
/// name=work
/// ```
pub async fn create_category(
    State(state): State<AppState>,
    form: Result<Form<CreateCategory>, FormRejection>,
) -> ApiResult<Json<CategoryIdResponse>> {
    let Form(data) = form?;
    require_non_empty("name", &data.name)?;

    let category_id = CategoryRecord::create(&state.db, data).await?;

    Ok(Json(CategoryIdResponse {
        ok: true,
        category_id,
    }))
}

pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    let categories = CategoryRecord::list(&state.db).await?;
    Ok(Json(categories))
}

/// Delete category
///
/// Tasks in the category are kept with `category_id` cleared. Responds
/// `200` with `ok: false` if the category does not exist.
pub async fn delete_category(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<CategoryIdResponse>> {
    let Path(category_id) = path?;

    let deleted = CategoryRecord::delete(&state.db, category_id).await?;

    Ok(Json(CategoryIdResponse {
        ok: deleted,
        category_id,
    }))
}
