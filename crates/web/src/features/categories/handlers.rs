use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::category::{CategoryResponse, CreateCategoryRequest};
use uuid::Uuid;

use crate::error::WebError;
use crate::extract::{JsonBody, PathParam};
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List all categories successfully", body = Vec<CategoryResponse>)
    ),
    tag = "categories"
)]
pub async fn list_categories(State(state): State<AppState>) -> Result<Response, WebError> {
    let categories = services::list_categories(state.store()).await?;

    Ok(Json(categories).into_response())
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Response, WebError> {
    let category = services::get_category(state.store(), id).await?;

    Ok(Json(category).into_response())
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created successfully", body = CategoryResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Category name already exists")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateCategoryRequest>,
) -> Result<Response, WebError> {
    let category = services::create_category(state.store(), req).await?;

    Ok((StatusCode::CREATED, Json(category)).into_response())
}
