use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::training_center::{CreateTrainingCenterRequest, TrainingCenterResponse};
use uuid::Uuid;

use crate::error::WebError;
use crate::extract::{JsonBody, PathParam};
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/training-centers",
    responses(
        (status = 200, description = "List all training centers successfully", body = Vec<TrainingCenterResponse>)
    ),
    tag = "training-centers"
)]
pub async fn list_training_centers(State(state): State<AppState>) -> Result<Response, WebError> {
    let centers = services::list_training_centers(state.store()).await?;

    Ok(Json(centers).into_response())
}

#[utoipa::path(
    get,
    path = "/api/training-centers/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center id")
    ),
    responses(
        (status = 200, description = "Training center found", body = TrainingCenterResponse),
        (status = 404, description = "Training center not found")
    ),
    tag = "training-centers"
)]
pub async fn get_training_center(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Response, WebError> {
    let center = services::get_training_center(state.store(), id).await?;

    Ok(Json(center).into_response())
}

#[utoipa::path(
    post,
    path = "/api/training-centers",
    request_body = CreateTrainingCenterRequest,
    responses(
        (status = 201, description = "Training center created successfully", body = TrainingCenterResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Training center name already exists")
    ),
    tag = "training-centers"
)]
pub async fn create_training_center(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateTrainingCenterRequest>,
) -> Result<Response, WebError> {
    let center = services::create_training_center(state.store(), req).await?;

    Ok((StatusCode::CREATED, Json(center)).into_response())
}
