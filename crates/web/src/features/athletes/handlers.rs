use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::{
    athlete::{
        AthleteFilter, AthleteResponse, AthleteSummary, CreateAthleteRequest,
        UpdateAthleteRequest,
    },
    common::{LimitOffsetPage, LimitOffsetParams},
};
use uuid::Uuid;

use crate::error::WebError;
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/athletes",
    params(AthleteFilter, LimitOffsetParams),
    responses(
        (status = 200, description = "Page of athletes matching the filters", body = LimitOffsetPage<AthleteSummary>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "athletes"
)]
pub async fn list_athletes(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<AthleteFilter>,
    QueryParams(page): QueryParams<LimitOffsetParams>,
) -> Result<Response, WebError> {
    let athletes = services::list_athletes(
        state.store(),
        filter,
        page,
        state.settings.max_page_limit,
    )
    .await?;

    Ok(Json(athletes).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete(state.store(), id).await?;

    Ok(Json(athlete).into_response())
}

#[utoipa::path(
    post,
    path = "/api/athletes",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteResponse),
        (status = 400, description = "Validation error or unknown category/training center"),
        (status = 409, description = "An athlete with this cpf already exists")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateAthleteRequest>,
) -> Result<Response, WebError> {
    let athlete = services::create_athlete(state.store(), req).await?;

    Ok((StatusCode::CREATED, Json(athlete)).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    request_body = UpdateAthleteRequest,
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteResponse),
        (status = 400, description = "Validation error or field not updatable"),
        (status = 404, description = "Athlete not found"),
        (status = 409, description = "An athlete with this cpf already exists")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
    JsonBody(update_req): JsonBody<UpdateAthleteRequest>,
) -> Result<Response, WebError> {
    let updated = services::update_athlete(
        state.store(),
        id,
        update_req,
        &state.settings.athlete_mutable_fields,
    )
    .await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 204, description = "Athlete deleted successfully"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn delete_athlete(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Response, WebError> {
    services::delete_athlete(state.store(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
