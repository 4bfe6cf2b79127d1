use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::validation::{validate_franchise, validate_id};
use super::{
    ApiError, ApiResponse, AppState, CharacterDto, FranchiseDto, FranchiseRequest, MovieDto,
    ReplaceMoviesRequest,
};
use crate::domain::FranchiseId;

/// List franchises.
#[utoipa::path(
    get,
    path = "/api/franchises",
    tag = "franchises",
    responses(
        (status = 200, description = "All franchises ordered by id", body = ApiResponse<Vec<FranchiseDto>>)
    )
)]
pub async fn list_franchises(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<FranchiseDto>>>, ApiError> {
    let franchises = state.franchise_service().list().await?;
    let dtos = franchises.into_iter().map(FranchiseDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// Get a franchise.
#[utoipa::path(
    get,
    path = "/api/franchises/{id}",
    tag = "franchises",
    params(("id" = i32, Path, description = "Franchise id")),
    responses(
        (status = 200, description = "The franchise", body = ApiResponse<FranchiseDto>),
        (status = 400, description = "Id is not positive"),
        (status = 404, description = "No such franchise")
    )
)]
pub async fn get_franchise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<FranchiseDto>>, ApiError> {
    let id = validate_id("franchise", id)?;
    let franchise = state.franchise_service().get(FranchiseId::new(id)).await?;
    Ok(Json(ApiResponse::success(franchise.into())))
}

/// Create a franchise.
#[utoipa::path(
    post,
    path = "/api/franchises",
    tag = "franchises",
    request_body = FranchiseRequest,
    responses(
        (status = 201, description = "Franchise created", body = ApiResponse<FranchiseDto>),
        (status = 400, description = "Invalid fields")
    )
)]
pub async fn create_franchise(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<FranchiseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FranchiseDto>>), ApiError> {
    validate_franchise(&payload)?;
    let franchise = state.franchise_service().create(payload.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(franchise.into())),
    ))
}

/// Replace a franchise.
#[utoipa::path(
    put,
    path = "/api/franchises/{id}",
    tag = "franchises",
    params(("id" = i32, Path, description = "Franchise id")),
    request_body = FranchiseRequest,
    responses(
        (status = 200, description = "Franchise replaced", body = ApiResponse<FranchiseDto>),
        (status = 400, description = "Invalid fields"),
        (status = 404, description = "No such franchise")
    )
)]
pub async fn update_franchise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<FranchiseRequest>,
) -> Result<Json<ApiResponse<FranchiseDto>>, ApiError> {
    let id = validate_id("franchise", id)?;
    validate_franchise(&payload)?;
    let franchise = state
        .franchise_service()
        .update(FranchiseId::new(id), payload.into())
        .await?;
    Ok(Json(ApiResponse::success(franchise.into())))
}

/// Delete a franchise.
///
/// Member movies are kept and lose their franchise.
#[utoipa::path(
    delete,
    path = "/api/franchises/{id}",
    tag = "franchises",
    params(("id" = i32, Path, description = "Franchise id")),
    responses(
        (status = 204, description = "Franchise deleted, its movies kept"),
        (status = 404, description = "No such franchise")
    )
)]
pub async fn delete_franchise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let id = validate_id("franchise", id)?;
    state.franchise_service().delete(FranchiseId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Replace a franchise's movies.
#[utoipa::path(
    put,
    path = "/api/franchises/{id}/movies",
    tag = "franchises",
    params(("id" = i32, Path, description = "Franchise id")),
    request_body = ReplaceMoviesRequest,
    responses(
        (status = 204, description = "Movie set replaced by the existing subset of the ids"),
        (status = 404, description = "No such franchise")
    )
)]
pub async fn replace_franchise_movies(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<ReplaceMoviesRequest>,
) -> Result<StatusCode, ApiError> {
    let id = validate_id("franchise", id)?;
    state
        .franchise_service()
        .replace_movies(FranchiseId::new(id), &payload.movie_ids)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List a franchise's movies.
#[utoipa::path(
    get,
    path = "/api/franchises/{id}/movies",
    tag = "franchises",
    params(("id" = i32, Path, description = "Franchise id")),
    responses(
        (status = 200, description = "Member movies ordered by id", body = ApiResponse<Vec<MovieDto>>),
        (status = 404, description = "No such franchise")
    )
)]
pub async fn list_franchise_movies(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<MovieDto>>>, ApiError> {
    let id = validate_id("franchise", id)?;
    let movies = state.franchise_service().movies(FranchiseId::new(id)).await?;
    let dtos = movies.into_iter().map(MovieDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// List a franchise's characters.
///
/// Characters from every member movie, each listed once.
#[utoipa::path(
    get,
    path = "/api/franchises/{id}/characters",
    tag = "franchises",
    params(("id" = i32, Path, description = "Franchise id")),
    responses(
        (status = 200, description = "Characters of every member movie, each once", body = ApiResponse<Vec<CharacterDto>>),
        (status = 404, description = "No such franchise")
    )
)]
pub async fn list_franchise_characters(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<CharacterDto>>>, ApiError> {
    let id = validate_id("franchise", id)?;
    let characters = state
        .franchise_service()
        .characters(FranchiseId::new(id))
        .await?;
    let dtos = characters.into_iter().map(CharacterDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}
