use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::validation::{validate_id, validate_movie};
use super::{
    ApiError, ApiResponse, AppState, CharacterDto, MovieDto, MovieRequest,
    ReplaceCharactersRequest,
};
use crate::domain::MovieId;

/// List movies.
#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "movies",
    responses(
        (status = 200, description = "All movies ordered by id", body = ApiResponse<Vec<MovieDto>>)
    )
)]
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<MovieDto>>>, ApiError> {
    let movies = state.movie_service().list().await?;
    let dtos = movies.into_iter().map(MovieDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// Get a movie.
#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    tag = "movies",
    params(("id" = i32, Path, description = "Movie id")),
    responses(
        (status = 200, description = "The movie", body = ApiResponse<MovieDto>),
        (status = 400, description = "Id is not positive"),
        (status = 404, description = "No such movie")
    )
)]
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MovieDto>>, ApiError> {
    let id = validate_id("movie", id)?;
    let movie = state.movie_service().get(MovieId::new(id)).await?;
    Ok(Json(ApiResponse::success(movie.into())))
}

/// Create a movie.
///
/// A `franchise_id` that does not resolve yields 404.
#[utoipa::path(
    post,
    path = "/api/movies",
    tag = "movies",
    request_body = MovieRequest,
    responses(
        (status = 201, description = "Movie created", body = ApiResponse<MovieDto>),
        (status = 400, description = "Invalid fields"),
        (status = 404, description = "Referenced franchise does not exist")
    )
)]
pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MovieRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MovieDto>>), ApiError> {
    validate_movie(&payload)?;
    let movie = state.movie_service().create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(movie.into()))))
}

/// Replace a movie.
#[utoipa::path(
    put,
    path = "/api/movies/{id}",
    tag = "movies",
    params(("id" = i32, Path, description = "Movie id")),
    request_body = MovieRequest,
    responses(
        (status = 200, description = "Movie replaced", body = ApiResponse<MovieDto>),
        (status = 400, description = "Invalid fields"),
        (status = 404, description = "No such movie or franchise")
    )
)]
pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<MovieRequest>,
) -> Result<Json<ApiResponse<MovieDto>>, ApiError> {
    let id = validate_id("movie", id)?;
    validate_movie(&payload)?;
    let movie = state
        .movie_service()
        .update(MovieId::new(id), payload.into())
        .await?;
    Ok(Json(ApiResponse::success(movie.into())))
}

/// Delete a movie.
#[utoipa::path(
    delete,
    path = "/api/movies/{id}",
    tag = "movies",
    params(("id" = i32, Path, description = "Movie id")),
    responses(
        (status = 204, description = "Movie and its character links deleted"),
        (status = 404, description = "No such movie")
    )
)]
pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let id = validate_id("movie", id)?;
    state.movie_service().delete(MovieId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Replace a movie's cast.
///
/// Replaces the whole cast. Ids that match no character are skipped.
#[utoipa::path(
    put,
    path = "/api/movies/{id}/characters",
    tag = "movies",
    params(("id" = i32, Path, description = "Movie id")),
    request_body = ReplaceCharactersRequest,
    responses(
        (status = 204, description = "Cast replaced by the existing subset of the ids"),
        (status = 404, description = "No such movie")
    )
)]
pub async fn replace_movie_characters(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<ReplaceCharactersRequest>,
) -> Result<StatusCode, ApiError> {
    let id = validate_id("movie", id)?;
    state
        .movie_service()
        .replace_characters(MovieId::new(id), &payload.character_ids)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List a movie's cast.
#[utoipa::path(
    get,
    path = "/api/movies/{id}/characters",
    tag = "movies",
    params(("id" = i32, Path, description = "Movie id")),
    responses(
        (status = 200, description = "The cast ordered by id", body = ApiResponse<Vec<CharacterDto>>),
        (status = 404, description = "No such movie")
    )
)]
pub async fn list_movie_characters(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<CharacterDto>>>, ApiError> {
    let id = validate_id("movie", id)?;
    let characters = state.movie_service().characters(MovieId::new(id)).await?;
    let dtos = characters.into_iter().map(CharacterDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}
