use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::validation::{validate_character, validate_id};
use super::{ApiError, ApiResponse, AppState, CharacterDto, CharacterRequest};
use crate::domain::CharacterId;

/// List characters.
#[utoipa::path(
    get,
    path = "/api/characters",
    tag = "characters",
    responses(
        (status = 200, description = "All characters ordered by id", body = ApiResponse<Vec<CharacterDto>>)
    )
)]
pub async fn list_characters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<CharacterDto>>>, ApiError> {
    let characters = state.character_service().list().await?;
    let dtos = characters.into_iter().map(CharacterDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// Get a character.
#[utoipa::path(
    get,
    path = "/api/characters/{id}",
    tag = "characters",
    params(("id" = i32, Path, description = "Character id")),
    responses(
        (status = 200, description = "The character", body = ApiResponse<CharacterDto>),
        (status = 400, description = "Id is not positive"),
        (status = 404, description = "No such character")
    )
)]
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CharacterDto>>, ApiError> {
    let id = validate_id("character", id)?;
    let character = state.character_service().get(CharacterId::new(id)).await?;
    Ok(Json(ApiResponse::success(character.into())))
}

/// Create a character.
#[utoipa::path(
    post,
    path = "/api/characters",
    tag = "characters",
    request_body = CharacterRequest,
    responses(
        (status = 201, description = "Character created", body = ApiResponse<CharacterDto>),
        (status = 400, description = "Invalid fields")
    )
)]
pub async fn create_character(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CharacterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CharacterDto>>), ApiError> {
    validate_character(&payload)?;
    let character = state.character_service().create(payload.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(character.into())),
    ))
}

/// Replace a character.
///
/// Full replace: omitted optional fields are cleared.
#[utoipa::path(
    put,
    path = "/api/characters/{id}",
    tag = "characters",
    params(("id" = i32, Path, description = "Character id")),
    request_body = CharacterRequest,
    responses(
        (status = 200, description = "Character replaced", body = ApiResponse<CharacterDto>),
        (status = 400, description = "Invalid fields"),
        (status = 404, description = "No such character")
    )
)]
pub async fn update_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<CharacterRequest>,
) -> Result<Json<ApiResponse<CharacterDto>>, ApiError> {
    let id = validate_id("character", id)?;
    validate_character(&payload)?;
    let character = state
        .character_service()
        .update(CharacterId::new(id), payload.into())
        .await?;
    Ok(Json(ApiResponse::success(character.into())))
}

/// Delete a character.
#[utoipa::path(
    delete,
    path = "/api/characters/{id}",
    tag = "characters",
    params(("id" = i32, Path, description = "Character id")),
    responses(
        (status = 204, description = "Character deleted and removed from every movie"),
        (status = 404, description = "No such character")
    )
)]
pub async fn delete_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let id = validate_id("character", id)?;
    state.character_service().delete(CharacterId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
