//! OpenAPI description of the HTTP API, served at `GET /api/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use super::{characters, franchises, movies, observability, system};
use super::{
    CatalogCountsDto, CharacterDto, CharacterRequest, FranchiseDto, FranchiseRequest, MovieDto,
    MovieRequest, ReplaceCharactersRequest, ReplaceMoviesRequest, SystemStatus,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "cinedex",
        description = "Catalog of characters, movies and franchises with their relationships."
    ),
    paths(
        characters::list_characters,
        characters::get_character,
        characters::create_character,
        characters::update_character,
        characters::delete_character,
        movies::list_movies,
        movies::get_movie,
        movies::create_movie,
        movies::update_movie,
        movies::delete_movie,
        movies::replace_movie_characters,
        movies::list_movie_characters,
        franchises::list_franchises,
        franchises::get_franchise,
        franchises::create_franchise,
        franchises::update_franchise,
        franchises::delete_franchise,
        franchises::replace_franchise_movies,
        franchises::list_franchise_movies,
        franchises::list_franchise_characters,
        system::get_status,
        system::health_live,
        system::health_ready,
        observability::get_metrics,
    ),
    components(schemas(
        CharacterDto,
        MovieDto,
        FranchiseDto,
        CharacterRequest,
        MovieRequest,
        FranchiseRequest,
        ReplaceMoviesRequest,
        ReplaceCharactersRequest,
        CatalogCountsDto,
        SystemStatus,
    )),
    tags(
        (name = "characters", description = "Character records and their movies"),
        (name = "movies", description = "Movie records and their casts"),
        (name = "franchises", description = "Franchises, their movies and characters"),
        (name = "system", description = "Health, status and metrics"),
    )
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document.
pub async fn get_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
