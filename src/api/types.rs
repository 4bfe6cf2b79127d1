use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CharacterId, MovieId};
use crate::models::{Character, CharacterInput, Franchise, FranchiseInput, Movie, MovieInput};

/// Envelope shared by every JSON response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub full_name: String,
    pub alias: Option<String>,
    pub gender: String,
    pub picture_url: Option<String>,
    pub movie_ids: Vec<i32>,
}

impl From<Character> for CharacterDto {
    fn from(character: Character) -> Self {
        Self {
            id: character.id,
            full_name: character.full_name,
            alias: character.alias,
            gender: character.gender,
            picture_url: character.picture_url,
            movie_ids: character.movie_ids,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MovieDto {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub director: String,
    pub picture_url: Option<String>,
    pub trailer_url: Option<String>,
    pub franchise_id: Option<i32>,
    pub character_ids: Vec<i32>,
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            genre: movie.genre,
            release_year: movie.release_year,
            director: movie.director,
            picture_url: movie.picture_url,
            trailer_url: movie.trailer_url,
            franchise_id: movie.franchise_id,
            character_ids: movie.character_ids,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FranchiseDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub movie_ids: Vec<i32>,
}

impl From<Franchise> for FranchiseDto {
    fn from(franchise: Franchise) -> Self {
        Self {
            id: franchise.id,
            name: franchise.name,
            description: franchise.description,
            movie_ids: franchise.movie_ids,
        }
    }
}

/// Body of `POST /api/characters` and `PUT /api/characters/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CharacterRequest {
    pub full_name: String,
    pub alias: Option<String>,
    pub gender: String,
    pub picture_url: Option<String>,
}

impl From<CharacterRequest> for CharacterInput {
    fn from(req: CharacterRequest) -> Self {
        Self {
            full_name: req.full_name,
            alias: req.alias,
            gender: req.gender,
            picture_url: req.picture_url,
        }
    }
}

/// Body of `POST /api/movies` and `PUT /api/movies/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MovieRequest {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub director: String,
    pub picture_url: Option<String>,
    pub trailer_url: Option<String>,
    pub franchise_id: Option<i32>,
}

impl From<MovieRequest> for MovieInput {
    fn from(req: MovieRequest) -> Self {
        Self {
            title: req.title,
            genre: req.genre,
            release_year: req.release_year,
            director: req.director,
            picture_url: req.picture_url,
            trailer_url: req.trailer_url,
            franchise_id: req.franchise_id,
        }
    }
}

/// Body of `POST /api/franchises` and `PUT /api/franchises/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FranchiseRequest {
    pub name: String,
    pub description: Option<String>,
}

impl From<FranchiseRequest> for FranchiseInput {
    fn from(req: FranchiseRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Body of `PUT /api/franchises/{id}/movies`. Unknown ids are skipped.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplaceMoviesRequest {
    #[serde(default)]
    #[schema(value_type = Vec<i32>)]
    pub movie_ids: Vec<MovieId>,
}

/// Body of `PUT /api/movies/{id}/characters`. Unknown ids are skipped.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplaceCharactersRequest {
    #[serde(default)]
    #[schema(value_type = Vec<i32>)]
    pub character_ids: Vec<CharacterId>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CatalogCountsDto {
    pub characters: u64,
    pub movies: u64,
    pub franchises: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SystemStatus {
    pub version: String,
    pub uptime: u64,
    pub catalog: CatalogCountsDto,
}
