//! Domain service for movies and their casts.

use crate::domain::{CatalogError, CharacterId, MovieId};
use crate::models::{Character, Movie, MovieInput};
use crate::services::associations::ReplaceOutcome;

/// Domain service trait for movies.
#[async_trait::async_trait]
pub trait MovieService: Send + Sync {
    /// Lists every movie, ascending by id.
    async fn list(&self) -> Result<Vec<Movie>, CatalogError>;

    async fn get(&self, id: MovieId) -> Result<Movie, CatalogError>;

    async fn exists(&self, id: MovieId) -> Result<bool, CatalogError>;

    /// Creates a movie. Fails with `NotFound` if the franchise reference
    /// does not resolve.
    async fn create(&self, input: MovieInput) -> Result<Movie, CatalogError>;

    /// Replaces every editable field, the franchise reference included.
    async fn update(&self, id: MovieId, input: MovieInput) -> Result<Movie, CatalogError>;

    async fn delete(&self, id: MovieId) -> Result<(), CatalogError>;

    /// Replaces the cast. Unknown character ids are skipped.
    async fn replace_characters(
        &self,
        id: MovieId,
        character_ids: &[CharacterId],
    ) -> Result<ReplaceOutcome, CatalogError>;

    async fn characters(&self, id: MovieId) -> Result<Vec<Character>, CatalogError>;
}
