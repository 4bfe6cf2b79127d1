//! Domain service for franchises.

use crate::domain::{CatalogError, FranchiseId, MovieId};
use crate::models::{Character, Franchise, FranchiseInput, Movie};
use crate::services::associations::ReplaceOutcome;

/// Domain service trait for franchises.
#[async_trait::async_trait]
pub trait FranchiseService: Send + Sync {
    /// Lists every franchise, ascending by id.
    async fn list(&self) -> Result<Vec<Franchise>, CatalogError>;

    async fn get(&self, id: FranchiseId) -> Result<Franchise, CatalogError>;

    async fn exists(&self, id: FranchiseId) -> Result<bool, CatalogError>;

    async fn create(&self, input: FranchiseInput) -> Result<Franchise, CatalogError>;

    async fn update(
        &self,
        id: FranchiseId,
        input: FranchiseInput,
    ) -> Result<Franchise, CatalogError>;

    /// Deletes the franchise. Member movies survive with no franchise.
    async fn delete(&self, id: FranchiseId) -> Result<(), CatalogError>;

    /// Makes the existing subset of `movie_ids` the full member set.
    async fn replace_movies(
        &self,
        id: FranchiseId,
        movie_ids: &[MovieId],
    ) -> Result<ReplaceOutcome, CatalogError>;

    async fn movies(&self, id: FranchiseId) -> Result<Vec<Movie>, CatalogError>;

    /// Characters from every member movie, deduplicated.
    async fn characters(&self, id: FranchiseId) -> Result<Vec<Character>, CatalogError>;
}
