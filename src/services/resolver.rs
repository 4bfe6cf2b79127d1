//! Read views that resolve relationships into entity lists.

use crate::db::Store;
use crate::domain::{CatalogError, EntityKind};
use crate::models::{Character, Movie};

#[derive(Clone)]
pub struct QueryResolver {
    store: Store,
}

impl QueryResolver {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn movies_in_franchise(&self, franchise_id: i32) -> Result<Vec<Movie>, CatalogError> {
        self.store
            .movies_in_franchise(franchise_id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Franchise, franchise_id))
    }

    pub async fn characters_in_movie(&self, movie_id: i32) -> Result<Vec<Character>, CatalogError> {
        self.store
            .characters_in_movie(movie_id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Movie, movie_id))
    }

    /// Union of the casts of every movie in the franchise, one entry per character.
    pub async fn characters_in_franchise(
        &self,
        franchise_id: i32,
    ) -> Result<Vec<Character>, CatalogError> {
        self.store
            .characters_in_franchise(franchise_id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Franchise, franchise_id))
    }
}
