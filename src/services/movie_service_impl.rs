//! `SeaORM` implementation of the `MovieService` trait.

use crate::db::{MovieWriteOutcome, Store};
use crate::domain::{CatalogError, CharacterId, EntityKind, MovieId, raw_ids};
use crate::models::{Character, Movie, MovieInput};
use crate::services::associations::{AssociationManager, ReplaceOutcome};
use crate::services::movie_service::MovieService;
use crate::services::resolver::QueryResolver;
use async_trait::async_trait;

pub struct SeaOrmMovieService {
    store: Store,
    associations: AssociationManager,
    resolver: QueryResolver,
}

impl SeaOrmMovieService {
    #[must_use]
    pub const fn new(
        store: Store,
        associations: AssociationManager,
        resolver: QueryResolver,
    ) -> Self {
        Self {
            store,
            associations,
            resolver,
        }
    }

    fn saved(outcome: MovieWriteOutcome, id: i32) -> Result<Movie, CatalogError> {
        match outcome {
            MovieWriteOutcome::Saved(movie) => Ok(movie),
            MovieWriteOutcome::MovieNotFound => {
                Err(CatalogError::not_found(EntityKind::Movie, id))
            }
            MovieWriteOutcome::FranchiseNotFound(franchise_id) => Err(CatalogError::not_found(
                EntityKind::Franchise,
                franchise_id,
            )),
        }
    }
}

#[async_trait]
impl MovieService for SeaOrmMovieService {
    async fn list(&self) -> Result<Vec<Movie>, CatalogError> {
        Ok(self.store.list_movies().await?)
    }

    async fn get(&self, id: MovieId) -> Result<Movie, CatalogError> {
        self.store
            .get_movie(id.value())
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Movie, id.value()))
    }

    async fn exists(&self, id: MovieId) -> Result<bool, CatalogError> {
        Ok(self.store.movie_exists(id.value()).await?)
    }

    async fn create(&self, input: MovieInput) -> Result<Movie, CatalogError> {
        let outcome = self.store.insert_movie(input).await?;
        let movie = Self::saved(outcome, 0)?;
        tracing::info!(movie_id = movie.id, franchise_id = ?movie.franchise_id, "Created movie");
        Ok(movie)
    }

    async fn update(&self, id: MovieId, input: MovieInput) -> Result<Movie, CatalogError> {
        let outcome = self.store.replace_movie(id.value(), input).await?;
        Self::saved(outcome, id.value())
    }

    async fn delete(&self, id: MovieId) -> Result<(), CatalogError> {
        self.associations.delete_movie(id.value()).await
    }

    async fn replace_characters(
        &self,
        id: MovieId,
        character_ids: &[CharacterId],
    ) -> Result<ReplaceOutcome, CatalogError> {
        self.associations
            .replace_movie_characters(id.value(), &raw_ids(character_ids))
            .await
    }

    async fn characters(&self, id: MovieId) -> Result<Vec<Character>, CatalogError> {
        self.resolver.characters_in_movie(id.value()).await
    }
}
