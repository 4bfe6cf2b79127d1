//! `SeaORM` implementation of the `FranchiseService` trait.

use crate::db::Store;
use crate::domain::{CatalogError, EntityKind, FranchiseId, MovieId, raw_ids};
use crate::models::{Character, Franchise, FranchiseInput, Movie};
use crate::services::associations::{AssociationManager, ReplaceOutcome};
use crate::services::franchise_service::FranchiseService;
use crate::services::resolver::QueryResolver;
use async_trait::async_trait;

pub struct SeaOrmFranchiseService {
    store: Store,
    associations: AssociationManager,
    resolver: QueryResolver,
}

impl SeaOrmFranchiseService {
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
}

#[async_trait]
impl FranchiseService for SeaOrmFranchiseService {
    async fn list(&self) -> Result<Vec<Franchise>, CatalogError> {
        Ok(self.store.list_franchises().await?)
    }

    async fn get(&self, id: FranchiseId) -> Result<Franchise, CatalogError> {
        self.store
            .get_franchise(id.value())
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Franchise, id.value()))
    }

    async fn exists(&self, id: FranchiseId) -> Result<bool, CatalogError> {
        Ok(self.store.franchise_exists(id.value()).await?)
    }

    async fn create(&self, input: FranchiseInput) -> Result<Franchise, CatalogError> {
        let franchise = self.store.insert_franchise(input).await?;
        tracing::info!(franchise_id = franchise.id, "Created franchise");
        Ok(franchise)
    }

    async fn update(
        &self,
        id: FranchiseId,
        input: FranchiseInput,
    ) -> Result<Franchise, CatalogError> {
        self.store
            .replace_franchise(id.value(), input)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Franchise, id.value()))
    }

    async fn delete(&self, id: FranchiseId) -> Result<(), CatalogError> {
        self.associations.delete_franchise(id.value()).await
    }

    async fn replace_movies(
        &self,
        id: FranchiseId,
        movie_ids: &[MovieId],
    ) -> Result<ReplaceOutcome, CatalogError> {
        self.associations
            .replace_franchise_movies(id.value(), &raw_ids(movie_ids))
            .await
    }

    async fn movies(&self, id: FranchiseId) -> Result<Vec<Movie>, CatalogError> {
        self.resolver.movies_in_franchise(id.value()).await
    }

    async fn characters(&self, id: FranchiseId) -> Result<Vec<Character>, CatalogError> {
        self.resolver.characters_in_franchise(id.value()).await
    }
}
