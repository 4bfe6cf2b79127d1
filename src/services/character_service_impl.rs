//! `SeaORM` implementation of the `CharacterService` trait.

use crate::db::Store;
use crate::domain::{CatalogError, CharacterId, EntityKind};
use crate::models::{Character, CharacterInput};
use crate::services::associations::AssociationManager;
use crate::services::character_service::CharacterService;
use async_trait::async_trait;

pub struct SeaOrmCharacterService {
    store: Store,
    associations: AssociationManager,
}

impl SeaOrmCharacterService {
    #[must_use]
    pub const fn new(store: Store, associations: AssociationManager) -> Self {
        Self {
            store,
            associations,
        }
    }
}

#[async_trait]
impl CharacterService for SeaOrmCharacterService {
    async fn list(&self) -> Result<Vec<Character>, CatalogError> {
        Ok(self.store.list_characters().await?)
    }

    async fn get(&self, id: CharacterId) -> Result<Character, CatalogError> {
        self.store
            .get_character(id.value())
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Character, id.value()))
    }

    async fn exists(&self, id: CharacterId) -> Result<bool, CatalogError> {
        Ok(self.store.character_exists(id.value()).await?)
    }

    async fn create(&self, input: CharacterInput) -> Result<Character, CatalogError> {
        let character = self.store.insert_character(input).await?;
        tracing::info!(character_id = character.id, "Created character");
        Ok(character)
    }

    async fn update(
        &self,
        id: CharacterId,
        input: CharacterInput,
    ) -> Result<Character, CatalogError> {
        self.store
            .replace_character(id.value(), input)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Character, id.value()))
    }

    async fn delete(&self, id: CharacterId) -> Result<(), CatalogError> {
        self.associations.delete_character(id.value()).await
    }
}
