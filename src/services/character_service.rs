//! Domain service for characters.

use crate::domain::{CatalogError, CharacterId};
use crate::models::{Character, CharacterInput};

/// Domain service trait for characters.
#[async_trait::async_trait]
pub trait CharacterService: Send + Sync {
    /// Lists every character, ascending by id.
    async fn list(&self) -> Result<Vec<Character>, CatalogError>;

    async fn get(&self, id: CharacterId) -> Result<Character, CatalogError>;

    async fn exists(&self, id: CharacterId) -> Result<bool, CatalogError>;

    async fn create(&self, input: CharacterInput) -> Result<Character, CatalogError>;

    /// Replaces every editable field. Movie links are kept.
    async fn update(
        &self,
        id: CharacterId,
        input: CharacterInput,
    ) -> Result<Character, CatalogError>;

    /// Deletes the character and removes it from every movie.
    async fn delete(&self, id: CharacterId) -> Result<(), CatalogError>;
}
