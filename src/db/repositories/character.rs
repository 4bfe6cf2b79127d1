use super::links;
use crate::entities::{characters, movie_characters, prelude::*};
use crate::models::{Character, CharacterInput};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

pub struct CharacterRepository {
    conn: DatabaseConnection,
}

impl CharacterRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<Character>> {
        let txn = self.conn.begin().await?;
        let models = Characters::find()
            .order_by_asc(characters::Column::Id)
            .all(&txn)
            .await?;
        let characters = links::characters_with_movies(&txn, models).await?;
        txn.commit().await?;
        Ok(characters)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Character>> {
        let txn = self.conn.begin().await?;
        let Some(model) = Characters::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };
        let character = links::characters_with_movies(&txn, vec![model])
            .await?
            .pop();
        txn.commit().await?;
        Ok(character)
    }

    pub async fn exists(&self, id: i32) -> Result<bool> {
        links::character_exists(&self.conn, id).await
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Characters::find().count(&self.conn).await?)
    }

    pub async fn insert(&self, input: CharacterInput) -> Result<Character> {
        let model = characters::ActiveModel {
            full_name: Set(input.full_name),
            alias: Set(input.alias),
            gender: Set(input.gender),
            picture_url: Set(input.picture_url),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        Ok(links::map_character(model, Vec::new()))
    }

    /// Overwrites every scalar field. Links are untouched.
    pub async fn replace_fields(&self, id: i32, input: CharacterInput) -> Result<Option<Character>> {
        let txn = self.conn.begin().await?;

        if !links::character_exists(&txn, id).await? {
            return Ok(None);
        }

        let model = Characters::update(characters::ActiveModel {
            id: Set(id),
            full_name: Set(input.full_name),
            alias: Set(input.alias),
            gender: Set(input.gender),
            picture_url: Set(input.picture_url),
        })
        .exec(&txn)
        .await?;

        let character = links::characters_with_movies(&txn, vec![model])
            .await?
            .pop();
        txn.commit().await?;
        Ok(character)
    }

    /// Removes the character together with its appearance links.
    ///
    /// Returns `false` when nothing was stored under `id`.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let txn = self.conn.begin().await?;

        MovieCharacters::delete_many()
            .filter(movie_characters::Column::CharacterId.eq(id))
            .exec(&txn)
            .await?;

        let result = Characters::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
