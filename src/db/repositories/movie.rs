use super::links;
use crate::domain::relations::{ReplacePlan, plan_replace};
use crate::entities::{characters, movie_characters, movies, prelude::*};
use crate::models::{Character, Movie, MovieInput};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

/// Result of a movie insert or field replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieWriteOutcome {
    Saved(Movie),
    MovieNotFound,
    /// The referenced franchise does not exist.
    FranchiseNotFound(i32),
}

pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<Movie>> {
        let txn = self.conn.begin().await?;
        let models = Movies::find()
            .order_by_asc(movies::Column::Id)
            .all(&txn)
            .await?;
        let movies = links::movies_with_characters(&txn, models).await?;
        txn.commit().await?;
        Ok(movies)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Movie>> {
        let txn = self.conn.begin().await?;
        let Some(model) = Movies::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };
        let movie = links::movies_with_characters(&txn, vec![model]).await?.pop();
        txn.commit().await?;
        Ok(movie)
    }

    pub async fn exists(&self, id: i32) -> Result<bool> {
        links::movie_exists(&self.conn, id).await
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Movies::find().count(&self.conn).await?)
    }

    pub async fn insert(&self, input: MovieInput) -> Result<MovieWriteOutcome> {
        let txn = self.conn.begin().await?;

        if let Some(franchise_id) = input.franchise_id
            && !links::franchise_exists(&txn, franchise_id).await?
        {
            return Ok(MovieWriteOutcome::FranchiseNotFound(franchise_id));
        }

        let model = movies::ActiveModel {
            title: Set(input.title),
            genre: Set(input.genre),
            release_year: Set(input.release_year),
            director: Set(input.director),
            picture_url: Set(input.picture_url),
            trailer_url: Set(input.trailer_url),
            franchise_id: Set(input.franchise_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(MovieWriteOutcome::Saved(links::map_movie(model, Vec::new())))
    }

    /// Overwrites every scalar field, the franchise reference included.
    /// Character links are untouched.
    pub async fn replace_fields(&self, id: i32, input: MovieInput) -> Result<MovieWriteOutcome> {
        let txn = self.conn.begin().await?;

        if !links::movie_exists(&txn, id).await? {
            return Ok(MovieWriteOutcome::MovieNotFound);
        }

        if let Some(franchise_id) = input.franchise_id
            && !links::franchise_exists(&txn, franchise_id).await?
        {
            return Ok(MovieWriteOutcome::FranchiseNotFound(franchise_id));
        }

        let model = Movies::update(movies::ActiveModel {
            id: Set(id),
            title: Set(input.title),
            genre: Set(input.genre),
            release_year: Set(input.release_year),
            director: Set(input.director),
            picture_url: Set(input.picture_url),
            trailer_url: Set(input.trailer_url),
            franchise_id: Set(input.franchise_id),
        })
        .exec(&txn)
        .await?;

        let movie = links::movies_with_characters(&txn, vec![model]).await?.pop();
        txn.commit().await?;

        Ok(movie.map_or(MovieWriteOutcome::MovieNotFound, MovieWriteOutcome::Saved))
    }

    /// Removes the movie and its cast links. Characters survive.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let txn = self.conn.begin().await?;

        MovieCharacters::delete_many()
            .filter(movie_characters::Column::MovieId.eq(id))
            .exec(&txn)
            .await?;

        let result = Movies::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }

    /// Replaces the movie's cast with the existing subset of `character_ids`.
    ///
    /// Returns `None` when the movie does not exist; nothing is written then.
    pub async fn replace_characters(
        &self,
        movie_id: i32,
        character_ids: &[i32],
    ) -> Result<Option<ReplacePlan>> {
        let txn = self.conn.begin().await?;

        if !links::movie_exists(&txn, movie_id).await? {
            return Ok(None);
        }

        let current: Vec<i32> = links::links_for_movies(&txn, &[movie_id])
            .await?
            .into_iter()
            .map(|(_, character_id)| character_id)
            .collect();
        let existing = links::existing_character_ids(&txn, character_ids).await?;
        let plan = plan_replace(&current, character_ids, &existing);

        if !plan.detach.is_empty() {
            MovieCharacters::delete_many()
                .filter(movie_characters::Column::MovieId.eq(movie_id))
                .filter(movie_characters::Column::CharacterId.is_in(plan.detach.iter().copied()))
                .exec(&txn)
                .await?;
        }

        if !plan.attach.is_empty() {
            let rows: Vec<movie_characters::ActiveModel> = plan
                .attach
                .iter()
                .map(|&character_id| movie_characters::ActiveModel {
                    movie_id: Set(movie_id),
                    character_id: Set(character_id),
                })
                .collect();

            MovieCharacters::insert_many(rows).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(Some(plan))
    }

    /// The movie's cast ordered by id, or `None` for an unknown movie.
    pub async fn characters_of(&self, movie_id: i32) -> Result<Option<Vec<Character>>> {
        let txn = self.conn.begin().await?;

        if !links::movie_exists(&txn, movie_id).await? {
            return Ok(None);
        }

        let character_ids: Vec<i32> = links::links_for_movies(&txn, &[movie_id])
            .await?
            .into_iter()
            .map(|(_, character_id)| character_id)
            .collect();

        let models = if character_ids.is_empty() {
            Vec::new()
        } else {
            Characters::find()
                .filter(characters::Column::Id.is_in(character_ids))
                .order_by_asc(characters::Column::Id)
                .all(&txn)
                .await?
        };

        let characters = links::characters_with_movies(&txn, models).await?;
        txn.commit().await?;
        Ok(Some(characters))
    }
}
