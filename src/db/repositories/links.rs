//! Helpers shared by the repositories.
//!
//! Everything here is generic over [`ConnectionTrait`] so it can run on the
//! pool or inside an open transaction.

use crate::domain::relations::group_links;
use crate::entities::{characters, franchises, movie_characters, movies, prelude::*};
use crate::models::{Character, Movie};
use anyhow::Result;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};

pub async fn character_exists<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool> {
    let count = Characters::find()
        .filter(characters::Column::Id.eq(id))
        .count(conn)
        .await?;
    Ok(count > 0)
}

pub async fn movie_exists<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool> {
    let count = Movies::find()
        .filter(movies::Column::Id.eq(id))
        .count(conn)
        .await?;
    Ok(count > 0)
}

pub async fn franchise_exists<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool> {
    let count = Franchises::find()
        .filter(franchises::Column::Id.eq(id))
        .count(conn)
        .await?;
    Ok(count > 0)
}

/// The subset of `ids` that are stored characters.
pub async fn existing_character_ids<C: ConnectionTrait>(conn: &C, ids: &[i32]) -> Result<Vec<i32>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let found: Vec<i32> = Characters::find()
        .select_only()
        .column(characters::Column::Id)
        .filter(characters::Column::Id.is_in(ids.iter().copied()))
        .into_tuple()
        .all(conn)
        .await?;
    Ok(found)
}

/// The subset of `ids` that are stored movies.
pub async fn existing_movie_ids<C: ConnectionTrait>(conn: &C, ids: &[i32]) -> Result<Vec<i32>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let found: Vec<i32> = Movies::find()
        .select_only()
        .column(movies::Column::Id)
        .filter(movies::Column::Id.is_in(ids.iter().copied()))
        .into_tuple()
        .all(conn)
        .await?;
    Ok(found)
}

/// `(movie_id, character_id)` rows touching any of the given movies.
pub async fn links_for_movies<C: ConnectionTrait>(
    conn: &C,
    movie_ids: &[i32],
) -> Result<Vec<(i32, i32)>> {
    if movie_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows = MovieCharacters::find()
        .filter(movie_characters::Column::MovieId.is_in(movie_ids.iter().copied()))
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|r| (r.movie_id, r.character_id)).collect())
}

/// `(movie_id, character_id)` rows touching any of the given characters.
pub async fn links_for_characters<C: ConnectionTrait>(
    conn: &C,
    character_ids: &[i32],
) -> Result<Vec<(i32, i32)>> {
    if character_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows = MovieCharacters::find()
        .filter(movie_characters::Column::CharacterId.is_in(character_ids.iter().copied()))
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|r| (r.movie_id, r.character_id)).collect())
}

pub fn map_character(model: characters::Model, movie_ids: Vec<i32>) -> Character {
    Character {
        id: model.id,
        full_name: model.full_name,
        alias: model.alias,
        gender: model.gender,
        picture_url: model.picture_url,
        movie_ids,
    }
}

pub fn map_movie(model: movies::Model, character_ids: Vec<i32>) -> Movie {
    Movie {
        id: model.id,
        title: model.title,
        genre: model.genre,
        release_year: model.release_year,
        director: model.director,
        picture_url: model.picture_url,
        trailer_url: model.trailer_url,
        franchise_id: model.franchise_id,
        character_ids,
    }
}

/// Resolves each character's movie id list with a single link query.
pub async fn characters_with_movies<C: ConnectionTrait>(
    conn: &C,
    models: Vec<characters::Model>,
) -> Result<Vec<Character>> {
    let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
    let links = links_for_characters(conn, &ids).await?;
    let mut by_character = group_links(links.into_iter().map(|(movie, character)| (character, movie)));

    Ok(models
        .into_iter()
        .map(|model| {
            let movie_ids = by_character.remove(&model.id).unwrap_or_default();
            map_character(model, movie_ids)
        })
        .collect())
}

/// Resolves each movie's character id list with a single link query.
pub async fn movies_with_characters<C: ConnectionTrait>(
    conn: &C,
    models: Vec<movies::Model>,
) -> Result<Vec<Movie>> {
    let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
    let mut by_movie = group_links(links_for_movies(conn, &ids).await?);

    Ok(models
        .into_iter()
        .map(|model| {
            let character_ids = by_movie.remove(&model.id).unwrap_or_default();
            map_movie(model, character_ids)
        })
        .collect())
}
