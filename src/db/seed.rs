//! Sample catalog used for demos and local development.

use super::Store;
use crate::entities::{characters, franchises, movie_characters, movies, prelude::*};
use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set, TransactionTrait};
use tracing::info;

struct SampleCharacter {
    full_name: &'static str,
    alias: &'static str,
    picture: &'static str,
}

struct SampleMovie {
    title: &'static str,
    genre: &'static str,
    release_year: i32,
    director: &'static str,
    picture: &'static str,
    trailer: &'static str,
    /// Index into the franchise list.
    franchise: usize,
    /// Indexes into the character list.
    cast: &'static [usize],
}

const FRANCHISES: [(&str, &str); 2] = [
    (
        "Marvel Cinematic Universe",
        "Superhero films based on Marvel Comics characters.",
    ),
    (
        "The Lord of the Rings",
        "Epic fantasy films adapted from the novels by J. R. R. Tolkien.",
    ),
];

const CHARACTERS: [SampleCharacter; 7] = [
    SampleCharacter {
        full_name: "Tony Stark",
        alias: "Iron Man",
        picture: "https://example.com/characters/tony-stark.jpg",
    },
    SampleCharacter {
        full_name: "Thor Odinson",
        alias: "God of Thunder",
        picture: "https://example.com/characters/thor.jpg",
    },
    SampleCharacter {
        full_name: "Frodo Baggins",
        alias: "Ring-bearer",
        picture: "https://example.com/characters/frodo.jpg",
    },
    SampleCharacter {
        full_name: "Gandalf",
        alias: "Mithrandir",
        picture: "https://example.com/characters/gandalf.jpg",
    },
    SampleCharacter {
        full_name: "Aragorn",
        alias: "Strider",
        picture: "https://example.com/characters/aragorn.jpg",
    },
    SampleCharacter {
        full_name: "Legolas",
        alias: "Prince of the Woodland Realm",
        picture: "https://example.com/characters/legolas.jpg",
    },
    SampleCharacter {
        full_name: "Samwise Gamgee",
        alias: "Sam",
        picture: "https://example.com/characters/samwise.jpg",
    },
];

const LOTR_CAST: &[usize] = &[2, 3, 4, 5, 6];

const MOVIES: [SampleMovie; 4] = [
    SampleMovie {
        title: "Iron Man",
        genre: "Action, Sci-Fi",
        release_year: 2008,
        director: "Jon Favreau",
        picture: "https://example.com/movies/iron-man.jpg",
        trailer: "https://example.com/trailers/iron-man",
        franchise: 0,
        cast: &[0, 1],
    },
    SampleMovie {
        title: "The Lord of the Rings: The Fellowship of the Ring",
        genre: "Fantasy, Adventure",
        release_year: 2001,
        director: "Peter Jackson",
        picture: "https://example.com/movies/fellowship.jpg",
        trailer: "https://example.com/trailers/fellowship",
        franchise: 1,
        cast: LOTR_CAST,
    },
    SampleMovie {
        title: "The Lord of the Rings: The Two Towers",
        genre: "Fantasy, Adventure",
        release_year: 2002,
        director: "Peter Jackson",
        picture: "https://example.com/movies/two-towers.jpg",
        trailer: "https://example.com/trailers/two-towers",
        franchise: 1,
        cast: LOTR_CAST,
    },
    SampleMovie {
        title: "The Lord of the Rings: The Return of the King",
        genre: "Fantasy, Adventure",
        release_year: 2003,
        director: "Peter Jackson",
        picture: "https://example.com/movies/return-of-the-king.jpg",
        trailer: "https://example.com/trailers/return-of-the-king",
        franchise: 1,
        cast: LOTR_CAST,
    },
];

/// Inserts the sample catalog into an empty database.
///
/// Runs under the write gate in a single transaction, so a failure part way
/// leaves nothing behind. Returns `true` when data was inserted.
pub async fn seed_sample_data(store: &Store) -> Result<bool> {
    let _gate = store.write_gate.lock().await;
    let txn = store.conn.begin().await?;

    let populated = Franchises::find().count(&txn).await? > 0
        || Characters::find().count(&txn).await? > 0
        || Movies::find().count(&txn).await? > 0;
    if populated {
        info!("Catalog is not empty, skipping sample data");
        return Ok(false);
    }

    let mut franchise_ids = Vec::with_capacity(FRANCHISES.len());
    for (name, description) in FRANCHISES {
        let franchise = franchises::ActiveModel {
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        franchise_ids.push(franchise.id);
    }

    let mut character_ids = Vec::with_capacity(CHARACTERS.len());
    for sample in &CHARACTERS {
        let character = characters::ActiveModel {
            full_name: Set(sample.full_name.to_string()),
            alias: Set(Some(sample.alias.to_string())),
            gender: Set("Male".to_string()),
            picture_url: Set(Some(sample.picture.to_string())),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        character_ids.push(character.id);
    }

    for sample in &MOVIES {
        let movie = movies::ActiveModel {
            title: Set(sample.title.to_string()),
            genre: Set(sample.genre.to_string()),
            release_year: Set(sample.release_year),
            director: Set(sample.director.to_string()),
            picture_url: Set(Some(sample.picture.to_string())),
            trailer_url: Set(Some(sample.trailer.to_string())),
            franchise_id: Set(Some(franchise_ids[sample.franchise])),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let cast: Vec<movie_characters::ActiveModel> = sample
            .cast
            .iter()
            .map(|&i| movie_characters::ActiveModel {
                movie_id: Set(movie.id),
                character_id: Set(character_ids[i]),
            })
            .collect();
        MovieCharacters::insert_many(cast).exec(&txn).await?;
    }

    txn.commit().await?;

    info!(
        franchises = FRANCHISES.len(),
        characters = CHARACTERS.len(),
        movies = MOVIES.len(),
        "Seeded sample catalog"
    );

    Ok(true)
}
