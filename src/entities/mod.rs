pub mod prelude;

pub mod characters;
pub mod franchises;
pub mod movie_characters;
pub mod movies;
