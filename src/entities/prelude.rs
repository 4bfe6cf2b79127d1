pub use super::characters::Entity as Characters;
pub use super::franchises::Entity as Franchises;
pub use super::movie_characters::Entity as MovieCharacters;
pub use super::movies::Entity as Movies;
