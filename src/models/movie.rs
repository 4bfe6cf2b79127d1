use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub director: String,
    pub picture_url: Option<String>,
    pub trailer_url: Option<String>,
    pub franchise_id: Option<i32>,
    /// Characters appearing in this movie, ascending.
    pub character_ids: Vec<i32>,
}

/// Every editable field of a movie, including the franchise reference.
///
/// A `None` franchise on update detaches the movie from its franchise.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MovieInput {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub director: String,
    pub picture_url: Option<String>,
    pub trailer_url: Option<String>,
    pub franchise_id: Option<i32>,
}
