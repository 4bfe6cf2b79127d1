use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: i32,
    pub full_name: String,
    pub alias: Option<String>,
    pub gender: String,
    pub picture_url: Option<String>,
    /// Movies this character appears in, ascending.
    pub movie_ids: Vec<i32>,
}

/// Every editable field of a character. Updates overwrite all of them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterInput {
    pub full_name: String,
    pub alias: Option<String>,
    pub gender: String,
    pub picture_url: Option<String>,
}
