use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Franchise {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Movies belonging to this franchise, ascending.
    pub movie_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FranchiseInput {
    pub name: String,
    pub description: Option<String>,
}
