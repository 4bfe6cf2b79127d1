pub mod character;
pub mod franchise;
pub mod movie;

pub use character::{Character, CharacterInput};
pub use franchise::{Franchise, FranchiseInput};
pub use movie::{Movie, MovieInput};
