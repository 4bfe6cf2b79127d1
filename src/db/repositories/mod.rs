pub mod character;
pub mod franchise;
pub mod links;
pub mod movie;
