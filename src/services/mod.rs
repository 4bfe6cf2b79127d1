pub mod associations;
pub use associations::{AssociationManager, ReplaceOutcome};

pub mod resolver;
pub use resolver::QueryResolver;

pub mod character_service;
pub mod character_service_impl;
pub use character_service::CharacterService;
pub use character_service_impl::SeaOrmCharacterService;

pub mod movie_service;
pub mod movie_service_impl;
pub use movie_service::MovieService;
pub use movie_service_impl::SeaOrmMovieService;

pub mod franchise_service;
pub mod franchise_service_impl;
pub use franchise_service::FranchiseService;
pub use franchise_service_impl::SeaOrmFranchiseService;
