use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AssociationManager, CharacterService, FranchiseService, MovieService, QueryResolver,
    SeaOrmCharacterService, SeaOrmFranchiseService, SeaOrmMovieService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub associations: AssociationManager,

    pub resolver: QueryResolver,

    pub character_service: Arc<dyn CharacterService>,

    pub movie_service: Arc<dyn MovieService>,

    pub franchise_service: Arc<dyn FranchiseService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    /// Wires the services around an already connected store.
    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let associations = AssociationManager::new(store.clone());
        let resolver = QueryResolver::new(store.clone());

        let character_service = Arc::new(SeaOrmCharacterService::new(
            store.clone(),
            associations.clone(),
        )) as Arc<dyn CharacterService + Send + Sync + 'static>;

        let movie_service = Arc::new(SeaOrmMovieService::new(
            store.clone(),
            associations.clone(),
            resolver.clone(),
        )) as Arc<dyn MovieService + Send + Sync + 'static>;

        let franchise_service = Arc::new(SeaOrmFranchiseService::new(
            store.clone(),
            associations.clone(),
            resolver.clone(),
        )) as Arc<dyn FranchiseService + Send + Sync + 'static>;

        Self {
            config: Arc::new(RwLock::new(config)),
            store,
            associations,
            resolver,
            character_service,
            movie_service,
            franchise_service,
        }
    }
}
