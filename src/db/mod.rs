use crate::domain::relations::ReplacePlan;
use crate::models::{Character, CharacterInput, Franchise, FranchiseInput, Movie, MovieInput};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;

pub mod migrator;
pub mod repositories;
pub mod seed;

pub use repositories::movie::MovieWriteOutcome;

/// Row counts reported by the status endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub characters: u64,
    pub movies: u64,
    pub franchises: u64,
}

/// Entity store over a SQLite pool.
///
/// Every mutation holds `write_gate` for its whole transaction, so writers
/// are serialized inside the process and readers never observe a half
/// applied bulk replace.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
    write_gate: Arc<Mutex<()>>,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url
                .trim_start_matches("sqlite://")
                .trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self {
            conn,
            write_gate: Arc::new(Mutex::new(())),
        })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn character_repo(&self) -> repositories::character::CharacterRepository {
        repositories::character::CharacterRepository::new(self.conn.clone())
    }

    fn movie_repo(&self) -> repositories::movie::MovieRepository {
        repositories::movie::MovieRepository::new(self.conn.clone())
    }

    fn franchise_repo(&self) -> repositories::franchise::FranchiseRepository {
        repositories::franchise::FranchiseRepository::new(self.conn.clone())
    }

    pub async fn counts(&self) -> Result<CatalogCounts> {
        Ok(CatalogCounts {
            characters: self.character_repo().count().await?,
            movies: self.movie_repo().count().await?,
            franchises: self.franchise_repo().count().await?,
        })
    }

    // Characters

    pub async fn list_characters(&self) -> Result<Vec<Character>> {
        self.character_repo().list().await
    }

    pub async fn get_character(&self, id: i32) -> Result<Option<Character>> {
        self.character_repo().get(id).await
    }

    pub async fn character_exists(&self, id: i32) -> Result<bool> {
        self.character_repo().exists(id).await
    }

    pub async fn insert_character(&self, input: CharacterInput) -> Result<Character> {
        let _gate = self.write_gate.lock().await;
        self.character_repo().insert(input).await
    }

    pub async fn replace_character(
        &self,
        id: i32,
        input: CharacterInput,
    ) -> Result<Option<Character>> {
        let _gate = self.write_gate.lock().await;
        self.character_repo().replace_fields(id, input).await
    }

    pub async fn delete_character(&self, id: i32) -> Result<bool> {
        let _gate = self.write_gate.lock().await;
        self.character_repo().delete(id).await
    }

    // Movies

    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        self.movie_repo().list().await
    }

    pub async fn get_movie(&self, id: i32) -> Result<Option<Movie>> {
        self.movie_repo().get(id).await
    }

    pub async fn movie_exists(&self, id: i32) -> Result<bool> {
        self.movie_repo().exists(id).await
    }

    pub async fn insert_movie(&self, input: MovieInput) -> Result<MovieWriteOutcome> {
        let _gate = self.write_gate.lock().await;
        self.movie_repo().insert(input).await
    }

    pub async fn replace_movie(&self, id: i32, input: MovieInput) -> Result<MovieWriteOutcome> {
        let _gate = self.write_gate.lock().await;
        self.movie_repo().replace_fields(id, input).await
    }

    pub async fn delete_movie(&self, id: i32) -> Result<bool> {
        let _gate = self.write_gate.lock().await;
        self.movie_repo().delete(id).await
    }

    pub async fn replace_movie_characters(
        &self,
        movie_id: i32,
        character_ids: &[i32],
    ) -> Result<Option<ReplacePlan>> {
        let _gate = self.write_gate.lock().await;
        self.movie_repo()
            .replace_characters(movie_id, character_ids)
            .await
    }

    pub async fn characters_in_movie(&self, movie_id: i32) -> Result<Option<Vec<Character>>> {
        self.movie_repo().characters_of(movie_id).await
    }

    // Franchises

    pub async fn list_franchises(&self) -> Result<Vec<Franchise>> {
        self.franchise_repo().list().await
    }

    pub async fn get_franchise(&self, id: i32) -> Result<Option<Franchise>> {
        self.franchise_repo().get(id).await
    }

    pub async fn franchise_exists(&self, id: i32) -> Result<bool> {
        self.franchise_repo().exists(id).await
    }

    pub async fn insert_franchise(&self, input: FranchiseInput) -> Result<Franchise> {
        let _gate = self.write_gate.lock().await;
        self.franchise_repo().insert(input).await
    }

    pub async fn replace_franchise(
        &self,
        id: i32,
        input: FranchiseInput,
    ) -> Result<Option<Franchise>> {
        let _gate = self.write_gate.lock().await;
        self.franchise_repo().replace_fields(id, input).await
    }

    pub async fn delete_franchise(&self, id: i32) -> Result<bool> {
        let _gate = self.write_gate.lock().await;
        self.franchise_repo().delete(id).await
    }

    pub async fn replace_franchise_movies(
        &self,
        franchise_id: i32,
        movie_ids: &[i32],
    ) -> Result<Option<ReplacePlan>> {
        let _gate = self.write_gate.lock().await;
        self.franchise_repo()
            .replace_movies(franchise_id, movie_ids)
            .await
    }

    pub async fn movies_in_franchise(&self, franchise_id: i32) -> Result<Option<Vec<Movie>>> {
        self.franchise_repo().movies_of(franchise_id).await
    }

    pub async fn characters_in_franchise(
        &self,
        franchise_id: i32,
    ) -> Result<Option<Vec<Character>>> {
        self.franchise_repo().characters_of(franchise_id).await
    }
}
