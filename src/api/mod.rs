use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::{CharacterService, FranchiseService, MovieService};
use crate::state::SharedState;

mod characters;
mod error;
mod franchises;
mod movies;
mod observability;
pub mod openapi;
mod system;
mod types;
pub mod validation;

pub use error::ApiError;
pub use openapi::ApiDoc;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<RwLock<Config>> {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn character_service(&self) -> &Arc<dyn CharacterService> {
        &self.shared.character_service
    }

    #[must_use]
    pub fn movie_service(&self) -> &Arc<dyn MovieService> {
        &self.shared.movie_service
    }

    #[must_use]
    pub fn franchise_service(&self) -> &Arc<dyn FranchiseService> {
        &self.shared.franchise_service
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub async fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().read().await.server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .merge(catalog_routes())
        .route("/system/health/live", get(system::health_live))
        .route("/system/health/ready", get(system::health_ready))
        .route("/system/status", get(system::get_status))
        .route("/metrics", get(observability::get_metrics))
        .route("/openapi.json", get(openapi::get_openapi))
        .route_layer(middleware::from_fn(observability::logging_middleware))
        .with_state(state);

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

fn catalog_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/characters",
            get(characters::list_characters).post(characters::create_character),
        )
        .route(
            "/characters/{id}",
            get(characters::get_character)
                .put(characters::update_character)
                .delete(characters::delete_character),
        )
        .route(
            "/movies",
            get(movies::list_movies).post(movies::create_movie),
        )
        .route(
            "/movies/{id}",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
        .route(
            "/movies/{id}/characters",
            get(movies::list_movie_characters).put(movies::replace_movie_characters),
        )
        .route(
            "/franchises",
            get(franchises::list_franchises).post(franchises::create_franchise),
        )
        .route(
            "/franchises/{id}",
            get(franchises::get_franchise)
                .put(franchises::update_franchise)
                .delete(franchises::delete_franchise),
        )
        .route(
            "/franchises/{id}/movies",
            get(franchises::list_franchise_movies).put(franchises::replace_franchise_movies),
        )
        .route(
            "/franchises/{id}/characters",
            get(franchises::list_franchise_characters),
        )
}
