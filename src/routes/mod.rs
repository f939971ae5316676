use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::game::actor_client::GameClient;

mod game;
mod health;
mod metrics;

pub fn create_router(config: &Config) -> Router<Arc<GameClient>> {
    Router::new()
        .route("/health", get(health::get))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/subcategories", get(game::subcategories))
        .route("/guess", post(game::guess))
        .route("/hint", get(game::hint))
        .route("/reset", post(game::reset))
        .route("/show", get(game::show))
        .layer(if config.allow_cors {
            log::info!("CorsLayer Permissive");
            CorsLayer::permissive()
        } else {
            CorsLayer::default()
        })
}
