// src/lib.rs

use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;

/// Shared state handed to every handler. Built once at startup and injected
/// through the router so tests can substitute a mock database.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub mod entities {
    pub mod prelude;

    pub mod calculations;
}

pub mod services {
    pub mod calculator;
    pub mod recorder;
}

pub mod models {
    pub mod calculation;
}

pub mod handlers {
    pub mod calculate;
}

pub mod middleware;

/// Build the calculator router: one GET route per operation, wrapped in the
/// activity-logging middleware and a permissive CORS layer.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/add", get(handlers::calculate::add))
        .route("/subtract", get(handlers::calculate::subtract))
        .route("/multiply", get(handlers::calculate::multiply))
        .route("/divide", get(handlers::calculate::divide))
        .route("/power", get(handlers::calculate::power))
        .route("/modulo", get(handlers::calculate::modulo))
        .route("/sqrt", get(handlers::calculate::sqrt))
        .layer(axum::middleware::from_fn(middleware::log_activity))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "Calculator microservice is running"
}
