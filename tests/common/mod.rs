use axum::Router;
use calculator_microservice::entities::calculations;
use calculator_microservice::{AppState, create_router};
use chrono::Utc;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

/// Set up a mock database connection for tests.
///
/// Seeded with a canned insert result so success-path requests can complete
/// their fire-and-forget history write without a live Postgres.
pub fn setup_mock_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[calculations::Model {
            id: 1,
            operation: "add".to_string(),
            num1: 2.0,
            num2: Some(3.0),
            result: 5.0,
            created_at: Utc::now().into(),
        }]])
        .into_connection()
}

/// Build the full calculator router over a mock database.
pub fn test_app() -> Router {
    create_router(AppState {
        db: setup_mock_db(),
    })
}
