//! Best-effort persistence of finished calculations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tokio::task::JoinHandle;

use crate::entities::calculations;
use crate::services::calculator::Calculation;

/// Submit a finished calculation to the history table.
///
/// The insert runs on a detached task so the HTTP response is never delayed
/// by the database. Failures are logged and dropped; there is no retry, and
/// the response already sent to the caller is never affected. The returned
/// handle lets tests await the write; the request path ignores it.
pub fn record_calculation(
    db: DatabaseConnection,
    calculation: Calculation,
    result: f64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let record = calculations::ActiveModel {
            operation: Set(calculation.operation().name().to_string()),
            num1: Set(calculation.num1()),
            num2: Set(calculation.num2()),
            result: Set(result),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        match record.insert(&db).await {
            Ok(saved) => tracing::info!("Calculation saved to history (id={})", saved.id),
            Err(e) => tracing::error!("Failed to save calculation to history: {}", e),
        }
    })
}
