use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::{
    AppState,
    models::calculation::{CalculateParams, CalculationResponse, ErrorResponse},
    services::{calculator::Operation, recorder},
};

type CalculateResult =
    Result<(StatusCode, Json<CalculationResponse>), (StatusCode, Json<ErrorResponse>)>;

pub async fn add(state: State<AppState>, params: Query<CalculateParams>) -> CalculateResult {
    calculate(state, params, Operation::Add).await
}

pub async fn subtract(state: State<AppState>, params: Query<CalculateParams>) -> CalculateResult {
    calculate(state, params, Operation::Subtract).await
}

pub async fn multiply(state: State<AppState>, params: Query<CalculateParams>) -> CalculateResult {
    calculate(state, params, Operation::Multiply).await
}

pub async fn divide(state: State<AppState>, params: Query<CalculateParams>) -> CalculateResult {
    calculate(state, params, Operation::Divide).await
}

pub async fn power(state: State<AppState>, params: Query<CalculateParams>) -> CalculateResult {
    calculate(state, params, Operation::Power).await
}

pub async fn modulo(state: State<AppState>, params: Query<CalculateParams>) -> CalculateResult {
    calculate(state, params, Operation::Modulo).await
}

pub async fn sqrt(state: State<AppState>, params: Query<CalculateParams>) -> CalculateResult {
    calculate(state, params, Operation::Sqrt).await
}

/// Run one calculation end to end: validate the raw operands, evaluate,
/// respond, then hand the record to the best-effort recorder.
///
/// Validation failures and domain errors both surface as 400 with a JSON
/// error body and skip persistence entirely. On success the history write is
/// spawned and never awaited, so it cannot change the response.
async fn calculate(
    State(state): State<AppState>,
    Query(params): Query<CalculateParams>,
    operation: Operation,
) -> CalculateResult {
    let calculation = match operation.validate(params.num1.as_deref(), params.num2.as_deref()) {
        Ok(calculation) => calculation,
        Err(invalid) => {
            tracing::error!(
                "Invalid input for {}: num1={:?}, num2={:?}",
                operation.name(),
                params.num1,
                params.num2
            );
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: invalid.message().to_string(),
                }),
            ));
        }
    };

    let result = calculation.evaluate().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.message().to_string(),
            }),
        )
    })?;

    tracing::info!(
        "Operation: {}, Inputs: num1={}, num2={:?}, Result: {}",
        operation.name(),
        calculation.num1(),
        calculation.num2(),
        result
    );

    // Fire and forget: the response does not wait on the insert
    let _ = recorder::record_calculation(state.db.clone(), calculation, result);

    Ok((StatusCode::OK, Json(CalculationResponse { result })))
}
