use serde::{Deserialize, Serialize};

/// Query parameters accepted by every calculator route.
///
/// Operands arrive as raw text and are parsed by the calculator service so
/// that a non-numeric value yields the service's own 400 message instead of
/// an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateParams {
    pub num1: Option<String>,
    pub num2: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub result: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
