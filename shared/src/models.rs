use serde::{Deserialize, Serialize};

/// Currency code reported when a country has no entry in the code table.
pub const UNKNOWN_CURRENCY: &str = "Unknown";

/// One raw country/year observation from the PPP dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PppRecord {
    pub country: String,
    pub year: i32,
    /// `None` when the dataset leaves the value empty.
    pub value: Option<f64>,
}

/// The retained PPP conversion factor for a country.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PppFactor {
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub source_country: String,
    pub target_country: String,
    pub salary: f64,
}

impl ConversionRequest {
    pub fn new(source_country: impl Into<String>, target_country: impl Into<String>, salary: f64) -> Self {
        Self {
            source_country: source_country.into(),
            target_country: target_country.into(),
            salary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResponse {
    pub success: bool,
    pub message: String,
    pub converted_salary: Option<f64>,
    pub source_currency: String,
    pub target_currency: String,
}
