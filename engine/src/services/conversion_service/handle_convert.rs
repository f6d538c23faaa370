// Handler for a single conversion request
use ppp_shared::models::{ConversionRequest, ConversionResponse};
use ppp_shared::utils::describe_conversion;

use crate::data::loaded_data::LoadedData;
use crate::error::EngineError;

pub fn handle_convert(request: ConversionRequest, data: &LoadedData) -> Result<ConversionResponse, EngineError> {
    let converter = data.converter();
    let source_currency = data.currency_code(&request.source_country).to_string();
    let target_currency = data.currency_code(&request.target_country).to_string();

    if !converter.is_convertible(&request) {
        let message = rejection_reason(&request, data);
        tracing::warn!(
            source = %request.source_country,
            target = %request.target_country,
            salary = request.salary,
            reason = %message,
            "Conversion request not performed (handler)"
        );
        return Ok(ConversionResponse {
            success: false,
            message,
            converted_salary: None,
            source_currency,
            target_currency,
        });
    }

    let converted = converter.convert(request.salary, &request.source_country, &request.target_country)?;
    let message = describe_conversion(
        request.salary,
        &request.source_country,
        &source_currency,
        converted,
        &request.target_country,
        &target_currency,
    );

    tracing::debug!(
        source = %request.source_country,
        target = %request.target_country,
        converted,
        "Conversion completed (handler)"
    );

    Ok(ConversionResponse {
        success: true,
        message,
        converted_salary: Some(converted),
        source_currency,
        target_currency,
    })
}

fn rejection_reason(request: &ConversionRequest, data: &LoadedData) -> String {
    let factors = data.ppp_factors();
    if !factors.contains(&request.source_country) {
        format!("Unknown source country '{}'. Select a country from the list.", request.source_country)
    } else if !factors.contains(&request.target_country) {
        format!("Unknown target country '{}'. Select a country from the list.", request.target_country)
    } else {
        format!("Salary must be greater than zero, got {}.", request.salary)
    }
}
