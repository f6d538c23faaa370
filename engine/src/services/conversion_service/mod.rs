// engine/src/services/conversion_service/mod.rs
// ConversionService is what a presentation layer talks to: it owns a shared,
// read-only handle on the loaded datasets and answers per-request questions.

use std::sync::Arc;

use ppp_shared::models::{ConversionRequest, ConversionResponse, PppFactor};

use crate::data::loaded_data::LoadedData;
use crate::error::EngineError;

pub mod handle_convert;

#[derive(Debug, Clone)]
pub struct ConversionService {
    data: Arc<LoadedData>,
}

impl ConversionService {
    pub fn new(data: Arc<LoadedData>) -> Self {
        ConversionService { data }
    }

    pub fn data(&self) -> &LoadedData {
        &self.data
    }

    pub fn handle_convert(&self, request: ConversionRequest) -> Result<ConversionResponse, EngineError> {
        tracing::info!(
            source = %request.source_country,
            target = %request.target_country,
            salary = request.salary,
            "Received conversion request, dispatching to handler."
        );
        handle_convert::handle_convert(request, &self.data)
    }

    pub fn list_countries(&self) -> Vec<&str> {
        self.data.countries()
    }

    /// Country listing with the factor each one resolved to.
    pub fn list_factors(&self) -> Vec<(&str, PppFactor)> {
        self.data.ppp_factors().iter().map(|(country, factor)| (country, *factor)).collect()
    }

    pub fn currency_code(&self, country: &str) -> &str {
        self.data.currency_code(country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FactorPolicy;
    use crate::models::{CurrencyCodeTable, PppFactorTable};
    use std::thread;

    fn create_test_service() -> ConversionService {
        let factors = PppFactorTable::from_pairs(&[("France", 0.85), ("United States", 1.0), ("Kenya", 40.0)]);
        let mut codes = CurrencyCodeTable::new();
        codes.insert("FRANCE", "EUR");
        codes.insert("UNITED STATES", "USD");
        let data = LoadedData::new(factors, codes, FactorPolicy::Keep).unwrap();
        ConversionService::new(Arc::new(data))
    }

    #[test]
    fn test_list_countries_for_selection() {
        let service = create_test_service();
        assert_eq!(service.list_countries(), vec!["France", "Kenya", "United States"]);
        let factors = service.list_factors();
        assert_eq!(factors[0].0, "France");
        assert_eq!(factors[0].1.value, 0.85);
    }

    #[test]
    fn test_currency_code_labels() {
        let service = create_test_service();
        assert_eq!(service.currency_code("France"), "EUR");
        assert_eq!(service.currency_code("Kenya"), "Unknown");
    }

    #[test]
    fn test_concurrent_sessions_share_loaded_data() {
        let service = create_test_service();
        let handles: Vec<_> = (1..=4)
            .map(|i| {
                let service = service.clone();
                thread::spawn(move || {
                    let request = ConversionRequest::new("France", "United States", 850.0 * i as f64);
                    service.handle_convert(request).unwrap().converted_salary.unwrap()
                })
            })
            .collect();
        let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for (i, converted) in results.iter().enumerate() {
            assert!((converted - 1000.0 * (i + 1) as f64).abs() < 1e-6);
        }
    }
}
