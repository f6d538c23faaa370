// Process-wide data loaded once at startup and read-only afterwards.
use crate::config::{EngineSettings, FactorPolicy};
use crate::data::currency_parser::CurrencyCsvParser;
use crate::data::ppp_parser::PppXmlParser;
use crate::error::EngineError;
use crate::models::{CurrencyCodeTable, PppFactorTable};
use crate::services::salary_converter::SalaryConverter;

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedData {
    ppp_factors: PppFactorTable,
    currency_codes: CurrencyCodeTable,
}

impl LoadedData {
    /// Builds the context from already-loaded tables, applying the factor policy.
    pub fn new(
        ppp_factors: PppFactorTable,
        currency_codes: CurrencyCodeTable,
        policy: FactorPolicy,
    ) -> Result<Self, EngineError> {
        Self::check_factors(&ppp_factors, policy)?;
        Ok(LoadedData { ppp_factors, currency_codes })
    }

    /// Loads both datasets. Any failure aborts; no partial context is returned.
    pub fn load(settings: &EngineSettings) -> Result<Self, EngineError> {
        let ppp_factors = PppXmlParser::load_factors_from_path(&settings.ppp_data_path)?;
        let currency_codes = CurrencyCsvParser::load_codes_from_path(&settings.currency_data_path)?;
        let data = Self::new(ppp_factors, currency_codes, settings.factor_policy)?;
        tracing::info!(
            countries = data.ppp_factors.len(),
            currency_entities = data.currency_codes.len(),
            "Loaded PPP and currency datasets"
        );
        Ok(data)
    }

    fn check_factors(factors: &PppFactorTable, policy: FactorPolicy) -> Result<(), EngineError> {
        for (country, factor) in factors.iter().filter(|(_, f)| !(f.value.is_finite() && f.value > 0.0)) {
            match policy {
                FactorPolicy::Keep => {
                    tracing::warn!(country, year = factor.year, value = factor.value, "Non-positive or non-finite PPP factor kept");
                }
                FactorPolicy::Reject => {
                    return Err(EngineError::DataFormatError(format!(
                        "Invalid PPP factor {} for '{}' ({}): must be a positive finite number",
                        factor.value, country, factor.year
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn ppp_factors(&self) -> &PppFactorTable {
        &self.ppp_factors
    }

    pub fn currency_codes(&self) -> &CurrencyCodeTable {
        &self.currency_codes
    }

    /// Countries a conversion may be requested for.
    pub fn countries(&self) -> Vec<&str> {
        self.ppp_factors.countries().collect()
    }

    pub fn currency_code(&self, country: &str) -> &str {
        self.currency_codes.lookup(country)
    }

    pub fn converter(&self) -> SalaryConverter<'_> {
        SalaryConverter::new(&self.ppp_factors)
    }
}
