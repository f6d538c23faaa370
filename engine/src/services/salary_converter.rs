// Purchasing-power-parity salary conversion
// A salary is first expressed in international dollars by dividing by the
// source country's PPP factor, then multiplied by the target country's factor.
// No rounding happens here; formatting is left to the caller.

use ppp_shared::models::ConversionRequest;

use crate::error::EngineError;
use crate::models::PppFactorTable;

/// Converts `salary` from `source_country` to `target_country`.
///
/// Both countries must be present in `factors`; an absent one is a
/// [`EngineError::LookupError`]. A zero source factor is an
/// [`EngineError::ArithmeticError`] instead of an infinite result.
pub fn convert_salary(
    factors: &PppFactorTable,
    salary: f64,
    source_country: &str,
    target_country: &str,
) -> Result<f64, EngineError> {
    let source_ppp = factors.factor(source_country)?;
    let target_ppp = factors.factor(target_country)?;

    if source_ppp == 0.0 {
        return Err(EngineError::ArithmeticError(format!(
            "PPP factor for '{}' is zero, cannot divide",
            source_country
        )));
    }

    let usd_equivalent = salary / source_ppp;
    Ok(usd_equivalent * target_ppp)
}

/// Borrowing view over a factor table.
#[derive(Debug, Clone, Copy)]
pub struct SalaryConverter<'a> {
    factors: &'a PppFactorTable,
}

impl<'a> SalaryConverter<'a> {
    pub fn new(factors: &'a PppFactorTable) -> Self {
        Self { factors }
    }

    pub fn convert(&self, salary: f64, source_country: &str, target_country: &str) -> Result<f64, EngineError> {
        convert_salary(self.factors, salary, source_country, target_country)
    }

    /// A request is convertible when both countries are known and the salary is a positive finite amount.
    pub fn is_convertible(&self, request: &ConversionRequest) -> bool {
        self.factors.contains(&request.source_country)
            && self.factors.contains(&request.target_country)
            && request.salary.is_finite()
            && request.salary > 0.0
    }
}
