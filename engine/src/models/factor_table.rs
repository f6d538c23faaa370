use std::collections::BTreeMap;

use ppp_shared::models::{PppFactor, PppRecord};

use crate::error::EngineError;

/// Latest PPP conversion factor per country.
///
/// Each country holds the entry with the greatest year among the records that
/// carried a value. Countries are kept sorted by name so listings are stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PppFactorTable {
    factors: BTreeMap<String, PppFactor>,
}

impl PppFactorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record into the table.
    ///
    /// Records without a value are ignored. A record replaces the stored entry
    /// only when its year is strictly greater, so among equal years the first
    /// one seen is kept. Returns whether the table changed.
    pub fn record(&mut self, record: &PppRecord) -> bool {
        let Some(value) = record.value else {
            return false;
        };
        match self.factors.get(&record.country) {
            Some(stored) if record.year <= stored.year => false,
            _ => {
                self.factors.insert(record.country.clone(), PppFactor { year: record.year, value });
                true
            }
        }
    }

    pub fn get(&self, country: &str) -> Option<f64> {
        self.factors.get(country).map(|f| f.value)
    }

    pub fn entry(&self, country: &str) -> Option<&PppFactor> {
        self.factors.get(country)
    }

    /// Factor lookup for conversion; an absent country is a caller defect.
    pub fn factor(&self, country: &str) -> Result<f64, EngineError> {
        self.get(country).ok_or_else(|| EngineError::LookupError(country.to_string()))
    }

    pub fn contains(&self, country: &str) -> bool {
        self.factors.contains_key(country)
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.factors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PppFactor)> {
        self.factors.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        let mut table = Self::new();
        for (country, value) in pairs {
            table.record(&PppRecord { country: country.to_string(), year: 2020, value: Some(*value) });
        }
        table
    }
}

impl<'a> FromIterator<&'a PppRecord> for PppFactorTable {
    fn from_iter<I: IntoIterator<Item = &'a PppRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.record(record);
        }
        table
    }
}
