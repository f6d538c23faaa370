use std::collections::HashMap;

use ppp_shared::models::UNKNOWN_CURRENCY;
use ppp_shared::utils::normalize_country_name;

/// Country name to alphabetic currency code, keyed by normalized name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyCodeTable {
    codes: HashMap<String, String>,
}

impl CurrencyCodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later inserts for the same normalized name replace earlier ones.
    pub fn insert(&mut self, name: &str, code: &str) {
        self.codes.insert(normalize_country_name(name), code.trim().to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.codes.get(&normalize_country_name(name)).map(String::as_str)
    }

    /// Never fails: misses resolve to [`UNKNOWN_CURRENCY`].
    pub fn lookup(&self, name: &str) -> &str {
        self.get(name).unwrap_or(UNKNOWN_CURRENCY)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
