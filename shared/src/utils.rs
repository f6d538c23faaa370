// Helpers shared by the engine and any presentation layer built on it.

/// Canonical form used as the currency-code lookup key.
pub fn normalize_country_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Two decimal places, the way amounts are shown to the user.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn describe_conversion(
    salary: f64,
    source_country: &str,
    source_currency: &str,
    converted: f64,
    target_country: &str,
    target_currency: &str,
) -> String {
    format!(
        "You require a salary of {} {} in {} to live a similar quality of life as you would with a salary of {} {} in {}.",
        format_amount(converted),
        target_currency,
        target_country,
        format_amount(salary),
        source_currency,
        source_country
    )
}
