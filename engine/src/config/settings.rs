// Engine settings, loaded from an optional JSON file and overridden from the command line
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// What to do with non-positive PPP factors retained after the latest-year reduction.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FactorPolicy {
    /// Keep them and warn; a zero source factor fails at conversion time.
    #[default]
    Keep,
    /// Fail the load.
    Reject,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub ppp_data_path: PathBuf,
    pub currency_data_path: PathBuf,
    pub factor_policy: FactorPolicy,
}

impl Default for EngineSettings {
    fn default() -> Self {
        // Dataset file names as shipped next to the binary
        EngineSettings {
            ppp_data_path: PathBuf::from("ppp_value.xml"),
            currency_data_path: PathBuf::from("currencyCodes.csv"),
            factor_policy: FactorPolicy::Keep,
        }
    }
}

impl EngineSettings {
    pub fn from_json_str(config_str: &str) -> Result<Self, anyhow::Error> {
        let settings: EngineSettings = serde_json::from_str(config_str)?;
        Ok(settings)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file '{}'", path.display()))?;
        Self::from_json_str(&config_str)
            .with_context(|| format!("Invalid settings file '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.ppp_data_path, PathBuf::from("ppp_value.xml"));
        assert_eq!(settings.currency_data_path, PathBuf::from("currencyCodes.csv"));
        assert_eq!(settings.factor_policy, FactorPolicy::Keep);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let settings = EngineSettings::from_json_str(r#"{ "factor_policy": "reject" }"#).unwrap();
        assert_eq!(settings.factor_policy, FactorPolicy::Reject);
        assert_eq!(settings.ppp_data_path, PathBuf::from("ppp_value.xml"));
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        assert!(EngineSettings::from_json_str(r#"{ "factor_policy": "clamp" }"#).is_err());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "ppp_data_path": "data/ppp.xml", "currency_data_path": "data/codes.csv" }}"#).unwrap();
        file.flush().unwrap();
        let settings = EngineSettings::from_json_file(file.path()).unwrap();
        assert_eq!(settings.ppp_data_path, PathBuf::from("data/ppp.xml"));
        assert_eq!(settings.currency_data_path, PathBuf::from("data/codes.csv"));
    }

    #[test]
    fn test_from_missing_json_file() {
        let err = EngineSettings::from_json_file("no_such_settings.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read settings file"));
    }
}
