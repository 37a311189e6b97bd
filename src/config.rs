//! Runtime configuration.
//!
//! Defaults ship in `assets/config.json`. Setting `PCR_EXCHANGE_CONFIG` to the
//! path of another JSON file replaces them; missing fields fall back to the
//! built-in defaults.

use std::{fs, io, path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{domain::Party, util::assets};

pub const CONFIG_ENV: &str = "PCR_EXCHANGE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub toast_auto_dismiss_ms: u64,
    pub toast_limit: usize,
    /// Pause between a submission toast and the follow-up navigation.
    pub navigation_delay_ms: u64,
    pub quote_accept_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_auto_dismiss_ms: 6_000,
            toast_limit: 5,
            navigation_delay_ms: 1_500,
            quote_accept_delay_ms: 1_000,
        }
    }
}

impl UiConfig {
    pub fn toast_auto_dismiss(&self) -> Duration {
        Duration::from_millis(self.toast_auto_dismiss_ms)
    }

    pub fn navigation_delay(&self) -> Duration {
        Duration::from_millis(self.navigation_delay_ms)
    }

    pub fn quote_accept_delay(&self) -> Duration {
        Duration::from_millis(self.quote_accept_delay_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceConfig {
    /// Mandated post-consumer recycled share, in percent.
    pub required_pct: f64,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self { required_pct: 25.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuyerConfig {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub registration: String,
    pub location: String,
    pub employees: String,
    pub founded: String,
    pub verified: bool,
    pub certifications: Vec<String>,
}

impl Default for BuyerConfig {
    fn default() -> Self {
        Self {
            name: "PackMaster Industries".to_string(),
            contact: "Jane Doe".to_string(),
            email: "jane@packmaster.com".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            address: "456 Manufacturing Dr, Chicago, IL 60601".to_string(),
            registration: "US-12345678".to_string(),
            location: "Chicago, IL".to_string(),
            employees: "150-200".to_string(),
            founded: "2008".to_string(),
            verified: true,
            certifications: vec!["ISO 14001:2015".to_string(), "EPR Compliant".to_string()],
        }
    }
}

impl BuyerConfig {
    pub fn party(&self) -> Party {
        Party {
            name: self.name.clone(),
            contact: self.contact.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }

    /// Labelled profile facts, skipping the ones left blank.
    pub fn profile_facts(&self) -> Vec<(&'static str, String)> {
        [
            ("Location", &self.location),
            ("Employees", &self.employees),
            ("Founded", &self.founded),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(label, value)| (label, value.clone()))
        .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub compliance: ComplianceConfig,
    pub buyer: BuyerConfig,
}

impl AppConfig {
    /// Embedded defaults, overridden by `PCR_EXCHANGE_CONFIG` when set.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(PathBuf::from(path)),
            None => Self::from_json(assets::config_json()),
        }
    }

    pub fn from_file(path: PathBuf) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loading config override");
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let pct = self.compliance.required_pct;
        if !(pct > 0.0 && pct <= 100.0) {
            return Err(ConfigError::Invalid(format!(
                "compliance.required_pct must be in (0, 100], got {pct}"
            )));
        }
        if self.ui.toast_limit == 0 {
            return Err(ConfigError::Invalid("ui.toast_limit must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = AppConfig::from_json(assets::config_json()).unwrap();
        assert_eq!(config.compliance.required_pct, 25.0);
        assert_eq!(config.ui.navigation_delay(), Duration::from_millis(1_500));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = AppConfig::from_json(r#"{"ui":{"toast_limit":3}}"#).unwrap();
        assert_eq!(config.ui.toast_limit, 3);
        assert_eq!(config.ui.toast_auto_dismiss_ms, 6_000);
        assert_eq!(config.buyer.name, "PackMaster Industries");
    }

    #[test]
    fn buyer_profile_skips_blank_facts() {
        let config = AppConfig::from_json(assets::config_json()).unwrap();
        assert_eq!(config.buyer.registration, "US-12345678");
        assert_eq!(config.buyer.certifications.len(), 2);
        assert_eq!(config.buyer.profile_facts().len(), 3);

        let config =
            AppConfig::from_json(r#"{"buyer":{"name":"Apex","employees":" ","founded":""}}"#).unwrap();
        assert_eq!(
            config.buyer.profile_facts(),
            vec![("Location", "Chicago, IL".to_string())]
        );
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            AppConfig::from_json(r#"{"compliance":{"required_pct":140}}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn unreadable_override_is_reported() {
        let err = AppConfig::from_file(PathBuf::from("/nonexistent/pcr-exchange.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
