//! Audit Configuration
//!
//! Key-value options that tune individual checks (thresholds, allowlists,
//! toggles) and fixers. Loaded from YAML; an absent or unreadable file means
//! an empty configuration, never a failed audit.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;
use std::path::Path;

/// Provider-wide key-value options for checks or fixers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditConfig {
    values: HashMap<String, Value>,
}

impl AuditConfig {
    pub fn new(values: HashMap<String, Value>) -> Self {
        Self { values }
    }

    /// Parse a YAML mapping of options
    ///
    /// An empty document parses as an empty configuration.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Option<Self> =
            serde_yaml::from_str(content).context("Failed to parse audit config YAML")?;
        Ok(config.unwrap_or_default())
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read audit config {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration, falling back to empty on a missing or bad file
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Ignoring audit config {}: {:#}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(Value::as_bool)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.values.get(key).and_then(Value::as_u64)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_yaml_str() {
        let config = AuditConfig::from_yaml_str(
            "max_unused_account_days: 90\nshodan_api_key: abc123\nscan_unattached_disks: true\n",
        )
        .unwrap();

        assert_eq!(config.get_u64("max_unused_account_days"), Some(90));
        assert_eq!(config.get_str("shodan_api_key"), Some("abc123"));
        assert_eq!(config.get_bool("scan_unattached_disks"), Some(true));
        assert!(config.get("missing").is_none());
    }

    #[test]
    fn test_empty_yaml_is_empty_config() {
        let config = AuditConfig::from_yaml_str("").unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AuditConfig::load_or_default(&PathBuf::from("/nonexistent/audit.yaml"));
        assert!(config.is_empty());
    }
}
