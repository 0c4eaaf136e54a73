//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the pay policy
//! from a YAML configuration directory.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{CoreError, CoreResult};

use super::types::PayPolicy;

/// Loads and provides access to the pay policy configuration.
///
/// # Directory Structure
///
/// The configuration directory should contain:
/// ```text
/// config/erp/
/// └── pay_policy.yaml   # Shift limits, lunch tiers, weekend premium
/// ```
///
/// # Example
///
/// ```no_run
/// use erp_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/erp").unwrap();
/// let policy = loader.policy();
/// assert_eq!(policy.shift.minimum_shift_minutes, 15);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: PayPolicy,
}

impl PolicyLoader {
    /// Loads the pay policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/erp")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if the
    /// policy file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("pay_policy.yaml");
        let policy = Self::load_yaml::<PayPolicy>(&policy_path)?;

        info!(
            minimum_shift_minutes = policy.shift.minimum_shift_minutes,
            saturday_premium = %policy.weekend.saturday_premium,
            "loaded pay policy"
        );

        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> CoreResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CoreError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded pay policy.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }
}
