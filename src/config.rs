use crate::core::Result;
use serde::{Deserialize, Serialize};

/// How cabinet storage grows and shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthPolicy {
    /// Storage capacity equals the record count after every mutation.
    #[default]
    Exact,
    /// Standard vector growth; capacity is kept after removals.
    Amortized,
}

/// Cabinet configuration
///
/// Defaults reproduce the plain contract: exact-size storage and no
/// validation of names.
///
/// # Examples
///
/// ```
/// use cabinet::{CabinetConfig, GrowthPolicy};
///
/// let config = CabinetConfig::new()
///     .growth(GrowthPolicy::Amortized)
///     .reject_empty_names(true);
/// assert!(config.reject_empty_names);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CabinetConfig {
    /// Storage growth strategy
    pub growth: GrowthPolicy,

    /// Refuse inserts whose name is empty or only whitespace
    pub reject_empty_names: bool,
}

impl CabinetConfig {
    pub fn new() -> Self {
        Self {
            growth: GrowthPolicy::Exact,
            reject_empty_names: false,
        }
    }

    /// Set the growth policy
    pub fn growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Enable or disable empty-name rejection
    pub fn reject_empty_names(mut self, reject: bool) -> Self {
        self.reject_empty_names = reject;
        self
    }

    /// Parse from a JSON document
    ///
    /// Missing fields take their defaults; unknown fields are an error.
    ///
    /// ```
    /// use cabinet::{CabinetConfig, GrowthPolicy};
    ///
    /// let config = CabinetConfig::from_json(r#"{"growth": "amortized"}"#).unwrap();
    /// assert_eq!(config.growth, GrowthPolicy::Amortized);
    /// assert!(!config.reject_empty_names);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for CabinetConfig {
    fn default() -> Self {
        Self::new()
    }
}
