//! Strategy configuration handling.
//!
//! Extracts the standard fields from a free-form JSON strategy config while
//! preserving strategy-specific custom fields.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for participant strategies.
///
/// # Example JSON Config
///
/// ```json
/// {"seed": 12345, "aggression": 0.7}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Optional RNG seed. Seeded strategies make the same decisions for the
    /// same sequence of notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Anything else in the config, left for the strategy to interpret.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl StrategyConfig {
    /// Build from an optional JSON value, falling back to an empty config
    /// when the value is missing or malformed.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_else(Self::empty)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    pub fn empty() -> Self {
        Self {
            seed: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::empty()
    }
}
