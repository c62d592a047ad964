//! Engine configuration, loadable from YAML.

use serde::{Deserialize, Serialize};

use electoral_core::ElectoralError;

/// Default number of memoized queries kept by an engine.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Runtime knobs for [`ElectoralEngine`](crate::ElectoralEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Maximum memoized queries. Zero disables memoization.
    pub cache_capacity: usize,
}

impl EngineConfig {
    /// Parse from a YAML document. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ElectoralError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Configuration with memoization turned off.
    pub fn uncached() -> Self {
        Self { cache_capacity: 0 }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity() {
        assert_eq!(EngineConfig::default().cache_capacity, 256);
        assert_eq!(EngineConfig::uncached().cache_capacity, 0);
    }

    #[test]
    fn yaml_overrides_capacity() {
        let config = EngineConfig::from_yaml("cache_capacity: 16\n").unwrap();
        assert_eq!(config.cache_capacity, 16);
    }

    #[test]
    fn empty_mapping_takes_defaults() {
        assert_eq!(EngineConfig::from_yaml("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn unknown_field_is_config_error() {
        let err = EngineConfig::from_yaml("cache_size: 16\n").unwrap_err();
        assert!(matches!(err, ElectoralError::Config(_)));
    }
}
