//! Galaxy generation settings

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ConfigError;

/// Settings for one galaxy run
///
/// Missing keys in a TOML file fall back to [`GalaxyConfig::default`]:
///
/// ```toml
/// seed = 42
/// systems = 5000
/// map_size = 500
/// sigma_xy = 50.0
/// sigma_z = 9.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    /// Key for every per-system random stream
    pub seed: u64,
    /// Number of catalog indices to generate
    pub systems: usize,
    /// Half-width of the map in parsecs; positions fall in `[-map_size, map_size)`
    pub map_size: u32,
    /// Disc scale length in the plane (pc)
    pub sigma_xy: f64,
    /// Disc scale height (pc)
    pub sigma_z: f64,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            systems: 1000,
            map_size: 500,
            sigma_xy: 50.0,
            sigma_z: 9.0,
        }
    }
}

impl GalaxyConfig {
    pub fn with_seed(seed: u64, systems: usize) -> Self {
        Self {
            seed,
            systems,
            ..Self::default()
        }
    }

    /// Default settings seeded from a name
    ///
    /// # Example
    /// ```
    /// use system_generator::GalaxyConfig;
    ///
    /// let a = GalaxyConfig::named("Local Bubble");
    /// let b = GalaxyConfig::named("Local Bubble");
    /// assert_eq!(a.seed, b.seed);
    /// ```
    pub fn named(name: &str) -> Self {
        Self {
            seed: seed_from_name(name),
            ..Self::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GalaxyConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reject a zero map or non-positive disc scales
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_size == 0 {
            return Err(ConfigError::NotPositive {
                field: "map_size",
                value: 0.0,
            });
        }
        for (field, value) in [("sigma_xy", self.sigma_xy), ("sigma_z", self.sigma_z)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}

/// Deterministic seed from a name via a v5 UUID
pub fn seed_from_name(name: &str) -> u64 {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
        .as_u64_pair()
        .0
}
