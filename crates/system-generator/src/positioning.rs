//! Galactic disc positioning
//!
//! Stars are binned per axis on integer parsecs with a Gaussian density
//! around the origin, then jittered uniformly inside their bin.

use rand::Rng;
use stellar::sampling::sample_uniform;
use star_system::GalacticPosition;

use crate::config::GalaxyConfig;
use crate::error::ConfigError;

/// Cumulative bin weights for one axis
#[derive(Debug, Clone)]
pub struct AxisTable {
    lowest_bin: f64,
    cumulative: Vec<f64>,
}

impl AxisTable {
    /// Bins `[-half_width, half_width)` weighted by exp(−b² / 2σ²)
    pub fn gaussian(half_width: u32, sigma: f64) -> Self {
        let half_width = i64::from(half_width);
        let mut total = 0.0;
        let cumulative: Vec<f64> = (-half_width..half_width)
            .map(|bin| {
                let b = bin as f64;
                total += (-b * b / (2.0 * sigma * sigma)).exp();
                total
            })
            .collect();

        let cumulative = cumulative.into_iter().map(|c| c / total).collect();

        Self {
            lowest_bin: -(half_width as f64),
            cumulative,
        }
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Probability mass of the bin starting at `bin`
    pub fn probability(&self, bin: i64) -> f64 {
        let index = bin as f64 - self.lowest_bin;
        if index < 0.0 || index >= self.len() as f64 {
            return 0.0;
        }
        let i = index as usize;
        let below = if i == 0 { 0.0 } else { self.cumulative[i - 1] };
        self.cumulative[i] - below
    }

    /// Lower edge of a weighted bin. One draw.
    pub fn sample_bin(&self, rng: &mut impl Rng) -> f64 {
        let roll: f64 = rng.random();
        let i = self
            .cumulative
            .partition_point(|&c| c <= roll)
            .min(self.len().saturating_sub(1));
        self.lowest_bin + i as f64
    }
}

/// Bin tables for the plane and the vertical axis, built once per galaxy
#[derive(Debug, Clone)]
pub struct GalacticDisc {
    plane: AxisTable,
    vertical: AxisTable,
}

impl GalacticDisc {
    pub fn new(map_size: u32, sigma_xy: f64, sigma_z: f64) -> Result<Self, ConfigError> {
        GalaxyConfig {
            map_size,
            sigma_xy,
            sigma_z,
            ..GalaxyConfig::default()
        }
        .validate()?;

        Ok(Self {
            plane: AxisTable::gaussian(map_size, sigma_xy),
            vertical: AxisTable::gaussian(map_size, sigma_z),
        })
    }

    pub fn from_config(config: &GalaxyConfig) -> Result<Self, ConfigError> {
        Self::new(config.map_size, config.sigma_xy, config.sigma_z)
    }

    pub fn plane(&self) -> &AxisTable {
        &self.plane
    }

    pub fn vertical(&self) -> &AxisTable {
        &self.vertical
    }

    /// Six draws: the three bins, then the three in-bin offsets
    pub fn sample(&self, rng: &mut impl Rng) -> GalacticPosition {
        let x = self.plane.sample_bin(rng);
        let y = self.plane.sample_bin(rng);
        let z = self.vertical.sample_bin(rng);

        GalacticPosition {
            x: x + sample_uniform(rng, 0.0, 1.0),
            y: y + sample_uniform(rng, 0.0, 1.0),
            z: z + sample_uniform(rng, 0.0, 1.0),
        }
    }
}
