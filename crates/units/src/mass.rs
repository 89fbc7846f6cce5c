use serde::{Deserialize, Serialize};

use crate::quantity::scalar_quantity;

/// Mass of the Sun in kilograms (1.98847 × 10³⁰ kg)
pub const SOLAR_MASS_KG: f64 = 1.98847e30;

/// Mass of the Earth in kilograms (5.9722 × 10²⁴ kg)
pub const EARTH_MASS_KG: f64 = 5.9722e24;

/// Earth masses per solar mass (≈ 332,950)
pub const EARTH_MASSES_PER_SOLAR: f64 = SOLAR_MASS_KG / EARTH_MASS_KG;

/// A physical mass quantity using f64 precision.
///
/// Solar masses are the base unit. Stars are generated in solar masses and
/// planets in Earth masses; both convert to kilograms when a formula needs SI.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let sun = Mass::from_solar_masses(1.0);
/// let earth = Mass::from_earth_masses(1.0);
///
/// assert!(sun > earth);
/// assert!((earth.to_kg() - 5.9722e24).abs() < 1e18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Mass;
    ///
    /// let neptune = Mass::from_earth_masses(17.1);
    /// assert!(neptune.to_solar_masses() < 1e-4);
    /// ```
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value / EARTH_MASSES_PER_SOLAR)
    }

    pub fn from_kg(value: f64) -> Self {
        Self(value / SOLAR_MASS_KG)
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    pub fn to_earth_masses(&self) -> f64 {
        self.0 * EARTH_MASSES_PER_SOLAR
    }

    pub fn to_kg(&self) -> f64 {
        self.0 * SOLAR_MASS_KG
    }
}

scalar_quantity!(Mass);
