use serde::{Deserialize, Serialize};

use crate::quantity::scalar_quantity;

/// Astronomical unit in metres
pub const AU_TO_M: f64 = 1.49598e11;
pub const AU_TO_KM: f64 = AU_TO_M / 1000.0;

/// Volumetric mean Earth radius in metres
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Nominal solar radius in metres
pub const SOLAR_RADIUS_M: f64 = 695_700_000.0;

/// Parsec in astronomical units
pub const PARSEC_TO_AU: f64 = 206_264.806;

/// A length quantity with astronomical units as the base unit.
///
/// Orbital distances are carried in AU; planetary and stellar radii convert
/// through Earth and solar radii respectively.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.0);
/// assert!((orbit.to_m() - 1.49598e11).abs() < 1.0);
///
/// let earth = Length::from_earth_radii(1.0);
/// assert!((earth.to_m() - 6_371_000.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    pub fn from_earth_radii(value: f64) -> Self {
        Self(value * EARTH_RADIUS_M / AU_TO_M)
    }

    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_M / AU_TO_M)
    }

    pub fn from_meters(value: f64) -> Self {
        Self(value / AU_TO_M)
    }

    pub fn from_parsecs(value: f64) -> Self {
        Self(value * PARSEC_TO_AU)
    }

    pub fn to_au(&self) -> f64 {
        self.0
    }

    pub fn to_earth_radii(&self) -> f64 {
        self.0 * AU_TO_M / EARTH_RADIUS_M
    }

    pub fn to_solar_radii(&self) -> f64 {
        self.0 * AU_TO_M / SOLAR_RADIUS_M
    }

    pub fn to_km(&self) -> f64 {
        self.0 * AU_TO_KM
    }

    pub fn to_m(&self) -> f64 {
        self.0 * AU_TO_M
    }

    pub fn to_parsecs(&self) -> f64 {
        self.0 / PARSEC_TO_AU
    }
}

scalar_quantity!(Length);
