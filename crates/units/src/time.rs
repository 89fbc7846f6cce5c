use serde::{Deserialize, Serialize};

use crate::quantity::scalar_quantity;

pub const DAYS_PER_YEAR: f64 = 365.25;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_YEAR: f64 = 31_557_600.0; // 365.25 days per year

const GYR_TO_YEARS: f64 = 1e9;

/// A duration with years as the base unit.
///
/// Stellar ages and lifespans are quoted in Gyr, tidal timescales in years,
/// orbital periods come out of Kepler's law in seconds and rotation periods
/// are stored in days.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Years

impl Time {
    pub fn from_years(value: f64) -> Self {
        Self(value)
    }

    pub fn from_gyr(value: f64) -> Self {
        Self(value * GYR_TO_YEARS)
    }

    pub fn from_days(value: f64) -> Self {
        Self(value / DAYS_PER_YEAR)
    }

    pub fn from_seconds(value: f64) -> Self {
        Self(value / SECONDS_PER_YEAR)
    }

    pub fn to_years(&self) -> f64 {
        self.0
    }

    pub fn to_gyr(&self) -> f64 {
        self.0 / GYR_TO_YEARS
    }

    pub fn to_days(&self) -> f64 {
        self.0 * DAYS_PER_YEAR
    }

    pub fn to_seconds(&self) -> f64 {
        self.0 * SECONDS_PER_YEAR
    }
}

scalar_quantity!(Time);
