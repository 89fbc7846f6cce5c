//! Host star record.

use std::fmt;

use serde::{Deserialize, Serialize};
use units::{Length, Mass, Time};

use crate::spectral::SpectralClass;

/// Inner and outer edges of the habitable zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitableZone {
    /// Inner edge in AU
    pub inner: f64,
    /// Outer edge in AU
    pub outer: f64,
}

impl HabitableZone {
    /// Habitable zone from stellar luminosity (L☉)
    ///
    /// Edges sit where the incident flux is 1.1 and 0.53 times Earth's.
    pub fn from_luminosity(luminosity: f64) -> Self {
        Self {
            inner: (luminosity / 1.1).sqrt(),
            outer: (luminosity / 0.53).sqrt(),
        }
    }

    /// Whether an orbit lies strictly between the two edges
    pub fn contains(&self, semi_major_axis_au: f64) -> bool {
        self.inner < semi_major_axis_au && semi_major_axis_au < self.outer
    }
}

/// A main-sequence host star
///
/// Every field is derived from the sampled mass except the age and
/// metallicity, which are drawn independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    /// Catalog name, e.g. `0042A`
    pub name: String,
    /// Surface temperature (K)
    pub temperature: f64,
    pub mass: Mass,
    pub age: Time,
    /// Metallicity [Fe/H] (0.0 = solar)
    pub metallicity: f64,
    /// Absolute magnitude
    pub magnitude: f64,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    pub radius: Length,
    pub habitable_zone: HabitableZone,
    /// Main-sequence lifespan
    pub lifespan: Time,
    pub spectral_class: SpectralClass,
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2} M☉ {:.3} L☉ {:.0} K age {:.2}/{:.2} Gyr HZ {:.2}-{:.2} AU",
            self.name,
            self.spectral_class,
            self.mass.to_solar_masses(),
            self.luminosity,
            self.temperature,
            self.age.to_gyr(),
            self.lifespan.to_gyr(),
            self.habitable_zone.inner,
            self.habitable_zone.outer,
        )
    }
}
