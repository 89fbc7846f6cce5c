//! Planet categories and the stellar-mass dependent type table

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use stellar::sampling::sample_weighted_index;
use units::Mass;

/// Broad planet category, serialized as its one-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetType {
    /// Below half an Earth mass, Mars and Mercury analogs
    #[serde(rename = "S")]
    SubEarth,
    /// Rocky, 0.1 to 2 M⊕
    #[serde(rename = "T")]
    Terrestrial,
    /// Ice giants and mini-Neptunes, 3 to 30 M⊕
    #[serde(rename = "N")]
    Neptunian,
    /// 30 to 600 M⊕
    #[serde(rename = "G")]
    GasGiant,
}

impl PlanetType {
    /// Draw order of the type table
    pub const ALL: [PlanetType; 4] = [
        PlanetType::SubEarth,
        PlanetType::Terrestrial,
        PlanetType::Neptunian,
        PlanetType::GasGiant,
    ];

    /// Type probabilities, in [`PlanetType::ALL`] order, around a star
    ///
    /// Heavier stars shift the mix toward giants.
    pub fn classification_weights(star_mass: Mass) -> [f64; 4] {
        let m = star_mass.to_solar_masses();
        if m < 0.5 {
            [0.35, 0.40, 0.18, 0.07]
        } else if m <= 2.0 {
            [0.25, 0.35, 0.25, 0.15]
        } else {
            [0.20, 0.25, 0.30, 0.25]
        }
    }

    /// Draw a type from the table for this star. One draw.
    pub fn sample(rng: &mut impl Rng, star_mass: Mass) -> Self {
        let weights = Self::classification_weights(star_mass);
        Self::ALL[sample_weighted_index(rng, &weights)]
    }

    /// Inclusive range of moon counts
    pub fn moon_range(&self) -> RangeInclusive<u32> {
        match self {
            PlanetType::SubEarth | PlanetType::Terrestrial => 0..=1,
            PlanetType::Neptunian => 5..=29,
            PlanetType::GasGiant => 30..=119,
        }
    }

    /// Whether the planet carries a hydrogen-helium envelope
    pub fn is_giant(&self) -> bool {
        matches!(self, PlanetType::Neptunian | PlanetType::GasGiant)
    }

    pub fn code(&self) -> &'static str {
        match self {
            PlanetType::SubEarth => "S",
            PlanetType::Terrestrial => "T",
            PlanetType::Neptunian => "N",
            PlanetType::GasGiant => "G",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            PlanetType::SubEarth => "Sub-Earth",
            PlanetType::Terrestrial => "Terrestrial",
            PlanetType::Neptunian => "Neptunian",
            PlanetType::GasGiant => "Gas Giant",
        };
        write!(f, "{}", str)
    }
}

impl FromStr for PlanetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| format!("unknown planet type code: {:?}", s))
    }
}
