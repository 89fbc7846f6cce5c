//! A star with its planets at a point in the galaxy

use std::fmt;

use planetary::Planet;
use serde::{Deserialize, Serialize};
use stellar::{Star, apparent_magnitude};

use crate::position::GalacticPosition;

/// Distances below this (pc) are treated as this when computing brightness
const MIN_VIEWING_DISTANCE: f64 = 1e-3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    pub position: GalacticPosition,
    pub star: Star,
    /// Ordered by semi-major axis, innermost first
    pub planets: Vec<Planet>,
}

impl StarSystem {
    pub fn name(&self) -> &str {
        &self.star.name
    }

    /// How bright the host looks from the origin
    pub fn apparent_magnitude(&self) -> f64 {
        let distance = self.position.distance().max(MIN_VIEWING_DISTANCE);
        apparent_magnitude(self.star.magnitude, distance)
    }

    /// Planets orbiting strictly inside the habitable zone
    pub fn habitable_zone_planets(&self) -> impl Iterator<Item = &Planet> {
        self.planets
            .iter()
            .filter(|p| self.star.habitable_zone.contains(p.semi_major_axis.to_au()))
    }

    pub fn moon_count(&self) -> u32 {
        self.planets.iter().map(|p| p.moons).sum()
    }

    /// Whether planets are sorted by orbit, innermost first
    pub fn is_ordered(&self) -> bool {
        self.planets
            .windows(2)
            .all(|pair| pair[0].semi_major_axis <= pair[1].semi_major_axis)
    }
}

impl fmt::Display for StarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} with {} planets",
            self.star,
            self.position,
            self.planets.len()
        )
    }
}
