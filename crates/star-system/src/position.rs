//! Galactic coordinates

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position in parsecs relative to the observer at the origin
///
/// X runs spinward, Y coreward, Z toward the galactic north pole.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GalacticPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl GalacticPosition {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from the origin in parsecs
    pub fn distance(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Distance to another position in parsecs
    pub fn distance_to(&self, other: &GalacticPosition) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl fmt::Display for GalacticPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2}) pc", self.x, self.y, self.z)
    }
}
