//! A generated collection of star systems

use planetary::Planet;
use serde::{Deserialize, Serialize};

use crate::system::StarSystem;

/// Every system generated from one seed, ordered by catalog index
///
/// Indices whose star could not be classified are absent, so
/// `systems.len()` can be below the requested count.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Galaxy {
    pub seed: u64,
    pub systems: Vec<StarSystem>,
}

impl Galaxy {
    pub fn new(seed: u64, systems: Vec<StarSystem>) -> Self {
        Self { seed, systems }
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn planets(&self) -> impl Iterator<Item = &Planet> {
        self.systems.iter().flat_map(|s| s.planets.iter())
    }

    pub fn planet_count(&self) -> usize {
        self.systems.iter().map(|s| s.planets.len()).sum()
    }

    /// Look up a system by its star name, e.g. `0042A`
    pub fn system(&self, name: &str) -> Option<&StarSystem> {
        self.systems.iter().find(|s| s.star.name == name)
    }
}
