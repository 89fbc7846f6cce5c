//! Atmospheric composition types
//!
//! Composition is tracked as mass fractions over a closed set of gas species.
//! Anything not modeled individually is lumped into `Gas::Other`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AtmosphereError, Result};

/// Gas species tracked in planetary atmospheres
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gas {
    N2,
    CO2,
    O2,
    CH4,
    H2,
    He,
    Other,
}

impl Gas {
    pub const ALL: [Gas; 7] = [
        Gas::N2,
        Gas::CO2,
        Gas::O2,
        Gas::CH4,
        Gas::H2,
        Gas::He,
        Gas::Other,
    ];

    /// Mass of one molecule in kg
    ///
    /// `Other` stands in for a heavy trace mix (Ar, H₂O, SO₂, ...) at 3e-26 kg.
    pub fn molecular_mass(&self) -> f64 {
        match self {
            Gas::N2 => 4.6518e-26,
            Gas::CO2 => 7.3079e-26,
            Gas::O2 => 5.3134e-26,
            Gas::CH4 => 2.664e-26,
            Gas::H2 => 3.348e-27,
            Gas::He => 6.646477e-27,
            Gas::Other => 3e-26,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gas::N2 => "N2",
            Gas::CO2 => "CO2",
            Gas::O2 => "O2",
            Gas::CH4 => "CH4",
            Gas::H2 => "H2",
            Gas::He => "He",
            Gas::Other => "Other",
        }
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Gas {
    type Err = AtmosphereError;

    fn from_str(s: &str) -> Result<Self> {
        Gas::ALL
            .into_iter()
            .find(|gas| gas.name() == s)
            .ok_or_else(|| AtmosphereError::UnknownSpecies(s.to_string()))
    }
}

/// Atmospheric composition as mass fractions
///
/// Fractions are non-negative and sum to 1 within [`Composition::TOLERANCE`];
/// both are checked on construction, including when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<Gas, f64>", into = "BTreeMap<Gas, f64>")]
pub struct Composition(BTreeMap<Gas, f64>);

impl Composition {
    /// Allowed deviation of the fraction sum from 1
    pub const TOLERANCE: f64 = 1e-9;

    /// Build a composition from `(gas, fraction)` pairs
    ///
    /// Repeated species are summed. Zero fractions are kept so that a drawn
    /// species stays visible even if its share rounds away.
    ///
    /// # Errors
    /// - `NegativeFraction` if any fraction is below zero
    /// - `InvalidComposition` if the fractions do not sum to 1
    ///
    /// # Example
    /// ```
    /// use planetary::composition::{Composition, Gas};
    ///
    /// let air = Composition::new([(Gas::N2, 0.78), (Gas::O2, 0.21), (Gas::Other, 0.01)]).unwrap();
    /// assert_eq!(air.dominant(), Some(Gas::N2));
    ///
    /// assert!(Composition::new([(Gas::N2, 0.5)]).is_err());
    /// ```
    pub fn new(fractions: impl IntoIterator<Item = (Gas, f64)>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for (gas, fraction) in fractions {
            if fraction < 0.0 || fraction.is_nan() {
                return Err(AtmosphereError::NegativeFraction { gas, fraction });
            }
            *map.entry(gas).or_insert(0.0) += fraction;
        }

        let total: f64 = map.values().sum();
        if (total - 1.0).abs() > Self::TOLERANCE {
            return Err(AtmosphereError::InvalidComposition { total });
        }

        Ok(Self(map))
    }

    /// Build a composition from species names, rejecting unknown species
    pub fn from_named<'a>(fractions: impl IntoIterator<Item = (&'a str, f64)>) -> Result<Self> {
        let parsed = fractions
            .into_iter()
            .map(|(name, fraction)| Ok((name.parse::<Gas>()?, fraction)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(parsed)
    }

    /// Placeholder composition for airless bodies: all `Other`
    pub fn airless() -> Self {
        Self(BTreeMap::from([(Gas::Other, 1.0)]))
    }

    /// Fraction of `gas`, zero if absent
    pub fn fraction(&self, gas: Gas) -> f64 {
        self.0.get(&gas).copied().unwrap_or(0.0)
    }

    /// Sum of all fractions
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// The species with the largest fraction
    pub fn dominant(&self) -> Option<Gas> {
        self.0
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(gas, _)| *gas)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Gas, f64)> + '_ {
        self.0.iter().map(|(gas, fraction)| (*gas, *fraction))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<BTreeMap<Gas, f64>> for Composition {
    type Error = AtmosphereError;

    fn try_from(value: BTreeMap<Gas, f64>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Composition> for BTreeMap<Gas, f64> {
    fn from(value: Composition) -> Self {
        value.0
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(gas, fraction)| format!("{} {:.1}%", gas, fraction * 100.0))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
