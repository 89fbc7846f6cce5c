use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StellarError};

/// Harvard spectral letter for the temperature bands this generator models
///
/// O and B stars are not produced (the mass range tops out near 10,000 K),
/// while the L and T brown-dwarf bands are kept for completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralType {
    A,
    F,
    G,
    K,
    M,
    L,
    T,
}

impl SpectralType {
    /// All modeled types, hottest first
    pub const ALL: [SpectralType; 7] = [
        SpectralType::A,
        SpectralType::F,
        SpectralType::G,
        SpectralType::K,
        SpectralType::M,
        SpectralType::L,
        SpectralType::T,
    ];

    /// Temperature band `[min, max)` in Kelvin
    pub fn temperature_band(&self) -> (f64, f64) {
        match self {
            SpectralType::A => (7300.0, 10000.0),
            SpectralType::F => (6000.0, 7300.0),
            SpectralType::G => (5300.0, 6000.0),
            SpectralType::K => (3800.0, 5300.0),
            SpectralType::M => (2500.0, 3800.0),
            SpectralType::L => (1300.0, 2500.0),
            SpectralType::T => (600.0, 1300.0),
        }
    }

    /// Find the band containing `temperature`, if any
    pub fn from_temperature(temperature: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| {
            let (min, max) = t.temperature_band();
            (min..max).contains(&temperature)
        })
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
            SpectralType::L => "L",
            SpectralType::T => "T",
        };
        write!(f, "{}", str)
    }
}

impl FromStr for SpectralType {
    type Err = StellarError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "A" => Ok(SpectralType::A),
            "F" => Ok(SpectralType::F),
            "G" => Ok(SpectralType::G),
            "K" => Ok(SpectralType::K),
            "M" => Ok(SpectralType::M),
            "L" => Ok(SpectralType::L),
            "T" => Ok(SpectralType::T),
            _ => Err(StellarError::InvalidSpectralClass(s.to_string())),
        }
    }
}

/// Spectral letter plus subtype digit, e.g. `G2` for the Sun
///
/// Serialized as its display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpectralClass {
    pub spectral_type: SpectralType,
    /// Subtype 0 (hottest) to 9 (coolest)
    pub subtype: u8,
}

impl SpectralClass {
    /// Classify a star by surface temperature
    ///
    /// The subtype is `9 − 10·(T − band_min)/band_width`, truncated toward
    /// zero, so it stays within 0..=9 for any temperature inside the band.
    ///
    /// # Errors
    /// `StellarError::OutOfRange` when the temperature falls outside every band.
    ///
    /// # Example
    /// ```
    /// use stellar::SpectralClass;
    ///
    /// let sun = SpectralClass::from_temperature(5778.0).unwrap();
    /// assert_eq!(sun.to_string(), "G2");
    /// ```
    pub fn from_temperature(temperature: f64) -> Result<Self> {
        let spectral_type = SpectralType::from_temperature(temperature)
            .ok_or(StellarError::OutOfRange { temperature })?;

        let (min, max) = spectral_type.temperature_band();
        let subtype = (9.0 - 10.0 * (temperature - min) / (max - min)) as u8;

        Ok(Self {
            spectral_type,
            subtype,
        })
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.spectral_type, self.subtype)
    }
}

impl FromStr for SpectralClass {
    type Err = StellarError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || StellarError::InvalidSpectralClass(s.to_string());

        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            spectral_type: letter.to_string().parse().map_err(|_| invalid())?,
            subtype: digit as u8,
        })
    }
}

impl TryFrom<String> for SpectralClass {
    type Error = StellarError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SpectralClass> for String {
    fn from(value: SpectralClass) -> Self {
        value.to_string()
    }
}

/// Convenience wrapper returning the class as a string (`"G2"`)
pub fn stellar_class(temperature: f64) -> Result<String> {
    SpectralClass::from_temperature(temperature).map(|class| class.to_string())
}
