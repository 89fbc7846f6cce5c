//! Atmosphere generation
//!
//! Two models: a terrestrial one that may leave the planet airless and
//! draws a two-species mix, and a hydrogen-helium envelope for Neptunian
//! and gas giant planets.

use rand::Rng;
use serde::{Deserialize, Serialize};
use stellar::sampling::{sample_gaussian, sample_uniform, sample_wald, sample_weighted_pair};
use tracing::debug;

use crate::composition::{Composition, Gas};
use crate::error::Result;
use crate::formulas::{
    atmospheric_temperature, equilibrium_temperature, mean_molecular_mass, scale_height,
};

/// Candidate primary species for rocky planets and their draw weights
pub const TERRESTRIAL_SPECIES: [(Gas, f64); 4] = [
    (Gas::N2, 0.5),
    (Gas::CO2, 0.3),
    (Gas::O2, 0.15),
    (Gas::CH4, 0.05),
];

/// Bond albedo of a bare rocky surface
pub const AIRLESS_ALBEDO: f64 = 0.2;

/// Percent roll above which a terrestrial atmosphere runs away
pub const RUNAWAY_THRESHOLD: f64 = 99.9;

/// Runaway greenhouse factors are drawn from U(2, 3) and pinned here,
/// just below the single-layer model's singularity at 2.
pub const RUNAWAY_ETA_CEILING: f64 = 1.99;

/// Greenhouse factor distribution for giant envelopes
const GIANT_ETA_MEAN: f64 = 1.65;
const GIANT_ETA_STD_DEV: f64 = 0.2;

/// A planetary atmosphere
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Atmosphere {
    /// Scale height (km)
    pub scale_height: f64,
    /// Surface pressure (atm)
    pub pressure: f64,
    pub composition: Composition,
    /// Greenhouse factor η, below 2
    pub eta: f64,
    /// Surface temperature (K)
    pub temperature: f64,
    /// Ocean coverage fraction
    pub ocean: f64,
    /// Bond albedo
    pub albedo: f64,
}

impl Atmosphere {
    /// Bare rock at its equilibrium temperature
    pub fn airless(luminosity: f64, semi_major_axis_au: f64) -> Self {
        Self {
            scale_height: 0.0,
            pressure: 0.0,
            composition: Composition::airless(),
            eta: 0.0,
            temperature: equilibrium_temperature(AIRLESS_ALBEDO, luminosity, semi_major_axis_au),
            ocean: 0.0,
            albedo: AIRLESS_ALBEDO,
        }
    }

    pub fn is_airless(&self) -> bool {
        self.pressure == 0.0
    }
}

/// Generate an atmosphere for a rocky planet
///
/// One uniform roll decides whether the planet keeps an atmosphere at all.
/// If it does, two distinct species are drawn from [`TERRESTRIAL_SPECIES`]
/// and the remainder goes to `Other`. Pressure follows a Wald(1, 5); one
/// planet in a thousand instead gets a runaway greenhouse with pressure
/// raised to `10^p`.
///
/// # Arguments
/// * `luminosity` - Host luminosity in L☉
/// * `semi_major_axis_au` - Orbital distance in AU
/// * `p_atmos` - Probability of having an atmosphere
/// * `gravity` - Surface gravity in Earth g
pub fn terrestrial_atmosphere(
    rng: &mut impl Rng,
    luminosity: f64,
    semi_major_axis_au: f64,
    p_atmos: f64,
    gravity: f64,
) -> Result<Atmosphere> {
    if rng.random::<f64>() > p_atmos {
        return Ok(Atmosphere::airless(luminosity, semi_major_axis_au));
    }

    let weights = TERRESTRIAL_SPECIES.map(|(_, weight)| weight);
    let (first, second) = sample_weighted_pair(rng, &weights);
    let first_fraction = sample_uniform(rng, 0.5, 1.0);
    let second_fraction =
        sample_uniform(rng, 0.9 * (1.0 - first_fraction), 1.0 - first_fraction);
    let other_fraction = (1.0 - first_fraction - second_fraction).max(0.0);

    let composition = Composition::new([
        (TERRESTRIAL_SPECIES[first].0, first_fraction),
        (TERRESTRIAL_SPECIES[second].0, second_fraction),
        (Gas::Other, other_fraction),
    ])?;

    let mut pressure = sample_wald(rng, 1.0, 5.0);
    let eta = if sample_uniform(rng, 0.0, 100.0) > RUNAWAY_THRESHOLD {
        pressure = 10f64.powf(pressure);
        let drawn = sample_uniform(rng, 2.0, 3.0);
        debug!(eta = drawn, pressure, "runaway greenhouse, clamping eta");
        RUNAWAY_ETA_CEILING
    } else {
        sample_uniform(rng, 0.3, 1.0)
    };

    let clouds: f64 = rng.random();
    let ocean: f64 = rng.random();
    let surface_albedo = 0.2 * (1.0 - ocean) + 0.1 * ocean;
    let albedo = 0.8 * clouds + (1.0 - clouds) * surface_albedo;

    let teff = equilibrium_temperature(albedo, luminosity, semi_major_axis_au);
    let temperature = atmospheric_temperature(teff, eta)?;
    // Scale height uses the unwarmed effective temperature
    let height = scale_height(teff, gravity, mean_molecular_mass(&composition));

    Ok(Atmosphere {
        scale_height: height,
        pressure,
        composition,
        eta,
        temperature,
        ocean,
        albedo,
    })
}

/// Generate a hydrogen-helium envelope for a Neptunian or gas giant planet
///
/// Pressure is pinned to 1 atm, the reference level for giant radii.
pub fn gas_giant_atmosphere(
    rng: &mut impl Rng,
    luminosity: f64,
    semi_major_axis_au: f64,
    gravity: f64,
) -> Result<Atmosphere> {
    let albedo = sample_uniform(rng, 0.4, 0.6);
    let teff = equilibrium_temperature(albedo, luminosity, semi_major_axis_au);

    let other_fraction = sample_uniform(rng, 0.0, 0.03);
    let hydrogen = sample_uniform(rng, 0.8, 0.98).min(1.0 - other_fraction);
    let helium = (1.0 - hydrogen - other_fraction).max(0.0);
    let composition = Composition::new([
        (Gas::H2, hydrogen),
        (Gas::He, helium),
        (Gas::Other, other_fraction),
    ])?;

    let eta = loop {
        let eta = sample_gaussian(rng, GIANT_ETA_MEAN, GIANT_ETA_STD_DEV);
        if eta < 2.0 {
            break eta;
        }
    };

    let temperature = atmospheric_temperature(teff, eta)?;
    let height = scale_height(temperature, gravity, mean_molecular_mass(&composition));

    Ok(Atmosphere {
        scale_height: height,
        pressure: 1.0,
        composition,
        eta,
        temperature,
        ocean: 0.0,
        albedo,
    })
}
