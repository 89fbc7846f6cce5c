//! Closed-form planetary physics
//!
//! Plain `f64` in and out; the unit of every argument is part of its name or
//! doc. None of these check their domain except [`atmospheric_temperature`].

use std::f64::consts::PI;

use units::{AU_TO_M, EARTH_MASS_KG, EARTH_RADIUS_M};

use crate::composition::Composition;
use crate::error::{AtmosphereError, Result};

/// Boltzmann constant (J/K)
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Stefan-Boltzmann constant (W/m²/K⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;

/// Newtonian gravitational constant (m³/kg/s²)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.6743e-11;

/// Standard gravity (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Nominal solar luminosity (W)
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;

/// Radius in Earth radii of a uniform sphere with the given mass and density
///
/// # Arguments
/// * `mass_earth` - Mass in Earth masses
/// * `density` - Bulk density in kg/m³
pub fn planet_radius(mass_earth: f64, density: f64) -> f64 {
    let volume = mass_earth * EARTH_MASS_KG / density;
    (3.0 * volume / (4.0 * PI)).cbrt() / EARTH_RADIUS_M
}

/// Bulk density in kg/m³
pub fn planet_density(mass_earth: f64, radius_earth: f64) -> f64 {
    let radius_m = radius_earth * EARTH_RADIUS_M;
    let volume = (4.0 / 3.0) * PI * radius_m.powi(3);
    mass_earth * EARTH_MASS_KG / volume
}

/// Mass-radius relation for rocky planets (Zeng et al. 2016)
///
/// R = (1.07 - 0.21·CMF) · M^(1/3.7), both in Earth units.
///
/// # Arguments
/// * `mass_earth` - Mass in Earth masses
/// * `cmf` - Core-mass fraction, 0 (pure mantle) to 1 (pure iron)
pub fn rocky_radius(mass_earth: f64, cmf: f64) -> f64 {
    (1.07 - 0.21 * cmf) * mass_earth.powf(1.0 / 3.7)
}

/// Surface gravity in Earth g
pub fn surface_gravity(mass_earth: f64, radius_earth: f64) -> f64 {
    mass_earth / (radius_earth * radius_earth)
}

/// Escape velocity in m/s
pub fn escape_velocity(mass_earth: f64, radius_earth: f64) -> f64 {
    let mass_kg = mass_earth * EARTH_MASS_KG;
    let radius_m = radius_earth * EARTH_RADIUS_M;
    (2.0 * GRAVITATIONAL_CONSTANT * mass_kg / radius_m).sqrt()
}

/// Roche limit for a rigid satellite in metres
///
/// d = 1.26 · R · (ρ_primary / ρ_satellite)^(1/3), with R in Earth radii and
/// densities in kg/m³.
pub fn roche_limit_rigid(radius_earth: f64, primary_density: f64, satellite_density: f64) -> f64 {
    1.26 * radius_earth * EARTH_RADIUS_M * (primary_density / satellite_density).cbrt()
}

/// Roche limit for a fluid satellite in metres
///
/// d = 2.44 · R · (ρ_primary / ρ_satellite)^(1/3), with R in Earth radii and
/// densities in kg/m³.
pub fn roche_limit_fluid(radius_earth: f64, primary_density: f64, satellite_density: f64) -> f64 {
    2.44 * radius_earth * EARTH_RADIUS_M * (primary_density / satellite_density).cbrt()
}

/// Orbital period in seconds from Kepler's third law
///
/// # Arguments
/// * `semi_major_axis_m` - Semi-major axis in metres
/// * `central_mass_kg` - Mass of the central body in kg
pub fn orbital_period(semi_major_axis_m: f64, central_mass_kg: f64) -> f64 {
    2.0 * PI * (semi_major_axis_m.powi(3) / (GRAVITATIONAL_CONSTANT * central_mass_kg)).sqrt()
}

/// Semi-major axis in metres for a period in seconds
pub fn semi_major_axis_from_period(period_s: f64, central_mass_kg: f64) -> f64 {
    (GRAVITATIONAL_CONSTANT * central_mass_kg * period_s * period_s / (4.0 * PI * PI)).cbrt()
}

/// Blackbody equilibrium temperature in K
///
/// T = ((1 - A) · L / (16π · d² · σ))^¼ with L in watts and d in metres.
///
/// # Arguments
/// * `albedo` - Bond albedo
/// * `luminosity` - Stellar luminosity in L☉
/// * `semi_major_axis_au` - Orbital distance in AU
pub fn equilibrium_temperature(albedo: f64, luminosity: f64, semi_major_axis_au: f64) -> f64 {
    let distance_m = semi_major_axis_au * AU_TO_M;
    let absorbed = (1.0 - albedo) * luminosity * SOLAR_LUMINOSITY_W;
    (absorbed / (16.0 * PI * distance_m * distance_m * STEFAN_BOLTZMANN)).powf(0.25)
}

/// Surface temperature under a single-layer greenhouse
///
/// T = teff · (1 / (1 - η/2))^¼
///
/// # Errors
/// `DomainSampling` if `eta` is 2 or more, or not finite.
pub fn atmospheric_temperature(teff: f64, eta: f64) -> Result<f64> {
    if !eta.is_finite() || eta >= 2.0 {
        return Err(AtmosphereError::DomainSampling { eta });
    }
    Ok(teff * (1.0 / (1.0 - eta / 2.0)).powf(0.25))
}

/// Fraction-weighted mean molecular mass in kg
pub fn mean_molecular_mass(composition: &Composition) -> f64 {
    composition
        .iter()
        .map(|(gas, fraction)| fraction * gas.molecular_mass())
        .sum()
}

/// Isothermal scale height in km
///
/// # Arguments
/// * `temperature` - Gas temperature in K
/// * `gravity` - Surface gravity in Earth g
/// * `molecular_mass` - Mean molecular mass in kg
pub fn scale_height(temperature: f64, gravity: f64, molecular_mass: f64) -> f64 {
    BOLTZMANN * temperature / (molecular_mass * gravity * STANDARD_GRAVITY) / 1000.0
}
