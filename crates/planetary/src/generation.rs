//! Planet generation
//!
//! Each planet consumes draws in a fixed order: type (when not given),
//! mass, radius parameters, atmosphere, rotation, moons. Keeping that order
//! is what makes a seeded galaxy reproducible.

use rand::Rng;
use stellar::Star;
use stellar::sampling::{sample_triangular, sample_uniform};
use units::{Length, Mass};

use crate::atmosphere::{Atmosphere, gas_giant_atmosphere, terrestrial_atmosphere};
use crate::dynamics::{TidalState, tilt_and_spin};
use crate::error::Result;
use crate::formulas::{planet_density, rocky_radius, surface_gravity};
use crate::planet::Planet;
use crate::planet_type::PlanetType;

/// Chance of an atmosphere for a terrestrial planet inside the habitable zone
pub const HABITABLE_ATMOSPHERE_CHANCE: f64 = 0.95;

/// Chance of an atmosphere for a terrestrial planet anywhere else
pub const BARREN_ATMOSPHERE_CHANCE: f64 = 0.01;

/// Sub-Earths almost never hold on to an atmosphere
pub const SUB_EARTH_ATMOSPHERE_CHANCE: f64 = 0.001;

/// Mass and radius in Earth units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bulk {
    pub mass: f64,
    pub radius: f64,
}

/// Draw mass and radius for a planet type
///
/// | Type | Mass (M⊕) | Radius |
/// |---|---|---|
/// | Sub-Earth | U(0.001, 0.5) | rocky, CMF U(0, 0.1), × U(0.90, 1.00) |
/// | Terrestrial | U(0.1, 2.0) | rocky, CMF Tri(0.1, 0.26, 0.4), × U(0.95, 1.05) |
/// | Neptunian | Tri(3, 10, 30) | M^0.55 × U(0.95, 1.05) |
/// | Gas giant | Tri(30, 100, 600) | (138.6627·M^0.01 − 135.6763) × U(0.98, 1.02) |
pub fn sample_bulk(rng: &mut impl Rng, planet_type: PlanetType) -> Bulk {
    match planet_type {
        PlanetType::SubEarth => {
            let mass = sample_uniform(rng, 0.001, 0.5);
            let cmf = sample_uniform(rng, 0.0, 0.1);
            let radius = rocky_radius(mass, cmf) * sample_uniform(rng, 0.90, 1.00);
            Bulk { mass, radius }
        }
        PlanetType::Terrestrial => {
            let mass = sample_uniform(rng, 0.1, 2.0);
            let cmf = sample_triangular(rng, 0.1, 0.26, 0.4);
            let radius = rocky_radius(mass, cmf) * sample_uniform(rng, 0.95, 1.05);
            Bulk { mass, radius }
        }
        PlanetType::Neptunian => {
            let mass = sample_triangular(rng, 3.0, 10.0, 30.0);
            let radius = mass.powf(0.55) * sample_uniform(rng, 0.95, 1.05);
            Bulk { mass, radius }
        }
        PlanetType::GasGiant => {
            let mass = sample_triangular(rng, 30.0, 100.0, 600.0);
            // Fit flattens out near 11-12 R⊕ across the whole mass range
            let radius = (138.6627 * mass.powf(0.01) - 135.6763) * sample_uniform(rng, 0.98, 1.02);
            Bulk { mass, radius }
        }
    }
}

/// Probability that a rocky planet keeps an atmosphere at this orbit
pub fn atmosphere_chance(star: &Star, planet_type: PlanetType, semi_major_axis: Length) -> f64 {
    match planet_type {
        PlanetType::SubEarth => SUB_EARTH_ATMOSPHERE_CHANCE,
        _ if star.habitable_zone.contains(semi_major_axis.to_au()) => HABITABLE_ATMOSPHERE_CHANCE,
        _ => BARREN_ATMOSPHERE_CHANCE,
    }
}

/// Generate a planet, drawing its type from the host's type table
///
/// # Arguments
/// * `star` - Host star
/// * `slot` - 1-based position in the system, appended to the star name
/// * `semi_major_axis` - Orbit of the planet
///
/// # Errors
/// Propagates atmosphere errors, which only arise from an invalid composition
/// or greenhouse factor.
pub fn generate_planet(
    rng: &mut impl Rng,
    star: &Star,
    slot: usize,
    semi_major_axis: Length,
) -> Result<Planet> {
    let planet_type = PlanetType::sample(rng, star.mass);
    generate_planet_of_type(rng, star, planet_type, slot, semi_major_axis)
}

/// Generate a planet of a fixed type
pub fn generate_planet_of_type(
    rng: &mut impl Rng,
    star: &Star,
    planet_type: PlanetType,
    slot: usize,
    semi_major_axis: Length,
) -> Result<Planet> {
    let Bulk { mass, radius } = sample_bulk(rng, planet_type);
    let gravity = surface_gravity(mass, radius);
    let density = planet_density(mass, radius);
    let sma_au = semi_major_axis.to_au();

    let atmosphere: Atmosphere = if planet_type.is_giant() {
        gas_giant_atmosphere(rng, star.luminosity, sma_au, gravity)?
    } else {
        let chance = atmosphere_chance(star, planet_type, semi_major_axis);
        terrestrial_atmosphere(rng, star.luminosity, sma_au, chance, gravity)?
    };

    let mass = Mass::from_earth_masses(mass);
    let radius = Length::from_earth_radii(radius);
    let rotation = tilt_and_spin(rng, semi_major_axis, radius, star.mass, mass, star.age);

    let moons = rng.random_range(planet_type.moon_range());

    Ok(Planet {
        name: format!("{}{}", star.name, slot),
        parent: star.name.clone(),
        planet_type,
        mass,
        semi_major_axis,
        axial_tilt: rotation.axial_tilt,
        rotation_period: rotation.period,
        tidally_locked: rotation.state == TidalState::Locked,
        radius,
        density,
        atmosphere,
        moons,
        gravity,
    })
}

