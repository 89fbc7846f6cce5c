//! Planet record

use std::fmt;

use serde::{Deserialize, Serialize};
use units::{Length, Mass, Time};

use crate::atmosphere::Atmosphere;
use crate::formulas::{escape_velocity, roche_limit_fluid, roche_limit_rigid};
use crate::planet_type::PlanetType;

/// A fully generated planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    /// Host star name plus the 1-based slot, e.g. `0042A3`
    pub name: String,
    /// Name of the host star
    pub parent: String,
    pub planet_type: PlanetType,
    pub mass: Mass,
    pub semi_major_axis: Length,
    /// Axial tilt in degrees
    pub axial_tilt: f64,
    /// Sidereal rotation period
    pub rotation_period: Time,
    /// Spin synchronised to the orbit
    pub tidally_locked: bool,
    pub radius: Length,
    /// Bulk density (kg/m³)
    pub density: f64,
    pub atmosphere: Atmosphere,
    pub moons: u32,
    /// Surface gravity (Earth g)
    pub gravity: f64,
}

impl Planet {
    /// Surface escape velocity in m/s
    pub fn escape_velocity(&self) -> f64 {
        escape_velocity(self.mass.to_earth_masses(), self.radius.to_earth_radii())
    }

    /// Closest approach of a rigid satellite of the given density before it breaks up
    pub fn roche_limit_rigid(&self, satellite_density: f64) -> Length {
        Length::from_meters(roche_limit_rigid(
            self.radius.to_earth_radii(),
            self.density,
            satellite_density,
        ))
    }

    /// As [`Planet::roche_limit_rigid`] for a fluid satellite
    pub fn roche_limit_fluid(&self, satellite_density: f64) -> Length {
        Length::from_meters(roche_limit_fluid(
            self.radius.to_earth_radii(),
            self.density,
            satellite_density,
        ))
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {:.3} AU {:.2} M⊕ {:.2} R⊕ {:.2} g {:.0} K {} moons",
            self.name,
            self.planet_type.code(),
            self.semi_major_axis.to_au(),
            self.mass.to_earth_masses(),
            self.radius.to_earth_radii(),
            self.gravity,
            self.atmosphere.temperature,
            self.moons,
        )
    }
}
