//! Axial tilt and rotation
//!
//! A planet whose tidal locking timescale is shorter than the system age
//! spins once per orbit with almost no tilt. Everything else gets a drawn
//! obliquity and day length.

use rand::Rng;
use serde::{Deserialize, Serialize};
use stellar::sampling::{sample_triangular, sample_uniform};
use units::{Length, Mass, Time};

use crate::formulas::orbital_period;

/// Planets heavier than this (M⊕) spin faster on average
pub const FAST_SPIN_MASS: f64 = 8.0;

/// Tilts above this (degrees) are flipped toward retrograde
const RETROGRADE_TILT: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TidalState {
    Locked,
    Free,
}

/// Tidal locking timescale in years
///
/// τ = 6e10 · a⁶ · R · 3e10 / (M★ · Mp²), with every input in SI.
/// Rigidity and tidal dissipation are folded into the two constants.
pub fn tidal_lock_timescale(
    semi_major_axis: Length,
    radius: Length,
    star_mass: Mass,
    planet_mass: Mass,
) -> f64 {
    let a = semi_major_axis.to_m();
    let mp = planet_mass.to_kg();
    6.0e10 * a.powi(6) * radius.to_m() * 3.0e10 / (star_mass.to_kg() * mp * mp)
}

/// Locked when the timescale does not exceed the age
pub fn tidal_state(
    semi_major_axis: Length,
    radius: Length,
    star_mass: Mass,
    planet_mass: Mass,
    age: Time,
) -> TidalState {
    if tidal_lock_timescale(semi_major_axis, radius, star_mass, planet_mass) <= age.to_years() {
        TidalState::Locked
    } else {
        TidalState::Free
    }
}

/// Obliquity and spin of a planet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Axial tilt in degrees
    pub axial_tilt: f64,
    pub period: Time,
    pub state: TidalState,
}

/// Draw axial tilt and rotation period
///
/// Locked planets take a tilt from U(0, 5) and rotate once per orbit.
/// Free planets draw a tilt from Tri(0, 15, 55), with anything past 40°
/// pushed a further U(25, 125) degrees, and a sidereal day from
/// Tri(0.08, 0.7, 3.0) days, or Tri(0.08, 0.2, 1.0) above 8 M⊕.
pub fn tilt_and_spin(
    rng: &mut impl Rng,
    semi_major_axis: Length,
    radius: Length,
    star_mass: Mass,
    planet_mass: Mass,
    age: Time,
) -> Rotation {
    let state = tidal_state(semi_major_axis, radius, star_mass, planet_mass, age);

    match state {
        TidalState::Locked => {
            let axial_tilt = sample_uniform(rng, 0.0, 5.0);
            let period = orbital_period(semi_major_axis.to_m(), star_mass.to_kg());
            Rotation {
                axial_tilt,
                period: Time::from_seconds(period),
                state,
            }
        }
        TidalState::Free => {
            let mut axial_tilt = sample_triangular(rng, 0.0, 15.0, 55.0);
            if axial_tilt > RETROGRADE_TILT {
                axial_tilt += sample_uniform(rng, 25.0, 125.0);
            }

            let days = if planet_mass.to_earth_masses() < FAST_SPIN_MASS {
                sample_triangular(rng, 0.08, 0.7, 3.0)
            } else {
                sample_triangular(rng, 0.08, 0.2, 1.0)
            };

            Rotation {
                axial_tilt,
                period: Time::from_days(days),
                state,
            }
        }
    }
}
