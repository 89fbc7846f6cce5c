//! Planet generation
//!
//! Physical formulas, atmosphere models, rotation and the per-type bulk
//! samplers that turn a host star and an orbit into a [`Planet`].

pub mod atmosphere;
pub mod composition;
pub mod dynamics;
pub mod error;
pub mod formulas;
pub mod generation;
pub mod planet;
pub mod planet_type;

pub use atmosphere::{Atmosphere, gas_giant_atmosphere, terrestrial_atmosphere};
pub use composition::{Composition, Gas};
pub use dynamics::{Rotation, TidalState, tidal_lock_timescale, tidal_state, tilt_and_spin};
pub use error::AtmosphereError;
pub use generation::{generate_planet, generate_planet_of_type};
pub use planet::Planet;
pub use planet_type::PlanetType;

#[cfg(test)]
mod atmosphere_test;
#[cfg(test)]
mod formulas_test;
#[cfg(test)]
mod generation_test;
#[cfg(test)]
mod planet_type_test;
