//! Strongly typed physical quantities shared across the generators.

pub mod length;
pub mod mass;
pub mod time;

mod quantity;


pub use length::{AU_TO_M, EARTH_RADIUS_M, Length, SOLAR_RADIUS_M};
pub use mass::{EARTH_MASS_KG, EARTH_MASSES_PER_SOLAR, Mass, SOLAR_MASS_KG};
pub use time::{DAYS_PER_YEAR, SECONDS_PER_DAY, SECONDS_PER_YEAR, Time};
