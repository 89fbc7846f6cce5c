//! Galaxy generation
//!
//! Ties stars, planets and disc positions together into [`StarSystem`]s and
//! generates whole galaxies from a [`GalaxyConfig`].
//!
//! # Example
//! ```
//! use system_generator::generate_galaxy_with_count;
//!
//! let galaxy = generate_galaxy_with_count(42, 20).unwrap();
//! assert!(galaxy.len() <= 20);
//! for system in &galaxy.systems {
//!     assert!(system.is_ordered());
//! }
//! ```

pub mod config;
pub mod error;
pub mod generation;
pub mod positioning;

pub use config::{GalaxyConfig, seed_from_name};
pub use error::{ConfigError, GenerationError};
pub use generation::{
    PLANET_COUNT_WEIGHTS, generate_galaxy, generate_galaxy_with_count, generate_system,
    generate_system_in, sample_orbits, sample_planet_count, system_rng,
};
pub use positioning::{AxisTable, GalacticDisc};

pub use star_system::{Galaxy, StarSystem};
