//! Host star generation, spectral classification and the random draw helpers
//! shared by the rest of the pipeline.

pub mod error;
pub mod generation;
pub mod sampling;
pub mod spectral;
pub mod star;


pub use error::StellarError;
pub use generation::{
    absolute_magnitude, apparent_magnitude, calculate_luminosity, generate_star,
    main_sequence_lifespan, star_name, stellar_radius, surface_temperature,
};
pub use spectral::{SpectralClass, SpectralType, stellar_class};
pub use star::{HabitableZone, Star};
