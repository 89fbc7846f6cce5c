//! Output records for generated star systems and galaxies

pub mod galaxy;
pub mod position;
pub mod system;

pub use galaxy::Galaxy;
pub use position::GalacticPosition;
pub use system::StarSystem;

// Re-export the records a system is built from
pub use planetary::{Atmosphere, Composition, Gas, Planet, PlanetType};
pub use stellar::{HabitableZone, SpectralClass, Star};
