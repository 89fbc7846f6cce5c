//! Main-sequence star generation
//!
//! Stellar mass is the only free parameter besides age and metallicity;
//! everything else follows from simple power-law scalings.
//!
//! # References
//! - Duric (2004) - "Advanced Astrophysics", mass-luminosity relation
//! - Kopparapu et al. (2013) - habitable zone flux limits

use rand::Rng;
use tracing::trace;
use units::{Length, Mass, Time};

use crate::error::Result;
use crate::sampling::{sample_triangular, sample_uniform};
use crate::spectral::SpectralClass;
use crate::star::{HabitableZone, Star};

/// Absolute visual magnitude of the Sun
pub const SOLAR_ABSOLUTE_MAGNITUDE: f64 = 4.83;

/// Effective temperature of the Sun (K)
pub const SOLAR_TEMPERATURE: f64 = 5778.0;

/// Sampled stellar mass range and mode (M☉)
pub const MASS_RANGE: (f64, f64, f64) = (0.1, 0.4, 3.0);

/// Sampled metallicity range and mode ([Fe/H])
pub const METALLICITY_RANGE: (f64, f64, f64) = (-1.0, 0.0, 0.5);

/// Main-sequence lifespan in years: `1e10 · M^−2.5`
pub fn main_sequence_lifespan(mass: f64) -> f64 {
    1e10 * (1.0 / mass).powf(2.5)
}

/// Surface temperature in Kelvin: `5778 · M^0.54`
pub fn surface_temperature(mass: f64) -> f64 {
    SOLAR_TEMPERATURE * mass.powf(0.54)
}

/// Luminosity in L☉ from a three-segment mass-luminosity relation
///
/// | Mass (M☉)    | L (L☉)          |
/// |--------------|-----------------|
/// | < 0.43       | 0.23 · M^2.3    |
/// | 0.43 – 2.0   | M^4             |
/// | > 2.0        | 1.4 · M^3.5     |
///
/// The segments do not join exactly: at 0.43 M☉ the low-mass branch gives
/// 0.0330 L☉ and the middle branch 0.0342 L☉, a 3.5% step.
pub fn calculate_luminosity(mass: f64) -> f64 {
    match mass {
        m if m < 0.43 => 0.23 * m.powf(2.3),
        m if m <= 2.0 => m.powi(4),
        m => 1.4 * m.powf(3.5),
    }
}

/// Absolute magnitude from luminosity (L☉)
pub fn absolute_magnitude(luminosity: f64) -> f64 {
    SOLAR_ABSOLUTE_MAGNITUDE - 2.5 * luminosity.log10()
}

/// Apparent magnitude of a star seen from `distance_pc` parsecs
pub fn apparent_magnitude(absolute_magnitude: f64, distance_pc: f64) -> f64 {
    absolute_magnitude - 5.0 + 5.0 * distance_pc.log10()
}

/// Stellar radius in R☉: `M^0.8` up to one solar mass, `M^0.57` above
pub fn stellar_radius(mass: f64) -> f64 {
    if mass <= 1.0 {
        mass.powf(0.8)
    } else {
        mass.powf(0.57)
    }
}

/// Catalog name for the star at `index`: zero-padded to four digits plus `A`
pub fn star_name(index: usize) -> String {
    format!("{:04}A", index)
}

/// Generate a main-sequence star
///
/// Draw order: mass, age, metallicity. Everything else is derived.
///
/// # Errors
/// `StellarError::OutOfRange` if the derived temperature falls outside the
/// modeled spectral bands. Masses above ~2.76 M☉ are hotter than 10,000 K,
/// so roughly 0.8% of draws end here.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use stellar::generate_star;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// if let Ok(star) = generate_star(&mut rng, 0) {
///     assert_eq!(star.name, "0000A");
///     assert!(star.age < star.lifespan);
/// }
/// ```
pub fn generate_star(rng: &mut impl Rng, index: usize) -> Result<Star> {
    let (mass_min, mass_mode, mass_max) = MASS_RANGE;
    let mass = sample_triangular(rng, mass_min, mass_mode, mass_max);

    let lifespan = Time::from_years(main_sequence_lifespan(mass));
    let age = Time::from_years(sample_uniform(rng, 0.0, lifespan.to_years()));

    let (feh_min, feh_mode, feh_max) = METALLICITY_RANGE;
    let metallicity = sample_triangular(rng, feh_min, feh_mode, feh_max);

    let temperature = surface_temperature(mass);
    let spectral_class = SpectralClass::from_temperature(temperature)?;
    let lum = calculate_luminosity(mass);

    let star = Star {
        name: star_name(index),
        temperature,
        mass: Mass::from_solar_masses(mass),
        age,
        metallicity,
        magnitude: absolute_magnitude(lum),
        luminosity: lum,
        radius: Length::from_solar_radii(stellar_radius(mass)),
        habitable_zone: HabitableZone::from_luminosity(lum),
        lifespan,
        spectral_class,
    };

    trace!(star = %star, "generated star");

    Ok(star)
}
