//! Star system and galaxy generation
//!
//! A system draws, in order: the star, the planet count, the orbits, each
//! planet in turn, and finally its position in the disc. A galaxy gives
//! every catalog index its own ChaCha stream under the galaxy seed, so
//! systems can be generated in parallel and still come out identical.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use rayon::prelude::*;
use star_system::{Galaxy, StarSystem};
use stellar::generate_star;
use stellar::sampling::{sample_exponential, sample_weighted_index};
use tracing::{debug, info, warn};
use units::{Length, Mass};

use planetary::generate_planet;

use crate::config::GalaxyConfig;
use crate::error::{GenerationError, Result};
use crate::positioning::GalacticDisc;

/// Probability of 1 through 15 planets
pub const PLANET_COUNT_WEIGHTS: [f64; 15] = [
    0.05, 0.07, 0.09, 0.10, 0.11, 0.11, 0.10, 0.09, 0.08, 0.06, 0.05, 0.04, 0.02, 0.02, 0.01,
];

/// Mean of the raw orbit draw before scaling
const ORBIT_MEAN: f64 = 0.8;

/// Raw orbit draws are stretched by this many AU per √M☉
const ORBIT_SCALE: f64 = 10.0;

/// Draw the number of planets, 1 to 15. One draw.
pub fn sample_planet_count(rng: &mut impl Rng) -> usize {
    sample_weighted_index(rng, &PLANET_COUNT_WEIGHTS) + 1
}

/// Draw `count` orbits around a star of the given mass, innermost first
///
/// Each orbit is Exponential(0.8) × 10 × √M AU, so heavier stars spread
/// their planets wider.
pub fn sample_orbits(rng: &mut impl Rng, count: usize, star_mass: Mass) -> Vec<Length> {
    let scale = ORBIT_SCALE * star_mass.sqrt();
    let mut orbits: Vec<f64> = (0..count)
        .map(|_| sample_exponential(rng, ORBIT_MEAN) * scale)
        .collect();
    orbits.sort_by(f64::total_cmp);
    orbits.into_iter().map(Length::from_au).collect()
}

/// Generate one system with the default disc for `map_size`
///
/// Builds the disc tables on every call; use [`generate_system_in`] when
/// generating many systems.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use system_generator::generate_system;
///
/// let mut rng = ChaChaRng::seed_from_u64(0);
/// if let Ok(system) = generate_system(&mut rng, 500, 0) {
///     assert_eq!(system.star.name, "0000A");
///     assert!(!system.planets.is_empty());
/// }
/// ```
pub fn generate_system(rng: &mut impl Rng, map_size: u32, index: usize) -> Result<StarSystem> {
    let defaults = GalaxyConfig::default();
    let disc = GalacticDisc::new(map_size, defaults.sigma_xy, defaults.sigma_z)?;
    generate_system_in(rng, &disc, index)
}

/// Generate one system placed in an existing disc
///
/// # Errors
/// - `Stellar` if the star falls outside the classified temperature bands
/// - `Atmosphere` if a planet's atmosphere cannot be built
pub fn generate_system_in(
    rng: &mut impl Rng,
    disc: &GalacticDisc,
    index: usize,
) -> Result<StarSystem> {
    let star = generate_star(rng, index)?;

    let count = sample_planet_count(rng);
    let orbits = sample_orbits(rng, count, star.mass);

    let planets = orbits
        .into_iter()
        .enumerate()
        .map(|(i, orbit)| generate_planet(rng, &star, i + 1, orbit))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let position = disc.sample(rng);

    debug!(
        star = %star.name,
        class = %star.spectral_class,
        planets = planets.len(),
        "generated system"
    );

    Ok(StarSystem {
        position,
        star,
        planets,
    })
}

/// Random stream for one catalog index
///
/// Every index shares the galaxy key and reads its own ChaCha stream.
pub fn system_rng(seed: u64, index: usize) -> ChaChaRng {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    rng.set_stream(index as u64);
    rng
}

/// Generate a galaxy in parallel
///
/// Indices whose star cannot be classified are logged and left out; any
/// other failure aborts the run.
pub fn generate_galaxy(config: &GalaxyConfig) -> Result<Galaxy> {
    let disc = GalacticDisc::from_config(config)?;

    info!(
        seed = config.seed,
        systems = config.systems,
        map_size = config.map_size,
        "generating galaxy"
    );

    let generated = (0..config.systems)
        .into_par_iter()
        .map(|index| {
            let mut rng = system_rng(config.seed, index);
            match generate_system_in(&mut rng, &disc, index) {
                Ok(system) => Ok(Some(system)),
                Err(GenerationError::Stellar(err)) => {
                    warn!(index, error = %err, "skipping system");
                    Ok(None)
                }
                Err(err) => Err(err),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    let systems: Vec<StarSystem> = generated.into_iter().flatten().collect();
    let galaxy = Galaxy::new(config.seed, systems);

    info!(
        systems = galaxy.len(),
        skipped = config.systems - galaxy.len(),
        planets = galaxy.planet_count(),
        "galaxy complete"
    );

    Ok(galaxy)
}

/// Generate `count` systems with the default disc
pub fn generate_galaxy_with_count(seed: u64, count: usize) -> Result<Galaxy> {
    generate_galaxy(&GalaxyConfig::with_seed(seed, count))
}
