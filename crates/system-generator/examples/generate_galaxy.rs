//! Generate a galaxy and print it as planet CSV or JSON
//!
//! Usage:
//!   cargo run -p system-generator --example generate_galaxy -- [CONFIG] [--json] [--seed N] [--systems N]
//!
//! Without a config file the defaults are used (seed 0, 1000 systems).
//! Set `RUST_LOG=system_generator=debug` for per-system logging.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use system_generator::{GalaxyConfig, generate_galaxy};
use tracing_subscriber::EnvFilter;

/// Procedural galaxy generator
#[derive(Parser, Debug)]
#[command(name = "generate_galaxy")]
#[command(about = "Generate a seeded galaxy and print one CSV row per planet")]
struct Args {
    /// TOML galaxy config; defaults are used when omitted
    config: Option<PathBuf>,

    /// Print the whole galaxy as JSON instead of CSV
    #[arg(long)]
    json: bool,

    /// Override the config seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of systems
    #[arg(long)]
    systems: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("system_generator=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => GalaxyConfig::load(path)?,
        None => GalaxyConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(systems) = args.systems {
        config.systems = systems;
    }

    let galaxy = generate_galaxy(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&galaxy)?);
        return Ok(());
    }

    println!(
        "star,class,x_pc,y_pc,z_pc,planet,type,sma_au,mass_earth,radius_earth,gravity_g,temp_k,pressure_atm,tilt_deg,day_days,locked,moons"
    );

    for system in &galaxy.systems {
        let star = &system.star;
        let pos = system.position;

        for planet in &system.planets {
            println!(
                "{},{},{:.2},{:.2},{:.2},{},{},{:.4},{:.4},{:.4},{:.3},{:.0},{:.3},{:.1},{:.3},{},{}",
                star.name,
                star.spectral_class,
                pos.x,
                pos.y,
                pos.z,
                planet.name,
                planet.planet_type.code(),
                planet.semi_major_axis.to_au(),
                planet.mass.to_earth_masses(),
                planet.radius.to_earth_radii(),
                planet.gravity,
                planet.atmosphere.temperature,
                planet.atmosphere.pressure,
                planet.axial_tilt,
                planet.rotation_period.to_days(),
                planet.tidally_locked,
                planet.moons,
            );
        }
    }

    Ok(())
}
