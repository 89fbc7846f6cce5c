use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar::{HabitableZone, SpectralClass, Star};
use units::{Length, Mass, Time};

use crate::composition::{Composition, Gas};
use crate::generation::{
    BARREN_ATMOSPHERE_CHANCE, HABITABLE_ATMOSPHERE_CHANCE, SUB_EARTH_ATMOSPHERE_CHANCE,
    atmosphere_chance, generate_planet, generate_planet_of_type, sample_bulk,
};
use crate::planet_type::PlanetType;

fn sun() -> Star {
    Star {
        name: "0007A".to_string(),
        temperature: 5778.0,
        mass: Mass::from_solar_masses(1.0),
        age: Time::from_gyr(4.6),
        metallicity: 0.0,
        magnitude: 4.83,
        luminosity: 1.0,
        radius: Length::from_solar_radii(1.0),
        habitable_zone: HabitableZone::from_luminosity(1.0),
        lifespan: Time::from_gyr(10.0),
        spectral_class: SpectralClass::from_temperature(5778.0).unwrap(),
    }
}

// ============================================================================
// Bulk properties per type
// ============================================================================

#[test]
fn bulk_ranges_per_type() {
    let mut rng = ChaChaRng::seed_from_u64(30);

    for _ in 0..1000 {
        let s = sample_bulk(&mut rng, PlanetType::SubEarth);
        assert!((0.001..0.5).contains(&s.mass));
        assert!(s.radius > 0.0 && s.radius < 1.0);

        let t = sample_bulk(&mut rng, PlanetType::Terrestrial);
        assert!((0.1..2.0).contains(&t.mass));
        assert!((0.4..1.4).contains(&t.radius), "terrestrial radius {}", t.radius);

        let n = sample_bulk(&mut rng, PlanetType::Neptunian);
        assert!((3.0..=30.0).contains(&n.mass));
        assert!((1.7..7.0).contains(&n.radius), "neptunian radius {}", n.radius);

        let g = sample_bulk(&mut rng, PlanetType::GasGiant);
        assert!((30.0..=600.0).contains(&g.mass));
        assert!((7.0..14.0).contains(&g.radius), "giant radius {}", g.radius);
    }
}

#[test]
fn atmosphere_chance_by_orbit() {
    let star = sun();
    let inside = Length::from_au(1.0);
    let outside = Length::from_au(5.0);

    assert_eq!(
        atmosphere_chance(&star, PlanetType::Terrestrial, inside),
        HABITABLE_ATMOSPHERE_CHANCE
    );
    assert_eq!(
        atmosphere_chance(&star, PlanetType::Terrestrial, outside),
        BARREN_ATMOSPHERE_CHANCE
    );
    assert_eq!(
        atmosphere_chance(&star, PlanetType::SubEarth, inside),
        SUB_EARTH_ATMOSPHERE_CHANCE
    );
    // The zone edges themselves are outside
    let edge = Length::from_au(star.habitable_zone.inner);
    assert_eq!(
        atmosphere_chance(&star, PlanetType::Terrestrial, edge),
        BARREN_ATMOSPHERE_CHANCE
    );
}

// ============================================================================
// Whole planets
// ============================================================================

#[test]
fn habitable_zone_switches_atmosphere_odds() {
    let mut rng = ChaChaRng::seed_from_u64(31);
    let star = sun();
    let trials = 2000;

    let airless = |rng: &mut ChaChaRng, au: f64| {
        (0..trials)
            .filter(|_| {
                generate_planet_of_type(rng, &star, PlanetType::Terrestrial, 1, Length::from_au(au))
                    .unwrap()
                    .atmosphere
                    .is_airless()
            })
            .count() as f64
            / trials as f64
    };

    let inside = airless(&mut rng, 1.0);
    let outside = airless(&mut rng, 5.0);

    assert!((inside - 0.05).abs() < 0.02, "airless inside HZ: {}", inside);
    assert!((outside - 0.99).abs() < 0.01, "airless outside HZ: {}", outside);
}

#[test]
fn giants_always_carry_envelopes() {
    let mut rng = ChaChaRng::seed_from_u64(32);
    let star = sun();

    for planet_type in [PlanetType::Neptunian, PlanetType::GasGiant] {
        for _ in 0..200 {
            let planet =
                generate_planet_of_type(&mut rng, &star, planet_type, 2, Length::from_au(5.0))
                    .unwrap();
            assert_eq!(planet.atmosphere.pressure, 1.0);
            assert_eq!(planet.atmosphere.composition.dominant(), Some(Gas::H2));
            assert!(planet_type.moon_range().contains(&planet.moons));
        }
    }
}

#[test]
fn planet_fields_are_consistent() {
    let mut rng = ChaChaRng::seed_from_u64(33);
    let star = sun();

    for slot in 1..=300 {
        let sma = Length::from_au(0.05 * slot as f64);
        let planet = generate_planet(&mut rng, &star, slot, sma).unwrap();

        assert_eq!(planet.name, format!("0007A{}", slot));
        assert_eq!(planet.parent, "0007A");
        assert_eq!(planet.semi_major_axis, sma);
        assert!(planet.density > 0.0);
        assert!(planet.gravity > 0.0);
        assert!(planet.rotation_period.to_days() > 0.0);
        assert!(planet.moons <= 119);

        let c = &planet.atmosphere.composition;
        assert!((c.total() - 1.0).abs() <= Composition::TOLERANCE);
        assert!(c.iter().all(|(_, f)| f >= 0.0));
        assert!(planet.atmosphere.eta < 2.0);
    }
}

#[test]
fn close_in_planets_lock() {
    let mut rng = ChaChaRng::seed_from_u64(34);
    let star = sun();

    let planet =
        generate_planet_of_type(&mut rng, &star, PlanetType::Terrestrial, 1, Length::from_au(0.01))
            .unwrap();
    assert!(planet.tidally_locked);
    assert!(planet.axial_tilt < 5.0);
}

#[test]
fn same_seed_same_planet() {
    let star = sun();
    let mut a = ChaChaRng::seed_from_u64(35);
    let mut b = ChaChaRng::seed_from_u64(35);

    let pa = generate_planet(&mut a, &star, 3, Length::from_au(1.2)).unwrap();
    let pb = generate_planet(&mut b, &star, 3, Length::from_au(1.2)).unwrap();
    assert_eq!(pa, pb);
}
