use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::Mass;

use crate::planet_type::PlanetType;

#[test]
fn weights_sum_to_one_in_every_band() {
    for m in [0.1, 0.49, 0.5, 1.0, 2.0, 2.01, 3.0] {
        let weights = PlanetType::classification_weights(Mass::from_solar_masses(m));
        let total: f64 = weights.iter().sum();
        assert!((total - 1.0).abs() < 1e-12, "weights for {} M☉ sum to {}", m, total);
    }
}

#[test]
fn band_edges() {
    let low = PlanetType::classification_weights(Mass::from_solar_masses(0.499));
    let mid = PlanetType::classification_weights(Mass::from_solar_masses(0.5));
    let top = PlanetType::classification_weights(Mass::from_solar_masses(2.0));
    let high = PlanetType::classification_weights(Mass::from_solar_masses(2.001));

    assert_eq!(low, [0.35, 0.40, 0.18, 0.07]);
    assert_eq!(mid, [0.25, 0.35, 0.25, 0.15]);
    assert_eq!(top, mid);
    assert_eq!(high, [0.20, 0.25, 0.30, 0.25]);
}

#[test]
fn heavier_stars_host_more_giants() {
    let mut rng = ChaChaRng::seed_from_u64(20);

    let count_giants = |rng: &mut ChaChaRng, m: f64| {
        (0..5000)
            .filter(|_| PlanetType::sample(rng, Mass::from_solar_masses(m)) == PlanetType::GasGiant)
            .count()
    };

    let dwarf = count_giants(&mut rng, 0.2);
    let bright = count_giants(&mut rng, 2.5);
    assert!(bright > 2 * dwarf, "{} vs {} giants", bright, dwarf);
}

#[test]
fn moon_ranges() {
    assert_eq!(PlanetType::SubEarth.moon_range(), 0..=1);
    assert_eq!(PlanetType::Terrestrial.moon_range(), 0..=1);
    assert_eq!(PlanetType::Neptunian.moon_range(), 5..=29);
    assert_eq!(PlanetType::GasGiant.moon_range(), 30..=119);
}

#[test]
fn codes_round_trip() {
    for t in PlanetType::ALL {
        assert_eq!(t.code().parse::<PlanetType>().unwrap(), t);
    }
    assert!("X".parse::<PlanetType>().is_err());
}

#[test]
fn serializes_as_code() {
    assert_eq!(serde_json::to_string(&PlanetType::GasGiant).unwrap(), "\"G\"");
    let t: PlanetType = serde_json::from_str("\"S\"").unwrap();
    assert_eq!(t, PlanetType::SubEarth);
}
