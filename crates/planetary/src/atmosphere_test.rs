use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::atmosphere::{
    AIRLESS_ALBEDO, Atmosphere, RUNAWAY_ETA_CEILING, gas_giant_atmosphere, terrestrial_atmosphere,
};
use crate::composition::{Composition, Gas};
use crate::formulas::equilibrium_temperature;

// ============================================================================
// Terrestrial model
// ============================================================================

#[test]
fn zero_chance_is_always_airless() {
    let mut rng = ChaChaRng::seed_from_u64(1);

    for _ in 0..200 {
        let atm = terrestrial_atmosphere(&mut rng, 1.0, 1.0, 0.0, 1.0).unwrap();
        assert!(atm.is_airless());
        assert_eq!(atm.composition, Composition::airless());
        assert_eq!(atm.scale_height, 0.0);
        assert_eq!(atm.eta, 0.0);
        assert_eq!(atm.albedo, AIRLESS_ALBEDO);
        assert_relative_eq!(atm.temperature, equilibrium_temperature(0.2, 1.0, 1.0));
    }
}

#[test]
fn certain_chance_always_has_air() {
    let mut rng = ChaChaRng::seed_from_u64(2);

    for _ in 0..2000 {
        let atm = terrestrial_atmosphere(&mut rng, 1.0, 1.0, 1.0, 1.0).unwrap();
        assert!(!atm.is_airless());
        assert!(atm.pressure > 0.0);
        assert!(atm.scale_height > 0.0);
        assert!((0.0..1.0).contains(&atm.ocean));
        assert!((0.1..=0.8).contains(&atm.albedo), "albedo {}", atm.albedo);
        assert!(atm.temperature > 0.0);
    }
}

#[test]
fn terrestrial_composition_is_two_species_plus_other() {
    let mut rng = ChaChaRng::seed_from_u64(3);

    for _ in 0..2000 {
        let atm = terrestrial_atmosphere(&mut rng, 0.5, 0.7, 1.0, 0.8).unwrap();
        let c = &atm.composition;

        assert!((c.total() - 1.0).abs() <= Composition::TOLERANCE);
        assert!(c.iter().all(|(_, f)| f >= 0.0));
        assert_eq!(c.len(), 3, "composition {}", c);
        assert_eq!(c.fraction(Gas::H2), 0.0);
        assert_eq!(c.fraction(Gas::He), 0.0);

        // The primary species holds at least half the mass
        let primary = c.dominant().unwrap();
        assert_ne!(primary, Gas::Other);
        assert!(c.fraction(primary) >= 0.5);
        // Other is at most a tenth of what the primary leaves over
        assert!(c.fraction(Gas::Other) <= 0.1 * (1.0 - c.fraction(primary)) + 1e-12);
    }
}

#[test]
fn greenhouse_factor_stays_below_two() {
    let mut rng = ChaChaRng::seed_from_u64(4);
    let mut runaways = 0;

    for _ in 0..20_000 {
        let atm = terrestrial_atmosphere(&mut rng, 1.0, 1.0, 1.0, 1.0).unwrap();
        assert!(atm.eta < 2.0);

        if atm.eta == RUNAWAY_ETA_CEILING {
            runaways += 1;
            // Wald draws are positive so 10^p exceeds one atmosphere
            assert!(atm.pressure > 1.0);
        } else {
            assert!((0.3..1.0).contains(&atm.eta), "eta {}", atm.eta);
        }
    }

    // One in a thousand
    assert!((3..60).contains(&runaways), "{} runaways in 20000", runaways);
}

#[test]
fn greenhouse_warms_above_equilibrium() {
    let mut rng = ChaChaRng::seed_from_u64(5);

    for _ in 0..500 {
        let atm = terrestrial_atmosphere(&mut rng, 1.0, 1.0, 1.0, 1.0).unwrap();
        let teff = equilibrium_temperature(atm.albedo, 1.0, 1.0);
        assert!(atm.temperature > teff);
    }
}

// ============================================================================
// Gas giant model
// ============================================================================

#[test]
fn gas_giant_envelope_is_hydrogen_dominated() {
    let mut rng = ChaChaRng::seed_from_u64(6);

    for _ in 0..2000 {
        let atm = gas_giant_atmosphere(&mut rng, 1.0, 5.2, 2.5).unwrap();
        let c = &atm.composition;

        assert!((c.total() - 1.0).abs() <= Composition::TOLERANCE);
        assert!(c.fraction(Gas::He) >= 0.0);
        assert!((0.0..0.03).contains(&c.fraction(Gas::Other)));
        assert!(c.fraction(Gas::H2) >= 0.8 - 1e-12);
        assert_eq!(c.dominant(), Some(Gas::H2));

        assert_eq!(atm.pressure, 1.0);
        assert_eq!(atm.ocean, 0.0);
        assert!((0.4..0.6).contains(&atm.albedo));
        assert!(atm.eta < 2.0);
    }
}

#[test]
fn gas_giant_eta_centers_on_mean() {
    let mut rng = ChaChaRng::seed_from_u64(7);

    let etas: Vec<f64> = (0..5000)
        .map(|_| gas_giant_atmosphere(&mut rng, 1.0, 5.2, 2.5).unwrap().eta)
        .collect();
    let mean = etas.iter().sum::<f64>() / etas.len() as f64;

    // Rejection above 2 pulls the mean down only slightly
    assert!((mean - 1.65).abs() < 0.04, "mean eta {}", mean);
}

#[test]
fn light_envelope_has_tall_scale_height() {
    let mut rng = ChaChaRng::seed_from_u64(8);

    let giant = gas_giant_atmosphere(&mut rng, 1.0, 1.0, 1.0).unwrap();
    let rocky = terrestrial_atmosphere(&mut rng, 1.0, 1.0, 1.0, 1.0).unwrap();

    // H2/He is several times lighter than any terrestrial mix
    assert!(giant.scale_height > 2.0 * rocky.scale_height);
}

#[test]
fn atmosphere_serializes_camel_case() {
    let atm = Atmosphere::airless(1.0, 1.0);
    let json = serde_json::to_value(&atm).unwrap();

    assert!(json.get("scaleHeight").is_some());
    assert_eq!(json["composition"]["Other"].as_f64(), Some(1.0));

    let back: Atmosphere = serde_json::from_value(json).unwrap();
    assert_eq!(back, atm);
}
