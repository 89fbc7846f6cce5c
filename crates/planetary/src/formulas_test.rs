use approx::assert_relative_eq;

use crate::composition::{Composition, Gas};
use crate::error::AtmosphereError;
use crate::formulas::*;

// ============================================================================
// Bulk properties
// ============================================================================

#[test]
fn earth_density_and_gravity() {
    let rho = planet_density(1.0, 1.0);
    assert!((5400.0..5600.0).contains(&rho), "Earth density {}", rho);
    assert_relative_eq!(surface_gravity(1.0, 1.0), 1.0);
    assert_relative_eq!(surface_gravity(4.0, 2.0), 1.0);
}

#[test]
fn radius_and_density_are_inverse() {
    let rho = planet_density(3.2, 1.4);
    assert_relative_eq!(planet_radius(3.2, rho), 1.4, max_relative = 1e-12);
}

#[test]
fn rocky_radius_shrinks_with_core_fraction() {
    assert_relative_eq!(rocky_radius(1.0, 0.0), 1.07);
    assert_relative_eq!(rocky_radius(1.0, 1.0), 0.86);
    assert!(rocky_radius(2.0, 0.3) > rocky_radius(1.0, 0.3));
}

#[test]
fn earth_escape_velocity() {
    let v = escape_velocity(1.0, 1.0);
    assert!((11_100.0..11_300.0).contains(&v), "escape velocity {}", v);
}

#[test]
fn roche_limits() {
    // Earth-Moon: fluid limit ~18,000 km, rigid ~9,500 km
    let rigid = roche_limit_rigid(1.0, 5514.0, 3344.0);
    let fluid = roche_limit_fluid(1.0, 5514.0, 3344.0);
    assert!((9.0e6..1.0e7).contains(&rigid), "rigid {}", rigid);
    assert!((1.7e7..1.9e7).contains(&fluid), "fluid {}", fluid);
    assert_relative_eq!(fluid / rigid, 2.44 / 1.26, max_relative = 1e-12);
}

// ============================================================================
// Orbits
// ============================================================================

#[test]
fn earth_year() {
    let period = orbital_period(units::AU_TO_M, units::SOLAR_MASS_KG);
    let days = period / units::SECONDS_PER_DAY;
    assert!((365.0..366.0).contains(&days), "year is {} days", days);
}

#[test]
fn period_and_semi_major_axis_are_inverse() {
    let a = 7.5e10;
    let period = orbital_period(a, 1.2e30);
    assert_relative_eq!(semi_major_axis_from_period(period, 1.2e30), a, max_relative = 1e-12);
}

// ============================================================================
// Temperatures
// ============================================================================

#[test]
fn earth_equilibrium_temperature() {
    let t = equilibrium_temperature(0.3, 1.0, 1.0);
    assert!((250.0..260.0).contains(&t), "T_eq {}", t);
}

#[test]
fn equilibrium_temperature_falls_with_distance() {
    let near = equilibrium_temperature(0.3, 1.0, 0.5);
    let far = equilibrium_temperature(0.3, 1.0, 2.0);
    // T ∝ d^-1/2
    assert_relative_eq!(near / far, 2.0, max_relative = 1e-12);
}

#[test]
fn greenhouse_warming() {
    assert_relative_eq!(atmospheric_temperature(255.0, 0.0).unwrap(), 255.0);
    let warm = atmospheric_temperature(255.0, 1.0).unwrap();
    assert_relative_eq!(warm, 255.0 * 2f64.powf(0.25));
}

#[test]
fn greenhouse_factor_of_two_or_more_fails() {
    assert_eq!(
        atmospheric_temperature(255.0, 2.0),
        Err(AtmosphereError::DomainSampling { eta: 2.0 })
    );
    assert!(atmospheric_temperature(255.0, 2.5).is_err());
    assert!(atmospheric_temperature(255.0, f64::NAN).is_err());
    assert!(atmospheric_temperature(255.0, 1.99).is_ok());
}

// ============================================================================
// Scale height
// ============================================================================

#[test]
fn earth_like_scale_height() {
    let air = Composition::new([(Gas::N2, 0.78), (Gas::O2, 0.21), (Gas::Other, 0.01)]).unwrap();
    let mu = mean_molecular_mass(&air);
    let h = scale_height(288.0, 1.0, mu);
    assert!((8.0..9.0).contains(&h), "scale height {} km", h);
}

#[test]
fn mean_molecular_mass_is_fraction_weighted() {
    let c = Composition::new([(Gas::H2, 0.5), (Gas::He, 0.5)]).unwrap();
    assert_relative_eq!(
        mean_molecular_mass(&c),
        0.5 * Gas::H2.molecular_mass() + 0.5 * Gas::He.molecular_mass()
    );
}
