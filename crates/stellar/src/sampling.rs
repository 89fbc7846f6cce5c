//! Random draw helpers shared by every generator.
//!
//! Each helper consumes a fixed number of variates from the passed generator
//! (documented per function), so a seeded `ChaChaRng` reproduces a galaxy
//! bit-for-bit as long as the call order is preserved.

use std::f64::consts::PI;

use rand::Rng;

/// Sample uniformly from `[low, high)`. One draw.
pub fn sample_uniform(rng: &mut impl Rng, low: f64, high: f64) -> f64 {
    low + (high - low) * rng.random::<f64>()
}

/// Sample from a triangular distribution on `[left, right]` peaking at `mode`
///
/// Inverse transform sampling, one draw.
///
/// # Arguments
/// * `left` - Lower limit
/// * `mode` - Peak of the distribution, `left <= mode <= right`
/// * `right` - Upper limit
pub fn sample_triangular(rng: &mut impl Rng, left: f64, mode: f64, right: f64) -> f64 {
    let u: f64 = rng.random();
    let span = right - left;
    let split = (mode - left) / span;

    if u < split {
        left + (u * span * (mode - left)).sqrt()
    } else {
        right - ((1.0 - u) * span * (right - mode)).sqrt()
    }
}

/// Sample from a Gaussian (normal) distribution using Box-Muller transform
///
/// # Arguments
/// * `rng` - Random number generator
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
///
/// # Returns
/// A sample from the normal distribution N(mean, std_dev²). Two draws.
pub fn sample_gaussian(rng: &mut impl Rng, mean: f64, std_dev: f64) -> f64 {
    // 1 - u keeps the log argument in (0, 1]
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Sample from an exponential distribution with the given mean. One draw.
pub fn sample_exponential(rng: &mut impl Rng, mean: f64) -> f64 {
    let u: f64 = rng.random();
    -mean * (1.0 - u).ln()
}

/// Sample from a Wald (inverse Gaussian) distribution
///
/// Uses the transformation method of Michael, Schucany & Haas (1976).
/// Three draws (two for the normal variate, one for the acceptance roll).
///
/// # Arguments
/// * `mean` - Distribution mean μ, must be positive
/// * `scale` - Shape parameter λ, must be positive
pub fn sample_wald(rng: &mut impl Rng, mean: f64, scale: f64) -> f64 {
    let normal = sample_gaussian(rng, 0.0, 1.0);
    let y = normal * normal;
    let mu_y = mean * y;

    let x = mean + mean * mu_y / (2.0 * scale)
        - mean / (2.0 * scale) * (4.0 * scale * mu_y + mu_y * mu_y).sqrt();

    let u: f64 = rng.random();
    if u <= mean / (mean + x) {
        x
    } else {
        mean * mean / x
    }
}

/// Pick an index with probability proportional to its weight. One draw.
///
/// Weights need not be normalized. Falls back to the last index if
/// floating-point accumulation leaves the roll uncovered.
pub fn sample_weighted_index(rng: &mut impl Rng, weights: &[f64]) -> usize {
    let total: f64 = weights.iter().sum();
    let roll: f64 = rng.random::<f64>() * total;
    let mut cumulative = 0.0;

    for (i, &weight) in weights.iter().enumerate() {
        cumulative += weight;
        if roll < cumulative {
            return i;
        }
    }

    weights.len().saturating_sub(1)
}

/// Pick two distinct indices, weighted, without replacement. Two draws.
///
/// The second pick is made from the remaining weights, renormalized.
pub fn sample_weighted_pair(rng: &mut impl Rng, weights: &[f64]) -> (usize, usize) {
    let first = sample_weighted_index(rng, weights);

    let remaining: Vec<f64> = weights
        .iter()
        .enumerate()
        .map(|(i, &w)| if i == first { 0.0 } else { w })
        .collect();
    let mut second = sample_weighted_index(rng, &remaining);

    // Only reachable through the rounding fallback landing on `first`
    if second == first {
        second = remaining
            .iter()
            .rposition(|&w| w > 0.0)
            .unwrap_or(first);
    }

    (first, second)
}
