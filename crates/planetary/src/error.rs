use thiserror::Error;

use crate::composition::Gas;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AtmosphereError {
    #[error("Composition fractions sum to {total}, expected 1")]
    InvalidComposition { total: f64 },

    #[error("Negative fraction {fraction} for {gas}")]
    NegativeFraction { gas: Gas, fraction: f64 },

    #[error("Unknown gas species: {0:?}")]
    UnknownSpecies(String),

    #[error("Greenhouse factor {eta} is outside the valid range (must be below 2)")]
    DomainSampling { eta: f64 },
}

pub type Result<T> = std::result::Result<T, AtmosphereError>;
