use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StellarError {
    #[error("Stellar temperature {temperature:.0} K lies outside the A-T spectral bands")]
    OutOfRange { temperature: f64 },

    #[error("Invalid spectral class: {0:?}")]
    InvalidSpectralClass(String),
}

pub type Result<T> = std::result::Result<T, StellarError>;
