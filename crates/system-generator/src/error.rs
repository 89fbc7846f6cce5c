use planetary::AtmosphereError;
use stellar::StellarError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Star generation failed: {0}")]
    Stellar(#[from] StellarError),

    #[error("Atmosphere generation failed: {0}")]
    Atmosphere(#[from] AtmosphereError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, GenerationError>;
