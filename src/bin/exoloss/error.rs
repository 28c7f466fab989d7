use std::io;

use exoplanet_loss::{
    models::mass_loss::MassLossError,
    support::{parker::WindError, system::ParameterError},
};

/// Errors reported by the command-line tool.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    MassLoss(#[from] MassLossError),

    #[error(transparent)]
    Wind(#[from] WindError),

    /// Missing or conflicting command-line arguments.
    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
