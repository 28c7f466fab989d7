use thiserror::Error;

use crate::support::{
    catalog::LookupError, escape::RocheLobeOverflow, interp::InterpError, parker::WindError,
    system::ParameterError,
};

/// Errors that can occur while estimating mass loss.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MassLossError {
    /// An input parameter was rejected before any physics ran.
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),

    /// Too few wind speeds converged around the orbit to interpolate.
    #[error("only {valid} valid wind samples at {age:.4} Gyr")]
    InsufficientValidSamples {
        /// Stellar age in Gyr.
        age: f64,
        valid: usize,
    },

    /// The wind sweep could not be set up.
    #[error("wind solver failed at {age:.4} Gyr")]
    WindSolver {
        /// Stellar age in Gyr.
        age: f64,
        #[source]
        source: WindError,
    },

    /// The Roche-lobe correction is enabled and the planet overflows its lobe.
    #[error(transparent)]
    RocheLobeOverflow(#[from] RocheLobeOverflow),

    /// The age grid could not be interpolated.
    #[error("age integration failed")]
    Integration(#[from] InterpError),

    /// The star or planet could not be looked up.
    #[error("system lookup failed")]
    UpstreamDataUnavailable(#[from] LookupError),
}

impl MassLossError {
    /// Attaches the stellar age (Gyr) at which a wind solve failed.
    pub(super) fn from_wind(age: f64, source: WindError) -> Self {
        match source {
            WindError::InsufficientValidSamples { valid } => {
                Self::InsufficientValidSamples { age, valid }
            }
            WindError::InvalidParameter(err) => Self::InvalidParameter(err),
            source => Self::WindSolver { age, source },
        }
    }
}
