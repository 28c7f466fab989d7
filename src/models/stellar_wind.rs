//! Stellar wind speed at an orbit.
//!
//! [`WindSpeed`] wraps the continuation-tracked Parker solver as a
//! [`twine_core::Model`]. The computational core is in the internal [`core`]
//! module.

pub(crate) mod core;

use twine_core::Model;

use crate::support::parker::{WindError, WindVelocitySolver};

pub use self::core::{WindSpeedInput, WindSpeedOutput};

/// Wind speed model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindSpeed {
    solver: WindVelocitySolver,
}

impl WindSpeed {
    #[must_use]
    pub fn new(solver: WindVelocitySolver) -> Self {
        Self { solver }
    }
}

impl Model for WindSpeed {
    type Input = WindSpeedInput;
    type Output = WindSpeedOutput;
    type Error = WindError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::solve(&self.solver, input)
    }
}
