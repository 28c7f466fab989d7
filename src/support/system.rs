//! Validated star and planet parameters.
//!
//! Every physical input passes through these constructors before it reaches a
//! model, so non-positive radii, masses and ages, and unbound eccentricities,
//! are reported as errors up front instead of surfacing as NaN later on.

use thiserror::Error;
use uom::si::f64::{Length, Mass, Time};

use crate::support::constraint::{
    Constrained, ConstraintError, StrictlyPositive, UnitIntervalUpperOpen,
};

/// A physical parameter failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {parameter}: {source}")]
pub struct ParameterError {
    /// Name of the rejected parameter (e.g. `"stellar age"`).
    pub parameter: &'static str,

    /// Why the value was rejected.
    #[source]
    pub source: ConstraintError,
}

impl ParameterError {
    #[must_use]
    pub fn new(parameter: &'static str, source: ConstraintError) -> Self {
        Self { parameter, source }
    }
}

/// Shorthand for validating a strictly positive parameter.
pub(crate) fn strictly_positive<T>(parameter: &'static str, value: T) -> Result<T, ParameterError>
where
    T: PartialOrd + num_traits::Zero,
{
    Constrained::<T, StrictlyPositive>::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| ParameterError::new(parameter, source))
}

/// Host star parameters.
///
/// Radius, mass and age are all strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StellarParameters {
    radius: Length,
    mass: Mass,
    age: Time,
}

impl StellarParameters {
    /// Validates and constructs stellar parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] naming the first non-positive (or NaN) value.
    pub fn new(radius: Length, mass: Mass, age: Time) -> Result<Self, ParameterError> {
        Ok(Self {
            radius: strictly_positive("stellar radius", radius)?,
            mass: strictly_positive("stellar mass", mass)?,
            age: strictly_positive("stellar age", age)?,
        })
    }

    #[must_use]
    pub fn radius(&self) -> Length {
        self.radius
    }

    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass
    }

    #[must_use]
    pub fn age(&self) -> Time {
        self.age
    }
}

/// Planet parameters.
///
/// Radius, mass and semi-major axis are strictly positive; eccentricity lies
/// in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetaryParameters {
    radius: Length,
    mass: Mass,
    semi_major_axis: Length,
    eccentricity: f64,
}

impl PlanetaryParameters {
    /// Validates and constructs planetary parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] naming the first invalid value.
    pub fn new(
        radius: Length,
        mass: Mass,
        semi_major_axis: Length,
        eccentricity: f64,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            radius: strictly_positive("planet radius", radius)?,
            mass: strictly_positive("planet mass", mass)?,
            semi_major_axis: strictly_positive("semi-major axis", semi_major_axis)?,
            eccentricity: Constrained::<f64, UnitIntervalUpperOpen>::new(eccentricity)
                .map_err(|source| ParameterError::new("eccentricity", source))?
                .into_inner(),
        })
    }

    #[must_use]
    pub fn radius(&self) -> Length {
        self.radius
    }

    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass
    }

    #[must_use]
    pub fn semi_major_axis(&self) -> Length {
        self.semi_major_axis
    }

    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }
}

/// A star together with one of its planets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemParameters {
    pub star: StellarParameters,
    pub planet: PlanetaryParameters,
}
