use uom::si::f64::Time;

use crate::support::{
    constraint::ConstraintError,
    system::{ParameterError, SystemParameters, strictly_positive},
    units::gigayears,
};

/// Stellar age range over which mass loss is integrated.
///
/// Both ends are strictly positive and `min < max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeWindow {
    min: Time,
    max: Time,
}

impl AgeWindow {
    /// Default lower bound, 0.01 Gyr.
    pub const DEFAULT_MIN_GYR: f64 = 0.01;

    /// Validates a window.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if either end is not strictly positive or
    /// `max <= min`.
    pub fn new(min: Time, max: Time) -> Result<Self, ParameterError> {
        let min = strictly_positive("minimum age", min)?;
        let max = strictly_positive("maximum age", max)?;
        if max <= min {
            return Err(ParameterError::new("maximum age", ConstraintError::BelowMinimum));
        }
        Ok(Self { min, max })
    }

    /// Window from 0.01 Gyr up to `max`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if `max` is not above 0.01 Gyr.
    pub fn up_to(max: Time) -> Result<Self, ParameterError> {
        Self::new(gigayears(Self::DEFAULT_MIN_GYR), max)
    }

    #[must_use]
    pub fn min(&self) -> Time {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Time {
        self.max
    }
}

/// Spacing of the display series.
///
/// Only controls which ages are reported for charting. Lifetime totals are
/// computed on a fixed grid and do not depend on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayStep(Time);

impl DisplayStep {
    /// Default spacing, 0.1 Gyr.
    pub const DEFAULT_GYR: f64 = 0.1;

    /// Validates a step.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the step is not strictly positive.
    pub fn new(step: Time) -> Result<Self, ParameterError> {
        strictly_positive("age step", step).map(Self)
    }

    #[must_use]
    pub fn get(&self) -> Time {
        self.0
    }
}

impl Default for DisplayStep {
    fn default() -> Self {
        Self(gigayears(Self::DEFAULT_GYR))
    }
}

/// Input to the mass-loss model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassLossInput {
    pub system: SystemParameters,
    pub window: AgeWindow,
    pub display_step: DisplayStep,
}

impl MassLossInput {
    /// Integrates from 0.01 Gyr to the star's age with a 0.1 Gyr display step.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the star is not older than 0.01 Gyr.
    pub fn new(system: SystemParameters) -> Result<Self, ParameterError> {
        Ok(Self {
            system,
            window: AgeWindow::up_to(system.star.age())?,
            display_step: DisplayStep::default(),
        })
    }

    #[must_use]
    pub fn with_window(self, window: AgeWindow) -> Self {
        Self { window, ..self }
    }

    #[must_use]
    pub fn with_display_step(self, display_step: DisplayStep) -> Self {
        Self {
            display_step,
            ..self
        }
    }

    /// Ages of the display series: `min, min + step, …`, always ending at `max`.
    pub(super) fn display_ages(&self) -> Vec<Time> {
        let (min, max) = (self.window.min(), self.window.max());
        let step = self.display_step.get();
        // Drop a penultimate age that lands on `max` up to rounding.
        let last_before_max = max - step * 1e-9;

        let mut ages: Vec<Time> = std::iter::successors(Some(min), |&age| Some(age + step))
            .take_while(|&age| age < last_before_max)
            .collect();
        ages.push(max);
        ages
    }
}
