use crate::support::{
    constraint::{Constrained, Constraint, ConstraintError, ConstraintResult},
    system::ParameterError,
};

/// Marker type enforcing the photoevaporation efficiency range `0.25 ≤ η ≤ 1`.
///
/// Efficiencies below a quarter are outside the range the energy-limited
/// approximation was calibrated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EfficiencyRange;

impl EfficiencyRange {
    pub const MIN: f64 = 0.25;
    pub const MAX: f64 = 1.0;
}

impl Constraint<f64> for EfficiencyRange {
    fn check(value: &f64) -> ConstraintResult<()> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if *value < Self::MIN {
            Err(ConstraintError::BelowMinimum)
        } else if *value > Self::MAX {
            Err(ConstraintError::AboveMaximum)
        } else {
            Ok(())
        }
    }
}

/// Fraction of absorbed X-ray energy converted into escaping gas.
///
/// Defaults to 0.3.
///
/// # Example
///
/// ```
/// use exoplanet_loss::support::escape::Efficiency;
///
/// assert_eq!(Efficiency::default().value(), 0.3);
/// assert!(Efficiency::new(0.5).is_ok());
/// assert!(Efficiency::new(0.1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Efficiency(Constrained<f64, EfficiencyRange>);

impl Efficiency {
    /// Validates an efficiency.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the value is NaN or outside `[0.25, 1]`.
    pub fn new(value: f64) -> Result<Self, ParameterError> {
        Constrained::new(value)
            .map(Self)
            .map_err(|source| ParameterError::new("photoevaporation efficiency", source))
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        *self.0.as_ref()
    }
}

impl Default for Efficiency {
    fn default() -> Self {
        Self(Constrained::new_unchecked(0.3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_ends_of_range() {
        assert_eq!(Efficiency::new(0.25).unwrap().value(), 0.25);
        assert_eq!(Efficiency::new(1.0).unwrap().value(), 1.0);
    }

    #[test]
    fn rejects_out_of_range() {
        let err = Efficiency::new(0.2).unwrap_err();
        assert_eq!(err.parameter, "photoevaporation efficiency");
        assert_eq!(err.source, ConstraintError::BelowMinimum);

        let err = Efficiency::new(1.5).unwrap_err();
        assert_eq!(err.source, ConstraintError::AboveMaximum);

        let err = Efficiency::new(f64::NAN).unwrap_err();
        assert_eq!(err.source, ConstraintError::NotANumber);
    }
}
