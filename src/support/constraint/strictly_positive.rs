use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Radii, masses, ages and orbital distances all carry this constraint.
///
/// # Examples
///
/// ```
/// use exoplanet_loss::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Mass, mass::gram};
///
/// let m = StrictlyPositive::new(Mass::new::<gram>(5.97e27)).unwrap();
/// assert_eq!(m.into_inner().get::<gram>(), 5.97e27);
///
/// assert!(StrictlyPositive::new(Mass::new::<gram>(0.0)).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, Time},
        length::centimeter,
        time::year,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert!(StrictlyPositive::new(1e-30).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn radii() {
        let radius = Length::new::<centimeter>(6.957e10);
        assert!(StrictlyPositive::new(radius).is_ok());
        assert!(StrictlyPositive::new(Length::new::<centimeter>(0.0)).is_err());
    }

    #[test]
    fn ages() {
        assert!(StrictlyPositive::new(Time::new::<year>(4.5e9)).is_ok());
        assert_eq!(
            StrictlyPositive::new(Time::new::<year>(-1.0)),
            Err(ConstraintError::Negative)
        );
    }
}
