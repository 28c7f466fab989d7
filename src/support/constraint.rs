//! Type-level numeric constraints for physical inputs.
//!
//! Stellar and planetary parameters arrive from catalogs or user input and must
//! be validated before they reach the physics: a zero age blows up the X-ray
//! luminosity power law, a zero radius divides by zero in the surface flux, and
//! an eccentricity of one is not a bound orbit. The types here reject such
//! values once, at construction, so the rest of the crate can rely on them.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: Greater than zero (radii, masses, ages, distances)
//! - [`UnitIntervalUpperOpen`]: Upper-open unit interval `0 ≤ x < 1` (eccentricity)
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`].
//!
//! # Extending
//!
//! Custom invariants implement [`Constraint<T>`] for a zero-sized marker type.
//! The photoevaporation efficiency range is one such example, see
//! [`crate::support::escape::EfficiencyRange`].

mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitIntervalUpperOpen};

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use exoplanet_loss::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::astronomical_unit};
///
/// let a = Length::new::<astronomical_unit>(0.06067);
/// let a = Constrained::<_, StrictlyPositive>::new(a).unwrap();
/// assert_eq!(a.into_inner().get::<astronomical_unit>(), 0.06067);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Wraps a value the caller knows satisfies the constraint.
    ///
    /// Used for compile-time defaults; the invariant is checked in debug builds.
    pub(crate) fn new_unchecked(value: T) -> Self {
        debug_assert!(C::check(&value).is_ok(), "constraint violated by default value");
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
