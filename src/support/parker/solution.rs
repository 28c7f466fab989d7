use uom::si::{
    f64::{Length, Velocity},
    length::centimeter,
    velocity::centimeter_per_second,
};

use crate::support::interp::LinearInterpolant;

use super::WindError;

/// Outcome of the root finder at one sweep distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VelocitySample {
    Valid(Velocity),

    /// The solver did not converge at this distance.
    Missing,
}

impl VelocitySample {
    #[must_use]
    pub fn valid(self) -> Option<Velocity> {
        match self {
            Self::Valid(v) => Some(v),
            Self::Missing => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSample {
    pub distance: Length,
    pub velocity: VelocitySample,
}

/// Wind speeds from one continuation sweep, in strictly ascending distance.
#[derive(Debug, Clone, PartialEq)]
pub struct WindSolution {
    pub(super) samples: Vec<WindSample>,
    pub(super) initial_guess: Velocity,
    pub(super) attempts: usize,
    pub(super) trend_satisfied: bool,
}

impl WindSolution {
    #[must_use]
    pub fn samples(&self) -> &[WindSample] {
        &self.samples
    }

    /// `(distance, velocity)` pairs for the converged samples only.
    pub fn valid_samples(&self) -> impl Iterator<Item = (Length, Velocity)> + '_ {
        self.samples
            .iter()
            .filter_map(|s| s.velocity.valid().map(|v| (s.distance, v)))
    }

    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid_samples().count()
    }

    /// Initial guess used by the sweep that produced this solution.
    #[must_use]
    pub fn initial_guess(&self) -> Velocity {
        self.initial_guess
    }

    /// Number of sweeps run, including the one that produced this solution.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Whether the near-star band accelerates outward.
    ///
    /// `false` means the retry budget ran out and this is a best-effort sweep.
    #[must_use]
    pub fn trend_satisfied(&self) -> bool {
        self.trend_satisfied
    }

    /// Linearly interpolated wind speed at `distance`.
    ///
    /// Outside the swept range the first or last segment is extended.
    ///
    /// # Errors
    ///
    /// Returns [`WindError::InsufficientValidSamples`] if fewer than two
    /// samples converged.
    pub fn velocity_at(&self, distance: Length) -> Result<Velocity, WindError> {
        let (xs, ys): (Vec<f64>, Vec<f64>) = self
            .valid_samples()
            .map(|(r, v)| (r.get::<centimeter>(), v.get::<centimeter_per_second>()))
            .unzip();
        if xs.len() < 2 {
            return Err(WindError::InsufficientValidSamples { valid: xs.len() });
        }
        let interpolant = LinearInterpolant::new(xs, ys)?;
        Ok(Velocity::new::<centimeter_per_second>(
            interpolant.eval(distance.get::<centimeter>()),
        ))
    }

    /// Checks that speeds never drop between adjacent converged samples in
    /// the innermost `fraction` of the converged distance span.
    ///
    /// The band is measured over converged samples so a run of misses near
    /// the star cannot leave it empty. A band holding one sample passes; a
    /// solution with no converged samples does not.
    pub(super) fn accelerates_near_star(&self, fraction: f64) -> bool {
        let valid: Vec<(Length, Velocity)> = self.valid_samples().collect();
        let (Some(&(first, _)), Some(&(last, _))) = (valid.first(), valid.last()) else {
            return false;
        };
        let band_edge = first + (last - first) * fraction;

        valid
            .iter()
            .take_while(|(r, _)| *r <= band_edge)
            .collect::<Vec<_>>()
            .windows(2)
            .all(|pair| pair[1].1 >= pair[0].1)
    }
}
