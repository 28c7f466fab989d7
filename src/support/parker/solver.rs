use thiserror::Error;
use tracing::{debug, warn};
use uom::si::{
    f64::{Length, Mass, ThermodynamicTemperature, Velocity},
    length::{astronomical_unit, centimeter},
    thermodynamic_temperature,
    velocity::{centimeter_per_second, kilometer_per_second},
};

use crate::support::{
    interp::{InterpError, linspace},
    system::{ParameterError, strictly_positive},
    units::PhysicalConstants,
};

use super::{
    ParkerWind, VelocitySample, WindSample, WindSolution,
    newton::{self, NewtonConfig},
};

/// Errors from a wind speed sweep.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WindError {
    /// Too few distances converged to interpolate.
    #[error("wind sweep produced {valid} valid samples, at least two are required")]
    InsufficientValidSamples { valid: usize },

    /// The sweep distances are unusable.
    #[error("invalid sweep: {reason}")]
    InvalidSweep { reason: &'static str },

    /// A temperature, mass or distance is not strictly positive.
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),

    #[error(transparent)]
    Interpolation(#[from] InterpError),
}

/// Sweep layout and retry policy for [`WindVelocitySolver`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSolverConfig {
    /// Guess for the innermost distance on the first attempt.
    pub initial_guess: Velocity,

    /// Innermost sweep distance, capped at half the orbital distance.
    pub inner_radius: Length,

    /// Outermost sweep distance as a multiple of the orbital distance.
    pub outer_radius_factor: f64,

    /// Number of evenly spaced sweep distances.
    pub points: usize,

    /// Share of the converged span, from the star outward, that must not decelerate.
    pub band_fraction: f64,

    /// Factor applied to the initial guess on each retry.
    pub guess_growth: f64,

    /// Total sweeps allowed, including the first.
    pub max_attempts: usize,

    pub newton: NewtonConfig,
}

impl Default for WindSolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: Velocity::new::<kilometer_per_second>(5.0),
            inner_radius: Length::new::<astronomical_unit>(0.1),
            outer_radius_factor: 1.5,
            points: 100,
            band_fraction: 0.1,
            guess_growth: 1.5,
            max_attempts: 20,
            newton: NewtonConfig::default(),
        }
    }
}

/// Continuation-tracked Parker wind solver.
///
/// # Example
///
/// ```
/// use exoplanet_loss::support::{parker::WindVelocitySolver, units::solar_masses};
/// use uom::si::{
///     f64::{Length, ThermodynamicTemperature},
///     length::astronomical_unit,
///     thermodynamic_temperature::kelvin,
///     velocity::kilometer_per_second,
/// };
///
/// let solver = WindVelocitySolver::default();
/// let v = solver
///     .velocity_at_orbit(
///         ThermodynamicTemperature::new::<kelvin>(1.0e6),
///         solar_masses(1.0),
///         Length::new::<astronomical_unit>(1.0),
///     )
///     .unwrap();
/// assert!(v.get::<kilometer_per_second>() > 300.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindVelocitySolver {
    pub config: WindSolverConfig,
    pub constants: PhysicalConstants,
}

impl WindVelocitySolver {
    #[must_use]
    pub fn new(config: WindSolverConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Wind speed at `orbital_distance`, interpolated from a sweep spanning it.
    ///
    /// # Errors
    ///
    /// Returns a [`WindError`] if the sweep range is degenerate or fewer than
    /// two distances converge.
    pub fn velocity_at_orbit(
        &self,
        temperature: ThermodynamicTemperature,
        stellar_mass: Mass,
        orbital_distance: Length,
    ) -> Result<Velocity, WindError> {
        self.solve_for_orbit(temperature, stellar_mass, orbital_distance)?
            .velocity_at(orbital_distance)
    }

    /// The full sweep used by [`velocity_at_orbit`](Self::velocity_at_orbit).
    ///
    /// # Errors
    ///
    /// Returns [`WindError::InvalidParameter`] if the temperature, mass or
    /// orbital distance is not strictly positive, or
    /// [`WindError::InvalidSweep`] if the sweep range is degenerate.
    pub fn solve_for_orbit(
        &self,
        temperature: ThermodynamicTemperature,
        stellar_mass: Mass,
        orbital_distance: Length,
    ) -> Result<WindSolution, WindError> {
        let orbital_distance = strictly_positive("orbital distance", orbital_distance)?;
        let (inner, outer) = self.sweep_range(orbital_distance);
        self.profile(temperature, stellar_mass, inner, outer, self.config.points)
    }

    /// Sweep bounds around an orbit: from the configured inner radius (at most
    /// half the orbit) out to `outer_radius_factor` times the orbit.
    #[must_use]
    pub fn sweep_range(&self, orbital_distance: Length) -> (Length, Length) {
        let inner = if self.config.inner_radius < orbital_distance * 0.5 {
            self.config.inner_radius
        } else {
            orbital_distance * 0.5
        };
        (inner, orbital_distance * self.config.outer_radius_factor)
    }

    /// Velocity-vs-distance profile over `points` evenly spaced distances.
    ///
    /// Runs the trend-corrected sweep, so the result is the same branch
    /// [`velocity_at_orbit`](Self::velocity_at_orbit) interpolates on.
    ///
    /// # Errors
    ///
    /// Returns [`WindError::InvalidParameter`] if the temperature or stellar
    /// mass is not strictly positive, and [`WindError::InvalidSweep`] if
    /// `start >= end`, either bound is not positive and finite, or `points < 2`.
    pub fn profile(
        &self,
        temperature: ThermodynamicTemperature,
        stellar_mass: Mass,
        start: Length,
        end: Length,
        points: usize,
    ) -> Result<WindSolution, WindError> {
        strictly_positive(
            "coronal temperature",
            temperature.get::<thermodynamic_temperature::kelvin>(),
        )?;
        strictly_positive("stellar mass", stellar_mass)?;

        let (r0, r1) = (start.get::<centimeter>(), end.get::<centimeter>());
        if !(r0.is_finite() && r1.is_finite() && r0 > 0.0) {
            return Err(WindError::InvalidSweep {
                reason: "bounds must be positive and finite",
            });
        }
        if r0 >= r1 {
            return Err(WindError::InvalidSweep {
                reason: "start must be below end",
            });
        }
        if points < 2 {
            return Err(WindError::InvalidSweep {
                reason: "at least two points are required",
            });
        }

        let distances: Vec<Length> = linspace(r0, r1, points)
            .into_iter()
            .map(Length::new::<centimeter>)
            .collect();
        let wind = ParkerWind::new(temperature, stellar_mass, &self.constants);
        Ok(self.sweep_with_retry(&wind, &distances))
    }

    /// Repeats the sweep with a growing initial guess until the near-star band
    /// accelerates, or the attempt budget runs out.
    ///
    /// `distances` must be strictly ascending.
    #[must_use]
    pub fn sweep_with_retry(&self, wind: &ParkerWind, distances: &[Length]) -> WindSolution {
        let attempts = self.config.max_attempts.max(1);
        let mut guess = self.config.initial_guess;
        let mut solution = self.sweep(wind, distances, guess);

        for attempt in 1..=attempts {
            solution.attempts = attempt;
            if solution.accelerates_near_star(self.config.band_fraction) {
                solution.trend_satisfied = true;
                return solution;
            }
            if attempt == attempts {
                break;
            }
            guess = guess * self.config.guess_growth;
            debug!(
                attempt,
                guess_km_s = guess.get::<kilometer_per_second>(),
                "wind speed falls near the star, retrying sweep"
            );
            solution = self.sweep(wind, distances, guess);
        }

        warn!(
            attempts,
            sound_speed_km_s = wind.sound_speed().get::<kilometer_per_second>(),
            "no accelerating wind branch found, using best-effort sweep"
        );
        solution.trend_satisfied = false;
        solution
    }

    /// One continuation pass: each distance is seeded with the previous
    /// converged speed, and a miss keeps the previous seed.
    #[must_use]
    pub fn sweep(
        &self,
        wind: &ParkerWind,
        distances: &[Length],
        initial_guess: Velocity,
    ) -> WindSolution {
        let newton = &self.config.newton;
        let (samples, _) = distances.iter().fold(
            (
                Vec::with_capacity(distances.len()),
                initial_guess.get::<centimeter_per_second>(),
            ),
            |(mut samples, guess), &distance| {
                let r = distance.get::<centimeter>();
                let (velocity, next_guess) = match newton::solve(wind, r, guess, newton) {
                    Ok(v) => (
                        VelocitySample::Valid(Velocity::new::<centimeter_per_second>(v)),
                        v,
                    ),
                    Err(err) => {
                        debug!(
                            distance_au = distance.get::<astronomical_unit>(),
                            sound_speed_km_s = wind.sound_speed().get::<kilometer_per_second>(),
                            %err,
                            "wind speed did not converge, marking sample missing"
                        );
                        (VelocitySample::Missing, guess)
                    }
                };
                samples.push(WindSample { distance, velocity });
                (samples, next_guess)
            },
        );

        WindSolution {
            samples,
            initial_guess,
            attempts: 1,
            trend_satisfied: false,
        }
    }
}
