use thiserror::Error;
use uom::si::{f64::Velocity, velocity::centimeter_per_second};

use super::ParkerWind;

/// Iteration budget and tolerances for the Newton root finder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonConfig {
    pub max_iters: usize,

    /// Converged once `|f(v)|` is at or below this.
    pub residual_tol: f64,

    /// Iterates are clamped to at least this speed so `ln(v²)` stays finite.
    pub velocity_floor: Velocity,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            residual_tol: 1e-10,
            velocity_floor: Velocity::new::<centimeter_per_second>(1e-10),
        }
    }
}

/// Newton iteration did not find a root.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NewtonError {
    #[error("no convergence after {iters} iterations (residual {residual:e})")]
    MaxIters { iters: usize, residual: f64 },

    #[error("non-finite iterate after {iters} iterations")]
    NonFinite { iters: usize },
}

/// Solves Parker's equation at `r` cm from a guess of `guess` cm/s.
///
/// The residual is convex in `v` with its minimum at the sound speed, so a
/// guess below `c_s` lands on the subsonic root and one above lands on the
/// supersonic root.
pub(super) fn solve(
    wind: &ParkerWind,
    r: f64,
    guess: f64,
    config: &NewtonConfig,
) -> Result<f64, NewtonError> {
    let floor = config.velocity_floor.get::<centimeter_per_second>();
    let mut v = guess.max(floor);

    for iters in 0..config.max_iters {
        let f = wind.residual(v, r);
        if !f.is_finite() {
            return Err(NewtonError::NonFinite { iters });
        }
        if f.abs() <= config.residual_tol {
            return Ok(v);
        }

        let step = f / wind.derivative(v);
        if !step.is_finite() {
            return Err(NewtonError::NonFinite { iters });
        }
        v = (v - step).max(floor);
    }

    let residual = wind.residual(v, r);
    if residual.abs() <= config.residual_tol {
        Ok(v)
    } else {
        Err(NewtonError::MaxIters {
            iters: config.max_iters,
            residual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, ThermodynamicTemperature},
        length::{astronomical_unit, centimeter},
        thermodynamic_temperature::kelvin,
    };

    use crate::support::units::{PhysicalConstants, solar_masses};

    fn solar_corona() -> ParkerWind {
        ParkerWind::new(
            ThermodynamicTemperature::new::<kelvin>(1.0e6),
            solar_masses(1.0),
            &PhysicalConstants::default(),
        )
    }

    fn au_cm(value: f64) -> f64 {
        Length::new::<astronomical_unit>(value).get::<centimeter>()
    }

    #[test]
    fn guess_above_sound_speed_finds_supersonic_root() {
        let wind = solar_corona();
        let cs = wind.sound_speed().get::<centimeter_per_second>();
        let r = au_cm(1.0);

        let v = solve(&wind, r, 2.0 * cs, &NewtonConfig::default()).unwrap();
        assert!(v > cs);
        assert!(wind.residual(v, r).abs() <= 1e-10);
    }

    #[test]
    fn guess_below_sound_speed_finds_subsonic_root() {
        let wind = solar_corona();
        let cs = wind.sound_speed().get::<centimeter_per_second>();
        let r = au_cm(1.0);

        let v = solve(&wind, r, 5e5, &NewtonConfig::default()).unwrap();
        assert!(v < cs);
        assert_relative_eq!(wind.residual(v, r), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn zero_guess_is_lifted_to_the_floor() {
        let wind = solar_corona();
        let r = au_cm(1.0);
        let v = solve(&wind, r, 0.0, &NewtonConfig::default()).unwrap();
        assert!(v > 0.0);
        assert!(wind.residual(v, r).abs() <= 1e-10);
    }

    #[test]
    fn fails_where_no_root_exists() {
        let wind = solar_corona();
        let r = wind.critical_radius().get::<centimeter>() * 0.3;
        let cs = wind.sound_speed().get::<centimeter_per_second>();
        assert!(solve(&wind, r, 0.5 * cs, &NewtonConfig::default()).is_err());
    }

    #[test]
    fn reports_iteration_budget() {
        let wind = solar_corona();
        let config = NewtonConfig {
            max_iters: 1,
            ..NewtonConfig::default()
        };
        let err = solve(&wind, au_cm(1.0), 1.0, &config).unwrap_err();
        assert!(matches!(err, NewtonError::MaxIters { iters: 1, .. }));
    }
}
