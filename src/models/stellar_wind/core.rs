use uom::si::{
    f64::{Length, Mass, ThermodynamicTemperature, Velocity},
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    parker::{WindError, WindSolution, WindVelocitySolver},
    stellar::XrayActivity,
    system::{ParameterError, StellarParameters, strictly_positive},
};

/// Corona and orbit to solve the wind for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSpeedInput {
    pub coronal_temperature: ThermodynamicTemperature,
    pub stellar_mass: Mass,
    pub orbital_distance: Length,
}

impl WindSpeedInput {
    /// Validates a corona and orbit.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] naming the first value that is not
    /// strictly positive.
    pub fn new(
        coronal_temperature: ThermodynamicTemperature,
        stellar_mass: Mass,
        orbital_distance: Length,
    ) -> Result<Self, ParameterError> {
        strictly_positive("coronal temperature", coronal_temperature.get::<kelvin>())?;
        Ok(Self {
            coronal_temperature,
            stellar_mass: strictly_positive("stellar mass", stellar_mass)?,
            orbital_distance: strictly_positive("orbital distance", orbital_distance)?,
        })
    }

    /// Uses the coronal temperature `activity` predicts for the star at its
    /// current age.
    #[must_use]
    pub fn for_star(
        activity: &XrayActivity,
        star: &StellarParameters,
        orbital_distance: Length,
    ) -> Self {
        Self {
            coronal_temperature: activity
                .coronal_state(star.age(), star.radius())
                .temperature,
            stellar_mass: star.mass(),
            orbital_distance,
        }
    }
}

/// Wind speed at the orbit and the sweep it was interpolated from.
#[derive(Debug, Clone, PartialEq)]
pub struct WindSpeedOutput {
    pub velocity: Velocity,
    pub solution: WindSolution,
}

pub(super) fn solve(
    solver: &WindVelocitySolver,
    input: &WindSpeedInput,
) -> Result<WindSpeedOutput, WindError> {
    let solution = solver.solve_for_orbit(
        input.coronal_temperature,
        input.stellar_mass,
        input.orbital_distance,
    )?;
    Ok(WindSpeedOutput {
        velocity: solution.velocity_at(input.orbital_distance)?,
        solution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use twine_core::Model;
    use uom::si::{length::astronomical_unit, velocity::kilometer_per_second};

    use crate::{
        models::stellar_wind::WindSpeed,
        support::units::{gigayears, solar_masses, solar_radii},
    };

    #[test]
    fn sun_at_one_au() {
        let sun =
            StellarParameters::new(solar_radii(1.0), solar_masses(1.0), gigayears(4.5)).unwrap();
        let input = WindSpeedInput::for_star(
            &XrayActivity::default(),
            &sun,
            Length::new::<astronomical_unit>(1.0),
        );

        let output = WindSpeed::default().call(&input).unwrap();
        let v = output.velocity.get::<kilometer_per_second>();
        assert!((400.0..700.0).contains(&v), "v = {v} km/s");
        assert!(output.solution.trend_satisfied());
        assert_eq!(output.solution.samples().len(), 100);
    }

    #[test]
    fn new_rejects_non_physical_inputs() {
        let orbit = Length::new::<astronomical_unit>(1.0);
        let corona = ThermodynamicTemperature::new::<kelvin>(1.0e6);

        let err = WindSpeedInput::new(corona, solar_masses(-1.0), orbit).unwrap_err();
        assert_eq!(err.parameter, "stellar mass");

        let negative = ThermodynamicTemperature::new::<kelvin>(-5.0);
        let err = WindSpeedInput::new(negative, solar_masses(1.0), orbit).unwrap_err();
        assert_eq!(err.parameter, "coronal temperature");

        assert!(WindSpeedInput::new(corona, solar_masses(1.0), orbit * 0.0).is_err());
        assert!(WindSpeedInput::new(corona, solar_masses(1.0), orbit).is_ok());
    }

    #[test]
    fn negative_mass_is_a_parameter_error_not_a_solver_failure() {
        let input = WindSpeedInput {
            coronal_temperature: ThermodynamicTemperature::new::<kelvin>(1.0e6),
            stellar_mass: solar_masses(-1.0),
            orbital_distance: Length::new::<astronomical_unit>(1.0),
        };
        let err = WindSpeed::default().call(&input).unwrap_err();
        assert!(matches!(
            err,
            WindError::InvalidParameter(ParameterError { parameter: "stellar mass", .. })
        ));
    }

    #[test]
    fn young_star_needs_more_retries() {
        let activity = XrayActivity::default();
        let orbit = Length::new::<astronomical_unit>(1.0);
        let model = WindSpeed::default();

        let old =
            StellarParameters::new(solar_radii(1.0), solar_masses(1.0), gigayears(4.5)).unwrap();
        let young =
            StellarParameters::new(solar_radii(1.0), solar_masses(1.0), gigayears(0.01)).unwrap();

        let old = model
            .call(&WindSpeedInput::for_star(&activity, &old, orbit))
            .unwrap();
        let young = model
            .call(&WindSpeedInput::for_star(&activity, &young, orbit))
            .unwrap();

        assert!(young.solution.trend_satisfied());
        assert!(young.solution.attempts() > old.solution.attempts());
        assert!(young.velocity > old.velocity);
    }
}
