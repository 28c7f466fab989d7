//! Lifetime mass-loss integration.
//!
//! Rates are evaluated at a fixed set of reference ages, interpolated linearly
//! onto a fine uniform grid and integrated with the trapezoidal rule. The
//! reference set does not depend on the caller's display step, so changing
//! how many points are charted never changes the totals.

mod config;
mod error;
mod input;
mod integrate;
mod results;
mod sample;

pub use config::{MassLossConfig, ReferenceAges};
pub use error::MassLossError;
pub use input::{AgeWindow, DisplayStep, MassLossInput};
pub use results::{IntegrationResult, MassLossReport};
pub use sample::AgeSample;

use tracing::debug;
use uom::si::mass::gram;

use crate::support::units::in_gigayears;

use integrate::integrate;

/// Runs the full pipeline for one system.
pub(crate) fn estimate(
    config: &MassLossConfig,
    input: &MassLossInput,
) -> Result<MassLossReport, MassLossError> {
    let system = &input.system;
    let evaluate = |age| AgeSample::evaluate(config, system, age);

    let reference_samples = config
        .reference_ages
        .within(&input.window)
        .into_iter()
        .map(evaluate)
        .collect::<Result<Vec<_>, _>>()?;

    let totals = integrate(&reference_samples, config.fine_grid_points)?;
    debug!(
        min_age_gyr = in_gigayears(input.window.min()),
        max_age_gyr = in_gigayears(input.window.max()),
        reference_samples = reference_samples.len(),
        photoevaporation_g = totals.photoevaporation.get::<gram>(),
        wind_g = totals.wind.get::<gram>(),
        "integrated lifetime mass loss"
    );

    let series = input
        .display_ages()
        .into_iter()
        .map(evaluate)
        .collect::<Result<Vec<_>, _>>()?;

    let current = evaluate(system.star.age())?;

    Ok(MassLossReport {
        current,
        lifetime: IntegrationResult {
            photoevaporation: totals.photoevaporation,
            wind: totals.wind,
            total: totals.photoevaporation + totals.wind,
            reference_samples,
            series,
        },
        planet_mass: system.planet.mass(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{mass_rate::gram_per_second, ratio::percent, velocity::kilometer_per_second};

    use crate::support::{
        catalog::{StaticCatalog, SystemCatalog},
        units::gigayears,
    };

    fn input(star: &str, planet: &str) -> MassLossInput {
        let system = StaticCatalog::with_known_systems().lookup(star, planet).unwrap();
        MassLossInput::new(system).unwrap()
    }

    #[test]
    fn earth_loses_a_negligible_fraction() {
        let report = estimate(&MassLossConfig::default(), &input("Sun", "Earth")).unwrap();

        let photoevaporation = report.photoevaporation_fraction().get::<percent>();
        assert!(photoevaporation > 0.0 && photoevaporation < 1.0, "{photoevaporation}%");
        assert!(report.total_fraction().get::<percent>() < 1.0);

        let v = report.current.wind_velocity.get::<kilometer_per_second>();
        assert!((300.0..900.0).contains(&v), "wind at 1 AU: {v} km/s");
    }

    #[test]
    fn totals_add_up() {
        let report = estimate(&MassLossConfig::default(), &input("Sun", "Earth")).unwrap();
        let lifetime = &report.lifetime;
        assert_relative_eq!(
            lifetime.total.get::<gram>(),
            lifetime.photoevaporation.get::<gram>() + lifetime.wind.get::<gram>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            report.total_fraction().get::<percent>(),
            report.photoevaporation_fraction().get::<percent>()
                + report.wind_fraction().get::<percent>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn current_sample_is_at_star_age() {
        let report = estimate(&MassLossConfig::default(), &input("Kepler-7", "b")).unwrap();
        assert_eq!(report.current.age, gigayears(3.5));
        assert_eq!(report.lifetime.series.last().map(|s| s.age), Some(gigayears(3.5)));
        assert!(report.current.photoevaporation_rate.get::<gram_per_second>() > 0.0);
    }

    #[test]
    fn display_step_does_not_change_totals() {
        let config = MassLossConfig::default();
        let base = input("Sun", "Earth");
        let fine = base.with_display_step(DisplayStep::new(gigayears(0.05)).unwrap());
        let coarse = base.with_display_step(DisplayStep::new(gigayears(0.5)).unwrap());

        let fine = estimate(&config, &fine).unwrap();
        let coarse = estimate(&config, &coarse).unwrap();
        assert_eq!(fine.lifetime.photoevaporation, coarse.lifetime.photoevaporation);
        assert_eq!(fine.lifetime.wind, coarse.lifetime.wind);
        assert!(fine.lifetime.series.len() > coarse.lifetime.series.len());
    }
}
