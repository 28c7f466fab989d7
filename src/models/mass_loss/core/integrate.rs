use uom::si::{f64::Mass, mass::gram, mass_rate::gram_per_second, time::second};

use crate::support::interp::{InterpError, LinearInterpolant, linspace, trapezoid};

use super::AgeSample;

/// Mass lost to each mechanism over a span of ages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Totals {
    pub photoevaporation: Mass,
    pub wind: Mass,
}

/// Integrates both rates over the ages spanned by `samples`.
///
/// Each rate is interpolated linearly onto `fine_points` uniformly spaced
/// ages and integrated with the trapezoidal rule in seconds. `samples` must
/// be in strictly ascending age.
pub(super) fn integrate(samples: &[AgeSample], fine_points: usize) -> Result<Totals, InterpError> {
    let ages: Vec<f64> = samples.iter().map(|s| s.age.get::<second>()).collect();
    let rate_series = |rate: fn(&AgeSample) -> f64| samples.iter().map(rate).collect::<Vec<_>>();

    let photoevaporation = LinearInterpolant::new(
        ages.clone(),
        rate_series(|s| s.photoevaporation_rate.get::<gram_per_second>()),
    )?;
    let wind = LinearInterpolant::new(
        ages.clone(),
        rate_series(|s| s.wind_rate.get::<gram_per_second>()),
    )?;

    let (first, last) = (ages[0], ages[ages.len() - 1]);
    let fine = linspace(first, last, fine_points.max(2));
    let area = |interpolant: &LinearInterpolant| {
        let rates: Vec<f64> = fine.iter().map(|&t| interpolant.eval(t)).collect();
        Mass::new::<gram>(trapezoid(&fine, &rates))
    };

    Ok(Totals {
        photoevaporation: area(&photoevaporation),
        wind: area(&wind),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{
            HeatFluxDensity, MassDensity, MassRate, Power, ThermodynamicTemperature, Time, Velocity,
        },
        heat_flux_density::watt_per_square_meter,
        mass_density::gram_per_cubic_centimeter,
        power::erg_per_second,
        thermodynamic_temperature::kelvin,
        velocity::kilometer_per_second,
    };

    fn sample(age_s: f64, photoevaporation: f64, wind: f64) -> AgeSample {
        AgeSample {
            age: Time::new::<second>(age_s),
            luminosity: Power::new::<erg_per_second>(0.0),
            xray_flux: HeatFluxDensity::new::<watt_per_square_meter>(0.0),
            coronal_temperature: ThermodynamicTemperature::new::<kelvin>(1.0e6),
            wind_velocity: Velocity::new::<kilometer_per_second>(0.0),
            wind_density: MassDensity::new::<gram_per_cubic_centimeter>(0.0),
            photoevaporation_rate: MassRate::new::<gram_per_second>(photoevaporation),
            wind_rate: MassRate::new::<gram_per_second>(wind),
        }
    }

    #[test]
    fn constant_rates_integrate_exactly() {
        let samples = [sample(0.0, 2.0, 3.0), sample(10.0, 2.0, 3.0), sample(40.0, 2.0, 3.0)];
        let totals = integrate(&samples, 5000).unwrap();
        assert_relative_eq!(totals.photoevaporation.get::<gram>(), 80.0, max_relative = 1e-12);
        assert_relative_eq!(totals.wind.get::<gram>(), 120.0, max_relative = 1e-12);
    }

    #[test]
    fn piecewise_linear_rates_match_reference_trapezoid() {
        let samples = [sample(0.0, 0.0, 10.0), sample(1.0, 10.0, 0.0), sample(3.0, 0.0, 0.0)];
        let totals = integrate(&samples, 3001).unwrap();
        // 3001 points over [0, 3] puts a grid node on every kink.
        assert_relative_eq!(totals.photoevaporation.get::<gram>(), 15.0, max_relative = 1e-9);
        assert_relative_eq!(totals.wind.get::<gram>(), 5.0, max_relative = 1e-9);
    }

    #[test]
    fn single_sample_cannot_be_integrated() {
        let samples = [sample(1.0, 1.0, 1.0)];
        assert_eq!(
            integrate(&samples, 100),
            Err(InterpError::TooFewPoints { count: 1 })
        );
    }
}
