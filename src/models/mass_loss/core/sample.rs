use tracing::trace;
use uom::si::{
    f64::{
        HeatFluxDensity, MassDensity, MassRate, Power, ThermodynamicTemperature, Time, Velocity,
    },
    mass_rate::gram_per_second,
    thermodynamic_temperature::kelvin,
    velocity::kilometer_per_second,
};

use crate::support::{
    escape::wind_stripping_rate,
    system::SystemParameters,
    units::in_gigayears,
};

use super::{MassLossConfig, MassLossError};

/// Star and escape state at a single stellar age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeSample {
    pub age: Time,
    pub luminosity: Power,
    pub xray_flux: HeatFluxDensity,
    pub coronal_temperature: ThermodynamicTemperature,

    /// Wind speed at the planet's semi-major axis.
    pub wind_velocity: Velocity,

    /// Wind mass density at the planet's semi-major axis.
    pub wind_density: MassDensity,

    pub photoevaporation_rate: MassRate,
    pub wind_rate: MassRate,
}

impl AgeSample {
    /// Evaluates every rate at `age`.
    ///
    /// Quantities are computed in dependency order: luminosity, then coronal
    /// temperature, then the photoevaporation rate and the wind chain
    /// (speed, density, stripping rate).
    pub(super) fn evaluate(
        config: &MassLossConfig,
        system: &SystemParameters,
        age: Time,
    ) -> Result<Self, MassLossError> {
        let (star, planet) = (&system.star, &system.planet);
        let gyr = in_gigayears(age);

        let corona = config.activity.coronal_state(age, star.radius());

        let photoevaporation_rate = config
            .escape
            .rate(corona.luminosity, planet, star.mass())?;

        let orbit = planet.semi_major_axis();
        let wind_velocity = config
            .wind
            .velocity_at_orbit(corona.temperature, star.mass(), orbit)
            .map_err(|source| MassLossError::from_wind(gyr, source))?;
        let wind_density = config.density.mass_density(orbit, age);
        let wind_rate = wind_stripping_rate(planet.radius(), wind_density, wind_velocity);

        trace!(
            age_gyr = gyr,
            temperature_k = corona.temperature.get::<kelvin>(),
            wind_km_s = wind_velocity.get::<kilometer_per_second>(),
            photoevaporation_g_s = photoevaporation_rate.get::<gram_per_second>(),
            wind_g_s = wind_rate.get::<gram_per_second>(),
            "evaluated age sample"
        );

        Ok(Self {
            age,
            luminosity: corona.luminosity,
            xray_flux: corona.xray_flux,
            coronal_temperature: corona.temperature,
            wind_velocity,
            wind_density,
            photoevaporation_rate,
            wind_rate,
        })
    }
}
