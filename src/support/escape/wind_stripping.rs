use std::f64::consts::PI;

use uom::si::{
    f64::{Length, MassDensity, MassRate, Velocity},
    length::centimeter,
    mass_density::gram_per_cubic_centimeter,
    mass_rate::gram_per_second,
    velocity::centimeter_per_second,
};

/// Mass stripped by the stellar wind, `4π R_p² · ρ_w · v_w`.
///
/// This is the wind mass flux through a sphere of the planet's radius.
#[must_use]
pub fn wind_stripping_rate(radius: Length, density: MassDensity, velocity: Velocity) -> MassRate {
    let r = radius.get::<centimeter>();
    MassRate::new::<gram_per_second>(
        4.0 * PI
            * r
            * r
            * density.get::<gram_per_cubic_centimeter>()
            * velocity.get::<centimeter_per_second>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::velocity::kilometer_per_second;

    use crate::support::units::earth_radii;

    #[test]
    fn flux_through_planet_sphere() {
        let rate = wind_stripping_rate(
            Length::new::<centimeter>(10.0),
            MassDensity::new::<gram_per_cubic_centimeter>(2.0),
            Velocity::new::<centimeter_per_second>(3.0),
        );
        assert_relative_eq!(rate.get::<gram_per_second>(), 4.0 * PI * 600.0, max_relative = 1e-12);
    }

    #[test]
    fn quadruples_with_doubled_radius() {
        let density = MassDensity::new::<gram_per_cubic_centimeter>(1e-23);
        let velocity = Velocity::new::<kilometer_per_second>(450.0);
        let small = wind_stripping_rate(earth_radii(1.0), density, velocity);
        let large = wind_stripping_rate(earth_radii(2.0), density, velocity);
        assert_relative_eq!(
            large.get::<gram_per_second>(),
            4.0 * small.get::<gram_per_second>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn zero_wind_strips_nothing() {
        let rate = wind_stripping_rate(
            earth_radii(1.0),
            MassDensity::new::<gram_per_cubic_centimeter>(1e-23),
            Velocity::new::<centimeter_per_second>(0.0),
        );
        assert_eq!(rate.get::<gram_per_second>(), 0.0);
    }
}
