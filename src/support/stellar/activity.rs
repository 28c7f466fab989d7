use std::f64::consts::PI;

use uom::si::{
    f64::{HeatFluxDensity, Length, Power, ThermodynamicTemperature, Time},
    heat_flux_density::watt_per_square_meter,
    length::centimeter,
    power::erg_per_second,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::in_gigayears;

/// 1 erg s⁻¹ cm⁻² expressed in W m⁻².
const W_M2_PER_ERG_S_CM2: f64 = 1e-3;

/// Age-activity relation for X-ray luminosity and coronal temperature.
///
/// ```text
/// L_X   = A · t^b                  (t in Gyr)
/// F_X   = L_X / (4π R²)
/// T_cor = T₀ · F_X^k               (F_X in erg s⁻¹ cm⁻²)
/// ```
///
/// The defaults are a fit to Sun-like stars in the 1–20 Å band:
/// `A = 6.76×10²⁷ erg/s`, `b = −1.92`, `T₀ = 0.11 MK`, `k = 0.26`.
///
/// The relation is undefined for a zero age or radius. Callers validate those
/// upstream (see [`StellarParameters`](crate::support::system::StellarParameters)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XrayActivity {
    /// Luminosity of a 1 Gyr old star, `A`.
    pub luminosity_at_one_gyr: Power,

    /// Power-law exponent on age, `b`.
    pub age_exponent: f64,

    /// Coronal temperature for unit surface flux, `T₀`.
    pub temperature_scale: ThermodynamicTemperature,

    /// Exponent on surface flux, `k`.
    pub flux_exponent: f64,
}

impl Default for XrayActivity {
    fn default() -> Self {
        Self {
            luminosity_at_one_gyr: Power::new::<erg_per_second>(6.76e27),
            age_exponent: -1.92,
            temperature_scale: ThermodynamicTemperature::new::<kelvin>(0.11e6),
            flux_exponent: 0.26,
        }
    }
}

/// X-ray output and coronal temperature of a star at one age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoronalState {
    pub luminosity: Power,
    pub xray_flux: HeatFluxDensity,
    pub temperature: ThermodynamicTemperature,
}

impl XrayActivity {
    /// X-ray luminosity at the given stellar age.
    #[must_use]
    pub fn luminosity(&self, age: Time) -> Power {
        self.luminosity_at_one_gyr * in_gigayears(age).powf(self.age_exponent)
    }

    /// X-ray flux at the stellar surface, `L / (4π R²)`.
    #[must_use]
    pub fn surface_flux(luminosity: Power, radius: Length) -> HeatFluxDensity {
        let r = radius.get::<centimeter>();
        let flux = luminosity.get::<erg_per_second>() / (4.0 * PI * r * r);
        HeatFluxDensity::new::<watt_per_square_meter>(flux * W_M2_PER_ERG_S_CM2)
    }

    /// Coronal temperature implied by a luminosity and stellar radius.
    #[must_use]
    pub fn coronal_temperature(&self, luminosity: Power, radius: Length) -> ThermodynamicTemperature {
        self.temperature_from_flux(Self::surface_flux(luminosity, radius))
    }

    /// Luminosity, surface flux and coronal temperature at the given age.
    #[must_use]
    pub fn coronal_state(&self, age: Time, radius: Length) -> CoronalState {
        let luminosity = self.luminosity(age);
        let xray_flux = Self::surface_flux(luminosity, radius);
        CoronalState {
            luminosity,
            xray_flux,
            temperature: self.temperature_from_flux(xray_flux),
        }
    }

    fn temperature_from_flux(&self, flux: HeatFluxDensity) -> ThermodynamicTemperature {
        let flux_cgs = flux.get::<watt_per_square_meter>() / W_M2_PER_ERG_S_CM2;
        ThermodynamicTemperature::new::<kelvin>(
            self.temperature_scale.get::<kelvin>() * flux_cgs.powf(self.flux_exponent),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::units::{gigayears, solar_radii};

    #[test]
    fn luminosity_at_one_gyr_is_the_fit_coefficient() {
        let activity = XrayActivity::default();
        assert_relative_eq!(
            activity.luminosity(gigayears(1.0)).get::<erg_per_second>(),
            6.76e27,
            max_relative = 1e-12
        );
    }

    #[test]
    fn luminosity_decreases_with_age() {
        let activity = XrayActivity::default();
        let ages = [0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 4.56, 10.0];
        for pair in ages.windows(2) {
            let young = activity.luminosity(gigayears(pair[0]));
            let old = activity.luminosity(gigayears(pair[1]));
            assert!(young > old, "L({}) should exceed L({})", pair[0], pair[1]);
        }
    }

    #[test]
    fn young_star_is_finite() {
        let state = XrayActivity::default().coronal_state(gigayears(0.01), solar_radii(1.0));
        assert!(state.luminosity.get::<erg_per_second>().is_finite());
        assert!(state.temperature.get::<kelvin>().is_finite());
        assert!(state.temperature.get::<kelvin>() > 1e7);
    }

    #[test]
    fn sun_has_megakelvin_corona() {
        let state = XrayActivity::default().coronal_state(gigayears(4.5), solar_radii(1.0));

        let l = 6.76e27 * 4.5_f64.powf(-1.92);
        assert_relative_eq!(state.luminosity.get::<erg_per_second>(), l, max_relative = 1e-9);

        let r = 6.957e10;
        let f = l / (4.0 * PI * r * r);
        assert_relative_eq!(
            state.xray_flux.get::<watt_per_square_meter>(),
            f * 1e-3,
            max_relative = 1e-9
        );

        let t = state.temperature.get::<kelvin>();
        assert_relative_eq!(t, 0.11 * f.powf(0.26) * 1e6, max_relative = 1e-9);
        assert!((0.9e6..1.2e6).contains(&t), "solar corona at {t} K");
    }

    #[test]
    fn larger_star_has_cooler_corona_at_same_luminosity() {
        let activity = XrayActivity::default();
        let l = activity.luminosity(gigayears(3.5));
        let small = activity.coronal_temperature(l, solar_radii(1.0));
        let large = activity.coronal_temperature(l, solar_radii(1.78));
        assert!(large < small);
    }
}
