use std::f64::consts::PI;

use thiserror::Error;
use uom::si::{
    f64::{Length, Mass, MassRate, Power},
    length::centimeter,
    mass::gram,
    mass_rate::gram_per_second,
    power::erg_per_second,
};

use crate::support::{system::PlanetaryParameters, units::PhysicalConstants};

use super::Efficiency;

/// The planet fills its Roche lobe, so the tidal correction is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("planet overflows its Roche lobe (E = {roche_ratio:.4}, K = {factor:.4})")]
pub struct RocheLobeOverflow {
    /// Roche lobe radius over planet radius, `E`.
    pub roche_ratio: f64,

    /// Tidal enhancement factor `K(E)`, not positive.
    pub factor: f64,
}

/// Eccentricity-averaged orbital distance, `a (1 + e²/2)`.
///
/// Reduces to `a` exactly for a circular orbit.
#[must_use]
pub fn mean_orbital_distance(semi_major_axis: Length, eccentricity: f64) -> Length {
    semi_major_axis * (1.0 + 0.5 * eccentricity * eccentricity)
}

/// Energy-limited photoevaporation.
///
/// ```text
/// Ṁ = η · L_X · R_p³ / (3 G M_p a_eff²)
/// ```
///
/// With [`roche_lobe_correction`](Self::roche_lobe_correction) enabled the
/// rate is divided by the tidal factor
///
/// ```text
/// K(E) = 1 − 3/(2E) + 1/(2E³),    E = a_eff (4π ρ_p / 9 M_*)^(1/3)
/// ```
///
/// which accounts for the star's gravity lowering the escape barrier.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyLimitedEscape {
    pub efficiency: Efficiency,
    pub constants: PhysicalConstants,
    pub roche_lobe_correction: bool,
}

impl EnergyLimitedEscape {
    #[must_use]
    pub fn new(efficiency: Efficiency) -> Self {
        Self {
            efficiency,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_roche_lobe_correction(self, enabled: bool) -> Self {
        Self {
            roche_lobe_correction: enabled,
            ..self
        }
    }

    /// Photoevaporation rate for the given X-ray luminosity and host star mass.
    ///
    /// The stellar mass only matters when the Roche-lobe correction is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`RocheLobeOverflow`] if the correction is enabled and the
    /// planet fills its Roche lobe.
    pub fn rate(
        &self,
        luminosity: Power,
        planet: &PlanetaryParameters,
        stellar_mass: Mass,
    ) -> Result<MassRate, RocheLobeOverflow> {
        let uncorrected = self.uncorrected_rate(luminosity, planet);
        if !self.roche_lobe_correction {
            return Ok(uncorrected);
        }
        let factor = roche_lobe_factor(planet, stellar_mass)?;
        Ok(uncorrected / factor)
    }

    /// Energy-limited rate without the tidal correction.
    #[must_use]
    pub fn uncorrected_rate(&self, luminosity: Power, planet: &PlanetaryParameters) -> MassRate {
        let l = luminosity.get::<erg_per_second>();
        let r = planet.radius().get::<centimeter>();
        let m = planet.mass().get::<gram>();
        let a = mean_orbital_distance(planet.semi_major_axis(), planet.eccentricity())
            .get::<centimeter>();
        let g = self.constants.gravitational_constant;

        MassRate::new::<gram_per_second>(
            self.efficiency.value() * l * r.powi(3) / (3.0 * g * m * a * a),
        )
    }
}

/// Tidal enhancement factor `K(E)`.
fn roche_lobe_factor(
    planet: &PlanetaryParameters,
    stellar_mass: Mass,
) -> Result<f64, RocheLobeOverflow> {
    let r = planet.radius().get::<centimeter>();
    let planet_density = planet.mass().get::<gram>() / (4.0 / 3.0 * PI * r.powi(3));
    let a = mean_orbital_distance(planet.semi_major_axis(), planet.eccentricity())
        .get::<centimeter>();

    let roche_ratio = a * (4.0 * PI * planet_density / (9.0 * stellar_mass.get::<gram>())).cbrt();
    let factor = 1.0 - 1.5 / roche_ratio + 0.5 / roche_ratio.powi(3);

    // K(E) = (E − 1)²(2E + 1) / 2E³ only vanishes at E = 1, but any E ≤ 1 is overflow.
    if roche_ratio > 1.0 && factor > 0.0 {
        Ok(factor)
    } else {
        Err(RocheLobeOverflow {
            roche_ratio,
            factor,
        })
    }
}
