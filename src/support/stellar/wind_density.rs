use uom::si::{
    f64::{Length, Mass, MassDensity, Time},
    mass::gram,
    mass_density::gram_per_cubic_centimeter,
    ratio::ratio,
};

use crate::support::{
    interp::linspace,
    units::{gigayears, in_solar_radii, solar_radii},
};

/// One power-law term `n₀ · r^p` of the number density profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityTerm {
    /// Number density at one solar radius, cm⁻³.
    pub coefficient: f64,

    /// Radial exponent.
    pub exponent: f64,
}

/// Empirical stellar wind density profile.
///
/// The number density is a sum of power laws in `r` (nominal solar radii),
/// each dominating a different radial regime:
///
/// ```text
/// n(r) = 7×10⁴ r^−1.67 + 4.1×10⁶ r^−4 + 2.6×10⁷ r^−6    [cm⁻³]
/// ```
///
/// Mass density assumes a mean particle mass of half a hydrogen mass and
/// scales with age as `(t_ref / t)^0.3`, normalized to a 4.56 Gyr star.
/// The profile decreases monotonically in both distance and age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindDensity {
    pub terms: [DensityTerm; 3],

    /// Mean mass per wind particle.
    pub particle_mass: Mass,

    /// Age at which the age scaling is one.
    pub reference_age: Time,

    /// Exponent of the age scaling.
    pub age_exponent: f64,
}

impl Default for WindDensity {
    fn default() -> Self {
        Self {
            terms: [
                DensityTerm {
                    coefficient: 7e4,
                    exponent: -1.67,
                },
                DensityTerm {
                    coefficient: 4.1e6,
                    exponent: -4.0,
                },
                DensityTerm {
                    coefficient: 2.6e7,
                    exponent: -6.0,
                },
            ],
            particle_mass: Mass::new::<gram>(1.67e-24 / 2.0),
            reference_age: gigayears(4.56),
            age_exponent: 0.3,
        }
    }
}

/// Number density of the wind at one distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensitySample {
    pub distance: Length,

    /// Particles per cm³.
    pub number_density: f64,
}

impl WindDensity {
    /// Number density (cm⁻³) at distance `r` from the star's center.
    #[must_use]
    pub fn number_density(&self, r: Length) -> f64 {
        let r = in_solar_radii(r);
        self.terms
            .iter()
            .map(|term| term.coefficient * r.powf(term.exponent))
            .sum()
    }

    /// Mass density at distance `r` around a star of the given age.
    #[must_use]
    pub fn mass_density(&self, r: Length, age: Time) -> MassDensity {
        let age_factor = (self.reference_age / age).get::<ratio>().powf(self.age_exponent);
        MassDensity::new::<gram_per_cubic_centimeter>(
            self.number_density(r) * self.particle_mass.get::<gram>() * age_factor,
        )
    }

    /// Evenly spaced number density samples between two distances, both included.
    #[must_use]
    pub fn number_density_profile(&self, start: Length, end: Length, points: usize) -> Vec<DensitySample> {
        linspace(in_solar_radii(start), in_solar_radii(end), points)
            .into_iter()
            .map(|r| {
                let distance = solar_radii(r);
                DensitySample {
                    distance,
                    number_density: self.number_density(distance),
                }
            })
            .collect()
    }
}
