use uom::si::{
    f64::{Mass, Ratio},
    mass::gram,
    ratio::ratio,
};

use super::AgeSample;

/// Lifetime-integrated mass loss over an age window.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationResult {
    pub photoevaporation: Mass,
    pub wind: Mass,

    /// Sum of both mechanisms.
    pub total: Mass,

    /// Samples at the fixed reference ages the totals were integrated from.
    pub reference_samples: Vec<AgeSample>,

    /// Samples at the caller's display step, for charting.
    pub series: Vec<AgeSample>,
}

/// Output of the mass-loss model.
#[derive(Debug, Clone, PartialEq)]
pub struct MassLossReport {
    /// Instantaneous state at the star's current age.
    pub current: AgeSample,

    pub lifetime: IntegrationResult,

    /// Planet mass the fractions are relative to.
    pub planet_mass: Mass,
}

impl MassLossReport {
    /// Lifetime photoevaporation loss as a fraction of planet mass.
    #[must_use]
    pub fn photoevaporation_fraction(&self) -> Ratio {
        self.fraction_of_planet(self.lifetime.photoevaporation)
    }

    /// Lifetime wind stripping loss as a fraction of planet mass.
    #[must_use]
    pub fn wind_fraction(&self) -> Ratio {
        self.fraction_of_planet(self.lifetime.wind)
    }

    /// Combined lifetime loss as a fraction of planet mass.
    #[must_use]
    pub fn total_fraction(&self) -> Ratio {
        self.fraction_of_planet(self.lifetime.total)
    }

    fn fraction_of_planet(&self, loss: Mass) -> Ratio {
        Ratio::new::<ratio>(loss.get::<gram>() / self.planet_mass.get::<gram>())
    }
}
