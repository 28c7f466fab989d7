use uom::si::f64::Time;

use crate::support::{
    escape::EnergyLimitedEscape,
    parker::WindVelocitySolver,
    stellar::{WindDensity, XrayActivity},
    units::gigayears,
};

use super::AgeWindow;

/// Configuration for the mass-loss model.
///
/// Every fit coefficient and physical constant lives in one of these
/// components.
#[derive(Debug, Clone, PartialEq)]
pub struct MassLossConfig {
    pub activity: XrayActivity,
    pub density: WindDensity,
    pub escape: EnergyLimitedEscape,
    pub wind: WindVelocitySolver,

    /// Points in the uniform grid the rates are integrated on.
    pub fine_grid_points: usize,

    pub reference_ages: ReferenceAges,
}

impl Default for MassLossConfig {
    fn default() -> Self {
        Self {
            activity: XrayActivity::default(),
            density: WindDensity::default(),
            escape: EnergyLimitedEscape::default(),
            wind: WindVelocitySolver::default(),
            fine_grid_points: 5000,
            reference_ages: ReferenceAges::default(),
        }
    }
}

/// Fixed ages at which the physical rates are evaluated.
///
/// The default set is concentrated at young ages, where X-ray activity
/// changes fastest: `{1, 1.5, 2, 3, …, 9} × 10ⁿ` Gyr from 0.01 Gyr, capped at
/// 20 Gyr.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceAges(Vec<Time>);

impl ReferenceAges {
    const MANTISSAS: [f64; 10] = [1.0, 1.5, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    const DECADES: [f64; 4] = [0.01, 0.1, 1.0, 10.0];
    const MAX_GYR: f64 = 20.0;

    /// Custom reference set; ages are sorted and duplicates removed.
    #[must_use]
    pub fn new(mut ages: Vec<Time>) -> Self {
        ages.retain(|age| age.value.is_finite());
        ages.sort_by(|a, b| a.value.total_cmp(&b.value));
        ages.dedup();
        Self(ages)
    }

    #[must_use]
    pub fn ages(&self) -> &[Time] {
        &self.0
    }

    /// Reference ages strictly inside the window, bracketed by its endpoints.
    ///
    /// Ages within a relative `1e-9` of an endpoint are dropped so the
    /// result is strictly ascending.
    #[must_use]
    pub fn within(&self, window: &AgeWindow) -> Vec<Time> {
        let (min, max) = (window.min(), window.max());
        let margin = (max - min) * 1e-9;

        let mut ages = Vec::with_capacity(self.0.len() + 2);
        ages.push(min);
        ages.extend(
            self.0
                .iter()
                .copied()
                .filter(|&age| age > min + margin && age < max - margin),
        );
        ages.push(max);
        ages
    }
}

impl Default for ReferenceAges {
    fn default() -> Self {
        let ages = Self::DECADES
            .iter()
            .flat_map(|decade| Self::MANTISSAS.iter().map(move |m| m * decade))
            .filter(|&age| age <= Self::MAX_GYR)
            .map(gigayears)
            .collect();
        Self::new(ages)
    }
}
