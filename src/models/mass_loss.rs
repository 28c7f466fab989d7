//! Lifetime atmospheric mass loss.
//!
//! [`MassLoss`] combines X-ray photoevaporation and stellar-wind stripping
//! over a window of stellar ages. The computational core is in the internal
//! [`core`] module.

pub(crate) mod core;

use twine_core::Model;

use crate::support::catalog::SystemCatalog;

pub use self::core::{
    AgeSample, AgeWindow, DisplayStep, IntegrationResult, MassLossConfig, MassLossError,
    MassLossInput, MassLossReport, ReferenceAges,
};

/// Mass-loss model.
///
/// # Example
///
/// ```no_run
/// use exoplanet_loss::models::mass_loss::{MassLoss, MassLossInput};
/// use exoplanet_loss::support::catalog::{StaticCatalog, SystemCatalog};
/// use twine_core::Model;
/// use uom::si::ratio::percent;
///
/// let system = StaticCatalog::with_known_systems().lookup("Kepler-7", "b").unwrap();
/// let report = MassLoss::default()
///     .call(&MassLossInput::new(system).unwrap())
///     .unwrap();
/// println!("{:.3} % lost", report.total_fraction().get::<percent>());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MassLoss {
    config: MassLossConfig,
}

impl MassLoss {
    #[must_use]
    pub fn new(config: MassLossConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &MassLossConfig {
        &self.config
    }

    /// Looks up a system and runs the model over its default window.
    ///
    /// # Errors
    ///
    /// Returns [`MassLossError::UpstreamDataUnavailable`] if the lookup fails,
    /// or any error [`Model::call`] can return.
    pub fn call_for(
        &self,
        catalog: &impl SystemCatalog,
        star: &str,
        planet: &str,
    ) -> Result<MassLossReport, MassLossError> {
        let system = catalog.lookup(star, planet)?;
        self.call(&MassLossInput::new(system)?)
    }
}

impl Model for MassLoss {
    type Input = MassLossInput;
    type Output = MassLossReport;
    type Error = MassLossError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::estimate(&self.config, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::catalog::{LookupError, StaticCatalog};

    #[test]
    fn unknown_system_is_upstream_error() {
        let err = MassLoss::default()
            .call_for(&StaticCatalog::new(), "Kepler-7", "b")
            .unwrap_err();
        assert!(matches!(
            err,
            MassLossError::UpstreamDataUnavailable(LookupError::NotFound { .. })
        ));
    }

    #[test]
    fn runs_from_catalog() {
        let report = MassLoss::default()
            .call_for(&StaticCatalog::with_known_systems(), "Sun", "Earth")
            .unwrap();
        assert!(report.lifetime.total.get::<uom::si::mass::gram>() > 0.0);
    }
}
