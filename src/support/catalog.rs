//! Star and planet parameter lookup.
//!
//! The mass-loss models only need validated [`SystemParameters`]; where they
//! come from (a remote archive, a local cache, a table in memory) is the
//! business of a [`SystemCatalog`] implementation.

use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;
use uom::si::{f64::Length, length::astronomical_unit};

use crate::support::{
    system::{ParameterError, PlanetaryParameters, StellarParameters, SystemParameters},
    units::{earth_masses, earth_radii, gigayears, solar_masses, solar_radii},
};

/// A system could not be provided.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no planet {planet:?} orbiting {star:?}")]
    NotFound { star: String, planet: String },

    /// The backing source failed or returned unusable data.
    #[error("catalog unavailable: {context}")]
    Unavailable { context: String },
}

/// Source of star and planet parameters keyed by name.
pub trait SystemCatalog {
    /// Looks up one planet and its host star.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] if the catalog has no such planet,
    /// or [`LookupError::Unavailable`] if the source could not be queried.
    fn lookup(&self, star: &str, planet: &str) -> Result<SystemParameters, LookupError>;
}

/// In-memory catalog.
///
/// Names are matched case-insensitively with surrounding whitespace ignored.
///
/// ```
/// use exoplanet_loss::support::catalog::{StaticCatalog, SystemCatalog};
///
/// let catalog = StaticCatalog::with_known_systems();
/// let system = catalog.lookup("Kepler-7", "b").unwrap();
/// assert!(system.planet.eccentricity() > 0.0);
/// assert!(catalog.lookup("Kepler-7", "c").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    systems: HashMap<(String, String), SystemParameters>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding Kepler-7 b and the Sun–Earth system.
    #[must_use]
    pub fn with_known_systems() -> Self {
        let mut catalog = Self::new();
        for (star, planet, system) in known_systems() {
            catalog.insert(star, planet, system);
        }
        catalog
    }

    /// Adds or replaces a system.
    pub fn insert(&mut self, star: &str, planet: &str, system: SystemParameters) {
        self.systems.insert(key(star, planet), system);
    }

    /// `(star, planet)` names in the catalog, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<(String, String)> {
        let mut names: Vec<_> = self.systems.keys().cloned().collect();
        names.sort();
        names
    }
}

impl SystemCatalog for StaticCatalog {
    fn lookup(&self, star: &str, planet: &str) -> Result<SystemParameters, LookupError> {
        self.systems
            .get(&key(star, planet))
            .copied()
            .ok_or_else(|| LookupError::NotFound {
                star: star.to_owned(),
                planet: planet.to_owned(),
            })
    }
}

fn key(star: &str, planet: &str) -> (String, String) {
    (star.trim().to_lowercase(), planet.trim().to_lowercase())
}

type Entry = (&'static str, &'static str, Result<SystemParameters, ParameterError>);

fn built_in_entries() -> [Entry; 2] {
    [
        (
            "Kepler-7",
            "b",
            system((1.78, 1.41, 3.5), (18.18, 140.0, 0.06067, 0.026)),
        ),
        ("Sun", "Earth", system((1.0, 1.0, 4.5), (1.0, 1.0, 1.0, 0.0167))),
    ]
}

/// Validated built-in entries. An entry that fails validation trips a debug
/// assertion and is logged and skipped in release builds.
fn known_systems() -> Vec<(&'static str, &'static str, SystemParameters)> {
    built_in_entries()
        .into_iter()
        .filter_map(|(star, planet, system)| {
            debug_assert!(system.is_ok(), "built-in system {star}/{planet}: {system:?}");
            system
                .inspect_err(|err| warn!(star, planet, %err, "skipping invalid built-in system"))
                .ok()
                .map(|system| (star, planet, system))
        })
        .collect()
}

/// Builds a system from conventional units: (R☉, M☉, Gyr) and (R⊕, M⊕, AU, e).
fn system(
    (star_radius, star_mass, star_age): (f64, f64, f64),
    (planet_radius, planet_mass, semi_major_axis, eccentricity): (f64, f64, f64, f64),
) -> Result<SystemParameters, ParameterError> {
    Ok(SystemParameters {
        star: StellarParameters::new(
            solar_radii(star_radius),
            solar_masses(star_mass),
            gigayears(star_age),
        )?,
        planet: PlanetaryParameters::new(
            earth_radii(planet_radius),
            earth_masses(planet_mass),
            Length::new::<astronomical_unit>(semi_major_axis),
            eccentricity,
        )?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::units::{in_earth_radii, in_gigayears};

    #[test]
    fn serves_known_systems() {
        let catalog = StaticCatalog::with_known_systems();
        assert_eq!(catalog.names().len(), 2);

        let kepler = catalog.lookup("Kepler-7", "b").unwrap();
        assert!((in_earth_radii(kepler.planet.radius()) - 18.18).abs() < 1e-9);
        assert!((in_gigayears(kepler.star.age()) - 3.5).abs() < 1e-12);

        let earth = catalog.lookup("sun", " EARTH ").unwrap();
        assert_eq!(earth.planet.eccentricity(), 0.0167);
    }

    #[test]
    fn every_built_in_entry_is_valid() {
        for (star, planet, system) in built_in_entries() {
            assert!(system.is_ok(), "{star}/{planet}: {system:?}");
        }
        assert_eq!(known_systems().len(), built_in_entries().len());
    }

    #[test]
    fn unknown_planet_is_not_found() {
        let catalog = StaticCatalog::with_known_systems();
        assert_eq!(
            catalog.lookup("Kepler-7", "c"),
            Err(LookupError::NotFound {
                star: "Kepler-7".into(),
                planet: "c".into(),
            })
        );
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut catalog = StaticCatalog::with_known_systems();
        let hotter = system((1.0, 1.0, 1.0), (1.0, 1.0, 0.5, 0.0)).unwrap();
        catalog.insert("SUN", "earth", hotter);
        assert_eq!(catalog.lookup("Sun", "Earth").unwrap(), hotter);
        assert_eq!(catalog.names().len(), 2);
    }
}
