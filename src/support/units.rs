//! Extensions to [`uom`] for astrophysical work.
//!
//! This crate uses [`uom`] for all physical quantities at its public boundary.
//! `uom` has no notion of solar radii, Earth masses or Gyr, so this module
//! provides conversions for those scales, plus the [`PhysicalConstants`] the
//! CGS formulas need.
//!
//! ```
//! use exoplanet_loss::support::units::{earth_radii, in_earth_radii};
//!
//! let r = earth_radii(18.18);
//! assert!((in_earth_radii(r) - 18.18).abs() < 1e-12);
//! ```

mod astronomical;
mod constants;

pub use astronomical::{
    EARTH_MASS_G, EARTH_RADIUS_CM, SECONDS_PER_GYR, SOLAR_MASS_G, SOLAR_RADIUS_CM, earth_masses,
    earth_radii, gigayears, in_earth_masses, in_earth_radii, in_gigayears, in_solar_masses,
    in_solar_radii, solar_masses, solar_radii,
};
pub use constants::PhysicalConstants;
