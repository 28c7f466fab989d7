//! Empirical descriptions of a star's high-energy output and wind.
//!
//! - [`XrayActivity`]: X-ray luminosity as a power law in age, and the coronal
//!   temperature that follows from the resulting surface flux.
//! - [`WindDensity`]: A three-term radial number density profile of the wind,
//!   converted to mass density and scaled with stellar age.

mod activity;
mod wind_density;

pub use activity::{CoronalState, XrayActivity};
pub use wind_density::{DensitySample, WindDensity};
