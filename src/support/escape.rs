//! Atmospheric escape rates.
//!
//! Two mechanisms remove mass from a close-in planet:
//!
//! - [`EnergyLimitedEscape`]: X-ray driven photoevaporation, where a fixed
//!   fraction of the absorbed stellar X-ray energy lifts gas out of the
//!   planet's potential well.
//! - [`wind_stripping_rate`]: direct stripping by the stellar wind, taken as
//!   the wind mass flux through the planet's cross-section.
//!
//! Both are closed-form and assume their inputs have already been validated.

mod efficiency;
mod energy_limited;
mod wind_stripping;

pub use efficiency::{Efficiency, EfficiencyRange};
pub use energy_limited::{EnergyLimitedEscape, RocheLobeOverflow, mean_orbital_distance};
pub use wind_stripping::wind_stripping_rate;
