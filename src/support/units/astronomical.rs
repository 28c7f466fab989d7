//! Astronomical scales that `uom` does not define.
//!
//! Catalogs quote stellar sizes in solar units, planets in Earth units and ages
//! in Gyr. These helpers convert between those scales and `uom` quantities.

use uom::si::{
    f64::{Length, Mass, Time},
    length::centimeter,
    mass::gram,
    time::second,
};

/// Nominal solar radius, cm.
pub const SOLAR_RADIUS_CM: f64 = 6.957e10;

/// Solar mass, g.
pub const SOLAR_MASS_G: f64 = 1.989e33;

/// Mean Earth radius, cm.
pub const EARTH_RADIUS_CM: f64 = 6.371e8;

/// Earth mass, g.
pub const EARTH_MASS_G: f64 = 5.972e27;

/// Seconds in one Gyr of 365-day years.
pub const SECONDS_PER_GYR: f64 = 3.1536e16;

/// Returns a length of `value` nominal solar radii.
#[must_use]
pub fn solar_radii(value: f64) -> Length {
    Length::new::<centimeter>(value * SOLAR_RADIUS_CM)
}

/// Returns a mass of `value` solar masses.
#[must_use]
pub fn solar_masses(value: f64) -> Mass {
    Mass::new::<gram>(value * SOLAR_MASS_G)
}

/// Returns a length of `value` Earth radii.
#[must_use]
pub fn earth_radii(value: f64) -> Length {
    Length::new::<centimeter>(value * EARTH_RADIUS_CM)
}

/// Returns a mass of `value` Earth masses.
#[must_use]
pub fn earth_masses(value: f64) -> Mass {
    Mass::new::<gram>(value * EARTH_MASS_G)
}

/// Returns a time span of `value` Gyr.
#[must_use]
pub fn gigayears(value: f64) -> Time {
    Time::new::<second>(value * SECONDS_PER_GYR)
}

/// Expresses a time span in Gyr.
#[must_use]
pub fn in_gigayears(time: Time) -> f64 {
    time.get::<second>() / SECONDS_PER_GYR
}

/// Expresses a length in nominal solar radii.
#[must_use]
pub fn in_solar_radii(length: Length) -> f64 {
    length.get::<centimeter>() / SOLAR_RADIUS_CM
}

/// Expresses a length in Earth radii.
#[must_use]
pub fn in_earth_radii(length: Length) -> f64 {
    length.get::<centimeter>() / EARTH_RADIUS_CM
}

/// Expresses a mass in solar masses.
#[must_use]
pub fn in_solar_masses(mass: Mass) -> f64 {
    mass.get::<gram>() / SOLAR_MASS_G
}

/// Expresses a mass in Earth masses.
#[must_use]
pub fn in_earth_masses(mass: Mass) -> f64 {
    mass.get::<gram>() / EARTH_MASS_G
}
