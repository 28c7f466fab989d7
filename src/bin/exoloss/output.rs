//! Report rendering: plain text for terminals, JSON for scripts.

use std::io::{self, Write};

use exoplanet_loss::{
    models::mass_loss::{AgeSample, MassLossReport},
    support::{
        parker::{VelocitySample, WindSolution},
        stellar::DensitySample,
        system::SystemParameters,
        units::{in_earth_masses, in_earth_radii, in_gigayears, in_solar_masses, in_solar_radii},
    },
};
use serde::Serialize;
use uom::si::{
    heat_flux_density::watt_per_square_meter,
    length::astronomical_unit,
    mass::gram,
    mass_density::gram_per_cubic_centimeter,
    mass_rate::gram_per_second,
    power::erg_per_second,
    ratio::percent,
    thermodynamic_temperature::kelvin,
    velocity::kilometer_per_second,
};

const ERG_S_CM2_PER_W_M2: f64 = 1e3;

#[derive(Debug, Serialize)]
pub struct SystemRecord {
    pub star_radius_solar: f64,
    pub star_mass_solar: f64,
    pub star_age_gyr: f64,
    pub planet_radius_earth: f64,
    pub planet_mass_earth: f64,
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
}

impl From<&SystemParameters> for SystemRecord {
    fn from(system: &SystemParameters) -> Self {
        let (star, planet) = (&system.star, &system.planet);
        Self {
            star_radius_solar: in_solar_radii(star.radius()),
            star_mass_solar: in_solar_masses(star.mass()),
            star_age_gyr: in_gigayears(star.age()),
            planet_radius_earth: in_earth_radii(planet.radius()),
            planet_mass_earth: in_earth_masses(planet.mass()),
            semi_major_axis_au: planet.semi_major_axis().get::<astronomical_unit>(),
            eccentricity: planet.eccentricity(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SampleRecord {
    pub age_gyr: f64,
    pub luminosity_erg_s: f64,
    pub xray_flux_erg_s_cm2: f64,
    pub coronal_temperature_k: f64,
    pub wind_velocity_km_s: f64,
    pub wind_density_g_cm3: f64,
    pub photoevaporation_rate_g_s: f64,
    pub wind_rate_g_s: f64,
}

impl From<&AgeSample> for SampleRecord {
    fn from(sample: &AgeSample) -> Self {
        Self {
            age_gyr: in_gigayears(sample.age),
            luminosity_erg_s: sample.luminosity.get::<erg_per_second>(),
            xray_flux_erg_s_cm2: sample.xray_flux.get::<watt_per_square_meter>()
                * ERG_S_CM2_PER_W_M2,
            coronal_temperature_k: sample.coronal_temperature.get::<kelvin>(),
            wind_velocity_km_s: sample.wind_velocity.get::<kilometer_per_second>(),
            wind_density_g_cm3: sample.wind_density.get::<gram_per_cubic_centimeter>(),
            photoevaporation_rate_g_s: sample.photoevaporation_rate.get::<gram_per_second>(),
            wind_rate_g_s: sample.wind_rate.get::<gram_per_second>(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LifetimeRecord {
    pub photoevaporation_g: f64,
    pub wind_g: f64,
    pub total_g: f64,
    pub photoevaporation_percent: f64,
    pub wind_percent: f64,
    pub total_percent: f64,
}

/// Everything `estimate --json` prints.
#[derive(Debug, Serialize)]
pub struct EstimateRecord {
    pub system: SystemRecord,
    pub current: SampleRecord,
    pub lifetime: LifetimeRecord,
    pub series: Vec<SampleRecord>,
}

impl EstimateRecord {
    pub fn new(system: &SystemParameters, report: &MassLossReport) -> Self {
        let lifetime = &report.lifetime;
        Self {
            system: system.into(),
            current: (&report.current).into(),
            lifetime: LifetimeRecord {
                photoevaporation_g: lifetime.photoevaporation.get::<gram>(),
                wind_g: lifetime.wind.get::<gram>(),
                total_g: lifetime.total.get::<gram>(),
                photoevaporation_percent: report.photoevaporation_fraction().get::<percent>(),
                wind_percent: report.wind_fraction().get::<percent>(),
                total_percent: report.total_fraction().get::<percent>(),
            },
            series: lifetime.series.iter().map(SampleRecord::from).collect(),
        }
    }
}

/// One point of a wind speed profile; `velocity_km_s` is null where the
/// solver found no root.
#[derive(Debug, Serialize)]
pub struct WindPointRecord {
    pub distance_au: f64,
    pub velocity_km_s: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct WindProfileRecord {
    pub coronal_temperature_k: f64,
    pub attempts: usize,
    pub trend_satisfied: bool,
    pub initial_guess_km_s: f64,
    pub samples: Vec<WindPointRecord>,
}

impl WindProfileRecord {
    pub fn new(temperature_k: f64, solution: &WindSolution) -> Self {
        Self {
            coronal_temperature_k: temperature_k,
            attempts: solution.attempts(),
            trend_satisfied: solution.trend_satisfied(),
            initial_guess_km_s: solution.initial_guess().get::<kilometer_per_second>(),
            samples: solution
                .samples()
                .iter()
                .map(|sample| WindPointRecord {
                    distance_au: sample.distance.get::<astronomical_unit>(),
                    velocity_km_s: match sample.velocity {
                        VelocitySample::Valid(v) => Some(v.get::<kilometer_per_second>()),
                        VelocitySample::Missing => None,
                    },
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DensityPointRecord {
    pub distance_au: f64,
    pub number_density_cm3: f64,
}

impl From<&DensitySample> for DensityPointRecord {
    fn from(sample: &DensitySample) -> Self {
        Self {
            distance_au: sample.distance.get::<astronomical_unit>(),
            number_density_cm3: sample.number_density,
        }
    }
}

pub fn write_json(out: &mut impl Write, value: &impl Serialize) -> crate::error::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_estimate(out: &mut impl Write, record: &EstimateRecord) -> io::Result<()> {
    let system = &record.system;
    writeln!(out, "System")?;
    writeln!(
        out,
        "  star:   R = {:.3} R☉, M = {:.3} M☉, age = {:.3} Gyr",
        system.star_radius_solar, system.star_mass_solar, system.star_age_gyr
    )?;
    writeln!(
        out,
        "  planet: R = {:.3} R⊕, M = {:.3} M⊕, a = {:.5} AU, e = {:.3}",
        system.planet_radius_earth,
        system.planet_mass_earth,
        system.semi_major_axis_au,
        system.eccentricity
    )?;

    let current = &record.current;
    writeln!(out)?;
    writeln!(out, "Current state ({:.3} Gyr)", current.age_gyr)?;
    writeln!(out, "  X-ray luminosity:     {:.4e} erg/s", current.luminosity_erg_s)?;
    writeln!(out, "  X-ray surface flux:   {:.4e} erg/s/cm²", current.xray_flux_erg_s_cm2)?;
    writeln!(out, "  coronal temperature:  {:.4e} K", current.coronal_temperature_k)?;
    writeln!(out, "  wind speed at orbit:  {:.2} km/s", current.wind_velocity_km_s)?;
    writeln!(out, "  wind density:         {:.4e} g/cm³", current.wind_density_g_cm3)?;
    writeln!(out, "  photoevaporation:     {:.4e} g/s", current.photoevaporation_rate_g_s)?;
    writeln!(out, "  wind stripping:       {:.4e} g/s", current.wind_rate_g_s)?;

    let lifetime = &record.lifetime;
    writeln!(out)?;
    writeln!(out, "Lifetime mass loss")?;
    writeln!(
        out,
        "  photoevaporation:     {:.4e} g ({:.6} %)",
        lifetime.photoevaporation_g, lifetime.photoevaporation_percent
    )?;
    writeln!(
        out,
        "  wind stripping:       {:.4e} g ({:.6} %)",
        lifetime.wind_g, lifetime.wind_percent
    )?;
    writeln!(
        out,
        "  total:                {:.4e} g ({:.6} %)",
        lifetime.total_g, lifetime.total_percent
    )?;

    writeln!(out)?;
    writeln!(
        out,
        "{:>10} {:>14} {:>12} {:>14} {:>14}",
        "age [Gyr]", "L_X [erg/s]", "v [km/s]", "Ṁ_X [g/s]", "Ṁ_wind [g/s]"
    )?;
    for sample in &record.series {
        writeln!(
            out,
            "{:>10.3} {:>14.4e} {:>12.2} {:>14.4e} {:>14.4e}",
            sample.age_gyr,
            sample.luminosity_erg_s,
            sample.wind_velocity_km_s,
            sample.photoevaporation_rate_g_s,
            sample.wind_rate_g_s
        )?;
    }
    Ok(())
}

pub fn write_wind_profile(out: &mut impl Write, record: &WindProfileRecord) -> io::Result<()> {
    writeln!(
        out,
        "Parker wind at T = {:.4e} K ({} attempt(s), initial guess {:.2} km/s{})",
        record.coronal_temperature_k,
        record.attempts,
        record.initial_guess_km_s,
        if record.trend_satisfied { "" } else { ", best effort" }
    )?;
    writeln!(out, "{:>14} {:>14}", "distance [AU]", "v [km/s]")?;
    for point in &record.samples {
        match point.velocity_km_s {
            Some(v) => writeln!(out, "{:>14.5} {:>14.3}", point.distance_au, v)?,
            None => writeln!(out, "{:>14.5} {:>14}", point.distance_au, "-")?,
        }
    }
    Ok(())
}

pub fn write_density_profile(out: &mut impl Write, points: &[DensityPointRecord]) -> io::Result<()> {
    writeln!(out, "{:>14} {:>16}", "distance [AU]", "n [cm⁻³]")?;
    for point in points {
        writeln!(out, "{:>14.5} {:>16.5e}", point.distance_au, point.number_density_cm3)?;
    }
    Ok(())
}
