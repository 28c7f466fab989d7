//! TOML configuration for `exoloss`.
//!
//! Every section is optional and values are in conventional units (km/s, AU,
//! Gyr). Missing keys take the library defaults.

use std::path::Path;

use exoplanet_loss::{
    models::mass_loss::MassLossConfig,
    support::{
        escape::{Efficiency, EnergyLimitedEscape},
        parker::{NewtonConfig, WindSolverConfig, WindVelocitySolver},
    },
};
use serde::{Deserialize, Serialize};
use uom::si::{f64::{Length, Velocity}, length::astronomical_unit, velocity::kilometer_per_second};

use crate::error::Result;

/// Application configuration.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub escape: EscapeConfig,

    #[serde(default)]
    pub wind: WindConfig,

    #[serde(default)]
    pub integration: IntegrationConfig,
}

/// Photoevaporation settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EscapeConfig {
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,

    #[serde(default)]
    pub roche_lobe_correction: bool,
}

impl Default for EscapeConfig {
    fn default() -> Self {
        Self {
            efficiency: default_efficiency(),
            roche_lobe_correction: false,
        }
    }
}

/// Parker wind solver settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WindConfig {
    #[serde(default = "default_initial_velocity")]
    pub initial_velocity_km_s: f64,

    #[serde(default = "default_inner_radius")]
    pub inner_radius_au: f64,

    #[serde(default = "default_outer_radius_factor")]
    pub outer_radius_factor: f64,

    #[serde(default = "default_sweep_points")]
    pub points: usize,

    #[serde(default = "default_band_fraction")]
    pub band_fraction: f64,

    #[serde(default = "default_guess_growth")]
    pub guess_growth: f64,

    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    #[serde(default = "default_newton_iters")]
    pub newton_max_iters: usize,

    #[serde(default = "default_newton_tolerance")]
    pub newton_tolerance: f64,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            initial_velocity_km_s: default_initial_velocity(),
            inner_radius_au: default_inner_radius(),
            outer_radius_factor: default_outer_radius_factor(),
            points: default_sweep_points(),
            band_fraction: default_band_fraction(),
            guess_growth: default_guess_growth(),
            max_attempts: default_max_attempts(),
            newton_max_iters: default_newton_iters(),
            newton_tolerance: default_newton_tolerance(),
        }
    }
}

/// Age window and integration grid settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct IntegrationConfig {
    #[serde(default = "default_min_age")]
    pub min_age_gyr: f64,

    #[serde(default = "default_age_step")]
    pub age_step_gyr: f64,

    #[serde(default = "default_fine_grid_points")]
    pub fine_grid_points: usize,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            min_age_gyr: default_min_age(),
            age_step_gyr: default_age_step(),
            fine_grid_points: default_fine_grid_points(),
        }
    }
}

// Default value functions
fn default_efficiency() -> f64 {
    0.3
}

fn default_initial_velocity() -> f64 {
    5.0
}

fn default_inner_radius() -> f64 {
    0.1
}

fn default_outer_radius_factor() -> f64 {
    1.5
}

fn default_sweep_points() -> usize {
    100
}

fn default_band_fraction() -> f64 {
    0.1
}

fn default_guess_growth() -> f64 {
    1.5
}

fn default_max_attempts() -> usize {
    20
}

fn default_newton_iters() -> usize {
    100
}

fn default_newton_tolerance() -> f64 {
    1e-10
}

fn default_min_age() -> f64 {
    0.01
}

fn default_age_step() -> f64 {
    0.1
}

fn default_fine_grid_points() -> usize {
    5000
}

impl Config {
    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                tracing::debug!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Wind solver built from the `[wind]` section.
    pub fn wind_solver(&self) -> WindVelocitySolver {
        let wind = &self.wind;
        let defaults = WindSolverConfig::default();
        WindVelocitySolver::new(WindSolverConfig {
            initial_guess: Velocity::new::<kilometer_per_second>(wind.initial_velocity_km_s),
            inner_radius: Length::new::<astronomical_unit>(wind.inner_radius_au),
            outer_radius_factor: wind.outer_radius_factor,
            points: wind.points,
            band_fraction: wind.band_fraction,
            guess_growth: wind.guess_growth,
            max_attempts: wind.max_attempts,
            newton: NewtonConfig {
                max_iters: wind.newton_max_iters,
                residual_tol: wind.newton_tolerance,
                ..defaults.newton
            },
        })
    }

    /// Model configuration; fails if the efficiency is out of range.
    pub fn mass_loss(&self) -> Result<MassLossConfig> {
        let efficiency = Efficiency::new(self.escape.efficiency)?;
        Ok(MassLossConfig {
            escape: EnergyLimitedEscape::new(efficiency)
                .with_roche_lobe_correction(self.escape.roche_lobe_correction),
            wind: self.wind_solver(),
            fine_grid_points: self.integration.fine_grid_points,
            ..MassLossConfig::default()
        })
    }
}
