//! End-to-end runs of the mass-loss pipeline on reference systems.

use approx::assert_relative_eq;
use exoplanet_loss::{
    models::{
        mass_loss::{AgeWindow, DisplayStep, MassLoss, MassLossConfig, MassLossInput},
        stellar_wind::{WindSpeed, WindSpeedInput},
    },
    support::{
        catalog::{StaticCatalog, SystemCatalog},
        escape::{EnergyLimitedEscape, Efficiency},
        stellar::XrayActivity,
        system::{PlanetaryParameters, StellarParameters, SystemParameters},
        units::{earth_masses, earth_radii, gigayears, solar_masses, solar_radii},
    },
};
use twine_core::Model;
use uom::si::{
    f64::Length,
    heat_flux_density::watt_per_square_meter,
    length::astronomical_unit,
    mass::gram,
    mass_rate::gram_per_second,
    power::erg_per_second,
    ratio::percent,
    thermodynamic_temperature::kelvin,
    velocity::kilometer_per_second,
};

fn earth_analog() -> SystemParameters {
    SystemParameters {
        star: StellarParameters::new(solar_radii(1.0), solar_masses(1.0), gigayears(4.5)).unwrap(),
        planet: PlanetaryParameters::new(
            earth_radii(1.0),
            earth_masses(1.0),
            Length::new::<astronomical_unit>(1.0),
            0.0167,
        )
        .unwrap(),
    }
}

fn kepler_7b() -> SystemParameters {
    StaticCatalog::with_known_systems().lookup("Kepler-7", "b").unwrap()
}

fn run(system: SystemParameters) -> exoplanet_loss::models::mass_loss::MassLossReport {
    MassLoss::default()
        .call(&MassLossInput::new(system).unwrap())
        .unwrap()
}

#[test]
fn earth_analog_loses_a_negligible_fraction() {
    let report = run(earth_analog());

    assert!(report.photoevaporation_fraction().get::<percent>() < 0.5);
    assert!(report.total_fraction().get::<percent>() < 1.0);

    let wind = report.current.wind_velocity.get::<kilometer_per_second>();
    assert!((100.0..1000.0).contains(&wind), "wind at 1 AU: {wind} km/s");
}

#[test]
fn hot_jupiter_photoevaporates_orders_of_magnitude_faster() {
    let earth = run(earth_analog());
    let kepler = run(kepler_7b());

    let ratio = kepler.current.photoevaporation_rate.get::<gram_per_second>()
        / earth.current.photoevaporation_rate.get::<gram_per_second>();
    assert!(ratio > 1e3, "Kepler-7b / Earth photoevaporation ratio {ratio}");
    assert!(kepler.lifetime.photoevaporation > earth.lifetime.photoevaporation);
}

#[test]
fn pipeline_is_idempotent() {
    let model = MassLoss::default();
    let input = MassLossInput::new(kepler_7b()).unwrap();
    assert_eq!(model.call(&input).unwrap(), model.call(&input).unwrap());
}

#[test]
fn totals_do_not_depend_on_display_step() {
    let model = MassLoss::default();
    let input = MassLossInput::new(earth_analog()).unwrap();
    let fine = model
        .call(&input.with_display_step(DisplayStep::new(gigayears(0.05)).unwrap()))
        .unwrap();
    let coarse = model
        .call(&input.with_display_step(DisplayStep::new(gigayears(0.5)).unwrap()))
        .unwrap();

    assert_relative_eq!(
        fine.lifetime.wind.get::<gram>(),
        coarse.lifetime.wind.get::<gram>(),
        max_relative = 1e-3
    );
    assert_relative_eq!(
        fine.lifetime.photoevaporation.get::<gram>(),
        coarse.lifetime.photoevaporation.get::<gram>(),
        max_relative = 1e-3
    );
}

#[test]
fn youngest_reference_age_is_finite() {
    let state = XrayActivity::default().coronal_state(gigayears(0.01), solar_radii(1.0));
    assert!(state.luminosity.get::<erg_per_second>().is_finite());
    assert!(state.xray_flux.get::<watt_per_square_meter>().is_finite());
    assert!(state.temperature.get::<kelvin>().is_finite());
}

#[test]
fn narrow_young_window_integrates() {
    let input = MassLossInput::new(earth_analog())
        .unwrap()
        .with_window(AgeWindow::new(gigayears(0.01), gigayears(0.02)).unwrap());
    let report = MassLoss::default().call(&input).unwrap();
    assert!(report.lifetime.total.get::<gram>().is_finite());
    assert!(report.lifetime.total.get::<gram>() > 0.0);
}

#[test]
fn higher_efficiency_scales_photoevaporation() {
    let config = MassLossConfig {
        escape: EnergyLimitedEscape::new(Efficiency::new(0.6).unwrap()),
        ..MassLossConfig::default()
    };
    let input = MassLossInput::new(kepler_7b()).unwrap();
    let base = MassLoss::default().call(&input).unwrap();
    let doubled = MassLoss::new(config).call(&input).unwrap();

    assert_relative_eq!(
        doubled.lifetime.photoevaporation.get::<gram>(),
        2.0 * base.lifetime.photoevaporation.get::<gram>(),
        max_relative = 1e-9
    );
    assert_eq!(doubled.lifetime.wind, base.lifetime.wind);
}

#[test]
fn wind_model_matches_pipeline_snapshot() {
    let system = earth_analog();
    let report = run(system);
    let wind = WindSpeed::default()
        .call(&WindSpeedInput::for_star(
            &XrayActivity::default(),
            &system.star,
            system.planet.semi_major_axis(),
        ))
        .unwrap();
    assert_eq!(wind.velocity, report.current.wind_velocity);
    assert!(wind.solution.trend_satisfied());
}
