mod config;
mod error;
mod logging;
mod output;

use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Args, Parser, Subcommand};
use exoplanet_loss::{
    models::mass_loss::{AgeWindow, DisplayStep, MassLoss, MassLossError, MassLossInput},
    support::{
        catalog::{StaticCatalog, SystemCatalog},
        stellar::{WindDensity, XrayActivity},
        system::{PlanetaryParameters, StellarParameters, SystemParameters},
        units::{earth_masses, earth_radii, gigayears, solar_masses, solar_radii},
    },
};
use twine_core::Model;
use uom::si::{
    f64::{Length, ThermodynamicTemperature, Velocity},
    length::astronomical_unit,
    thermodynamic_temperature::kelvin,
    velocity::kilometer_per_second,
};

use crate::{
    config::Config,
    error::{CliError, Result},
    output::{DensityPointRecord, EstimateRecord, WindProfileRecord},
};

#[derive(Parser)]
#[command(name = "exoloss")]
#[command(about = "Exoplanet atmospheric mass loss from X-ray photoevaporation and stellar wind", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML file overriding solver and model defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate instantaneous and lifetime mass loss for one planet
    Estimate(EstimateArgs),

    /// Parker wind speed against distance from the star
    WindProfile(WindProfileArgs),

    /// Wind number density against distance from the star
    DensityProfile(DensityProfileArgs),

    /// List the built-in star/planet systems
    Systems,
}

#[derive(Args)]
struct EstimateArgs {
    /// Built-in system as STAR/PLANET (e.g. Kepler-7/b)
    #[arg(long, conflicts_with_all = [
        "star_radius", "star_mass", "star_age",
        "planet_radius", "planet_mass", "semi_major_axis",
    ])]
    system: Option<String>,

    /// Stellar radius in solar radii
    #[arg(long)]
    star_radius: Option<f64>,

    /// Stellar mass in solar masses
    #[arg(long)]
    star_mass: Option<f64>,

    /// Stellar age in Gyr
    #[arg(long)]
    star_age: Option<f64>,

    /// Planet radius in Earth radii
    #[arg(long)]
    planet_radius: Option<f64>,

    /// Planet mass in Earth masses
    #[arg(long)]
    planet_mass: Option<f64>,

    /// Semi-major axis in AU
    #[arg(long)]
    semi_major_axis: Option<f64>,

    /// Orbital eccentricity
    #[arg(long, default_value_t = 0.0)]
    eccentricity: f64,

    /// Start of the integration window in Gyr
    #[arg(long)]
    min_age: Option<f64>,

    /// End of the integration window in Gyr (defaults to the star's age)
    #[arg(long)]
    max_age: Option<f64>,

    /// Spacing of the printed age series in Gyr
    #[arg(long)]
    age_step: Option<f64>,

    /// Photoevaporation efficiency, between 0.25 and 1
    #[arg(long)]
    efficiency: Option<f64>,

    /// Initial guess for the wind solver in km/s
    #[arg(long)]
    initial_velocity: Option<f64>,

    /// Apply the Roche-lobe correction to photoevaporation
    #[arg(long)]
    roche_lobe: bool,

    /// Print JSON instead of a text report
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct WindProfileArgs {
    /// Coronal temperature in K
    #[arg(long, conflicts_with_all = ["star_age", "star_radius"])]
    temperature: Option<f64>,

    /// Stellar age in Gyr, to derive the coronal temperature
    #[arg(long, requires = "star_radius")]
    star_age: Option<f64>,

    /// Stellar radius in solar radii, to derive the coronal temperature
    #[arg(long, requires = "star_age")]
    star_radius: Option<f64>,

    /// Stellar mass in solar masses
    #[arg(long, default_value_t = 1.0)]
    star_mass: f64,

    /// Inner distance in AU
    #[arg(long, default_value_t = 0.01)]
    start: f64,

    /// Outer distance in AU
    #[arg(long, default_value_t = 1.5)]
    end: f64,

    /// Number of distances
    #[arg(long, default_value_t = 100)]
    points: usize,

    /// Initial guess for the wind solver in km/s
    #[arg(long)]
    initial_velocity: Option<f64>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct DensityProfileArgs {
    /// Inner distance in AU
    #[arg(long, default_value_t = 0.01)]
    start: f64,

    /// Outer distance in AU
    #[arg(long, default_value_t = 1.5)]
    end: f64,

    /// Number of distances
    #[arg(long, default_value_t = 50)]
    points: usize,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Estimate(args) => cmd_estimate(&config, &args),
        Commands::WindProfile(args) => cmd_wind_profile(&config, &args),
        Commands::DensityProfile(args) => cmd_density_profile(&args),
        Commands::Systems => cmd_systems(),
    }
}

fn cmd_estimate(config: &Config, args: &EstimateArgs) -> Result<()> {
    let system = resolve_system(args)?;

    let mut config = config.clone();
    if let Some(efficiency) = args.efficiency {
        config.escape.efficiency = efficiency;
    }
    if let Some(velocity) = args.initial_velocity {
        config.wind.initial_velocity_km_s = velocity;
    }
    config.escape.roche_lobe_correction |= args.roche_lobe;

    let min_age = args.min_age.unwrap_or(config.integration.min_age_gyr);
    let window = match args.max_age {
        Some(max_age) => AgeWindow::new(gigayears(min_age), gigayears(max_age))?,
        None => AgeWindow::new(gigayears(min_age), system.star.age())?,
    };
    let step = DisplayStep::new(gigayears(
        args.age_step.unwrap_or(config.integration.age_step_gyr),
    ))?;
    let input = MassLossInput {
        system,
        window,
        display_step: step,
    };

    let model = MassLoss::new(config.mass_loss()?);
    let report = model.call(&input)?;
    let record = EstimateRecord::new(&system, &report);

    let mut out = io::stdout().lock();
    if args.json {
        output::write_json(&mut out, &record)
    } else {
        output::write_estimate(&mut out, &record).map_err(CliError::from)
    }
}

/// Builds the system from `--system` or the individual parameter flags.
fn resolve_system(args: &EstimateArgs) -> Result<SystemParameters> {
    if let Some(name) = &args.system {
        let (star, planet) = name.split_once('/').ok_or_else(|| {
            CliError::Usage(format!("expected --system STAR/PLANET, got {name:?}"))
        })?;
        let system = StaticCatalog::with_known_systems()
            .lookup(star, planet)
            .map_err(MassLossError::from)?;
        return Ok(system);
    }

    let required = |value: Option<f64>, flag: &str| {
        value.ok_or_else(|| CliError::Usage(format!("missing {flag} (or pass --system)")))
    };
    let star = StellarParameters::new(
        solar_radii(required(args.star_radius, "--star-radius")?),
        solar_masses(required(args.star_mass, "--star-mass")?),
        gigayears(required(args.star_age, "--star-age")?),
    )?;
    let planet = PlanetaryParameters::new(
        earth_radii(required(args.planet_radius, "--planet-radius")?),
        earth_masses(required(args.planet_mass, "--planet-mass")?),
        Length::new::<astronomical_unit>(required(args.semi_major_axis, "--semi-major-axis")?),
        args.eccentricity,
    )?;
    Ok(SystemParameters { star, planet })
}

fn cmd_wind_profile(config: &Config, args: &WindProfileArgs) -> Result<()> {
    let temperature = match (args.temperature, args.star_age, args.star_radius) {
        (Some(t), _, _) => ThermodynamicTemperature::new::<kelvin>(t),
        (None, Some(age), Some(radius)) => {
            let star = StellarParameters::new(
                solar_radii(radius),
                solar_masses(args.star_mass),
                gigayears(age),
            )?;
            XrayActivity::default()
                .coronal_state(star.age(), star.radius())
                .temperature
        }
        _ => {
            return Err(CliError::Usage(
                "pass --temperature, or --star-age with --star-radius".into(),
            ));
        }
    };

    let mut solver = config.wind_solver();
    if let Some(velocity) = args.initial_velocity {
        solver.config.initial_guess = Velocity::new::<kilometer_per_second>(velocity);
    }
    let solution = solver.profile(
        temperature,
        solar_masses(args.star_mass),
        Length::new::<astronomical_unit>(args.start),
        Length::new::<astronomical_unit>(args.end),
        args.points,
    )?;
    let record = WindProfileRecord::new(temperature.get::<kelvin>(), &solution);

    let mut out = io::stdout().lock();
    if args.json {
        output::write_json(&mut out, &record)
    } else {
        output::write_wind_profile(&mut out, &record).map_err(CliError::from)
    }
}

fn cmd_density_profile(args: &DensityProfileArgs) -> Result<()> {
    if !(args.start > 0.0 && args.start < args.end) || args.points < 2 {
        return Err(CliError::Usage(
            "density profile needs 0 < --start < --end and at least two --points".into(),
        ));
    }
    let points: Vec<DensityPointRecord> = WindDensity::default()
        .number_density_profile(
            Length::new::<astronomical_unit>(args.start),
            Length::new::<astronomical_unit>(args.end),
            args.points,
        )
        .iter()
        .map(DensityPointRecord::from)
        .collect();

    let mut out = io::stdout().lock();
    if args.json {
        output::write_json(&mut out, &points)
    } else {
        output::write_density_profile(&mut out, &points).map_err(CliError::from)
    }
}

fn cmd_systems() -> Result<()> {
    let mut out = io::stdout().lock();
    for (star, planet) in StaticCatalog::with_known_systems().names() {
        writeln!(out, "{star}/{planet}")?;
    }
    Ok(())
}
