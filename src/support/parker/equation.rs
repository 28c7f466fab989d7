use uom::si::{
    f64::{Length, Mass, ThermodynamicTemperature, Velocity},
    length::centimeter,
    mass::gram,
    thermodynamic_temperature::kelvin,
    velocity::centimeter_per_second,
};

use crate::support::units::PhysicalConstants;

/// Parker's wind equation for one coronal temperature and stellar mass.
///
/// Evaluation methods take and return plain CGS numbers (cm, cm/s) because
/// they sit in the Newton inner loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParkerWind {
    /// Isothermal sound speed squared, cm² s⁻².
    sound_speed_squared: f64,

    /// Sonic point radius, cm.
    critical_radius: f64,
}

impl ParkerWind {
    #[must_use]
    pub fn new(
        temperature: ThermodynamicTemperature,
        stellar_mass: Mass,
        constants: &PhysicalConstants,
    ) -> Self {
        let sound_speed_squared =
            2.0 * constants.boltzmann_constant * temperature.get::<kelvin>() / constants.proton_mass;
        let critical_radius =
            constants.gravitational_constant * stellar_mass.get::<gram>() / sound_speed_squared;
        Self {
            sound_speed_squared,
            critical_radius,
        }
    }

    #[must_use]
    pub fn sound_speed(&self) -> Velocity {
        Velocity::new::<centimeter_per_second>(self.sound_speed_squared.sqrt())
    }

    #[must_use]
    pub fn critical_radius(&self) -> Length {
        Length::new::<centimeter>(self.critical_radius)
    }

    /// Right-hand side `4 ln(r/r_c) + 3` at `r` cm.
    fn forcing(&self, r: f64) -> f64 {
        4.0 * (r / self.critical_radius).ln() + 3.0
    }

    /// Whether any wind speed satisfies the equation at `r`.
    ///
    /// The left-hand side is at least one (at `v = c_s`), so roots exist only
    /// from `r_c e^(−1/2)` outward.
    #[must_use]
    pub fn has_solution_at(&self, r: Length) -> bool {
        self.forcing(r.get::<centimeter>()) >= 1.0
    }

    /// `f(v)` for a speed of `v` cm/s at `r` cm. Zero on the solution.
    #[must_use]
    pub fn residual(&self, v: f64, r: f64) -> f64 {
        let x = v * v / self.sound_speed_squared;
        x - x.ln() - self.forcing(r)
    }

    /// `∂f/∂v` at a speed of `v` cm/s.
    #[must_use]
    pub fn derivative(&self, v: f64) -> f64 {
        2.0 * v / self.sound_speed_squared - 2.0 / v
    }
}
