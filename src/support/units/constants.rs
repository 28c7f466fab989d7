/// Physical constants used by the mass-loss formulas, in CGS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Gravitational constant, cm³ g⁻¹ s⁻².
    pub gravitational_constant: f64,

    /// Boltzmann constant, erg K⁻¹.
    pub boltzmann_constant: f64,

    /// Proton mass, g.
    pub proton_mass: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gravitational_constant: 6.674_30e-8,
            boltzmann_constant: 1.380_649e-16,
            proton_mass: 1.672_621_9e-24,
        }
    }
}
