//! Parker's isothermal stellar wind.
//!
//! The wind speed `v` at distance `r` from a star of mass `M` with coronal
//! temperature `T` satisfies
//!
//! ```text
//! v²/c_s² − ln(v²/c_s²) = 4 ln(r/r_c) + 3
//! c_s² = 2 k_B T / m_p,    r_c = G M / c_s²
//! ```
//!
//! For most `r` the equation has two roots, one subsonic and one supersonic,
//! and inside `r_c e^(−1/2)` it has none. Solving each distance independently
//! tends to hop between the roots, so [`WindVelocitySolver`] sweeps outward
//! and seeds each Newton solve with the previous solution. If the near-star
//! part of the sweep does not accelerate, the whole sweep is repeated with a
//! larger initial guess.
//!
//! All arithmetic is done in CGS; quantities cross the public API as `uom`
//! types.

mod equation;
mod newton;
mod solution;
mod solver;

pub use equation::ParkerWind;
pub use newton::{NewtonConfig, NewtonError};
pub use solution::{VelocitySample, WindSample, WindSolution};
pub use solver::{WindError, WindSolverConfig, WindVelocitySolver};
