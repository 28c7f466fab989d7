//! # Exoplanet Loss
//!
//! Estimates how much atmospheric mass an exoplanet loses over its lifetime
//! to stellar X-ray photoevaporation and to direct stellar-wind stripping.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations for the full mass-loss
//!   pipeline and for continuation-tracked stellar wind speeds.
//! - [`support`]: Physical building blocks used by the models (X-ray activity,
//!   wind density, Parker wind solver, escape rates, catalogs, constraints).
//!
//! ## Units
//!
//! All public quantities are [`uom`] types, so callers may use whatever units
//! they like at the boundary. Internally every formula is evaluated in CGS.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful
//! on their own (for example, to chart a wind velocity profile), but their APIs
//! are not stable. Model-specific code lives in a model's private `core` module
//! and is not re-exported.

pub mod models;
pub mod support;
