//! Supporting building blocks used by the models.
//!
//! These modules are public because they are useful on their own, but their
//! APIs are not stable.

pub mod catalog;
pub mod constraint;
pub mod escape;
pub mod interp;
pub mod parker;
pub mod stellar;
pub mod system;
pub mod units;
