//! # Number types
//!
//! The inequality systems are defined over the reals. This module defines what a real is for the
//! rest of the crate, so that the same code works with both `f64` and `f32`.
pub mod traits;
