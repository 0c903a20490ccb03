//! # Checking vectors against systems of linear inequalities
//!
//! A small system `Ax <= b` is read from a console, shown, and a candidate vector `x` is checked
//! against every inequality. Systems come in two variants with the same behavior: an ordinary one
//! and a special one that announces what it is doing.
#![warn(missing_docs)]

pub mod data;
pub mod io;
pub mod session;

#[cfg(test)]
mod tests;
