//! # Storing of inequality systems in memory
//!
//! This module provides the data structures used to represent systems of linear inequalities in
//! memory, and the number types they are defined over.

pub mod linear_program;
pub mod number_types;
