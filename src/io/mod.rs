//! # Reading values from a console
//!
//! This module provides line oriented reading of numbers, and the errors that can occur while
//! doing so.
pub mod console;
pub mod error;
pub mod number;
