//! # Scenario tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `const INPUT`: everything typed on the console, one value per line
//! * `fn system()`: the system described by the input
