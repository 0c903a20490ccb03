//! # Invalid arguments to inequality systems
//!
//! All of these describe a mismatch between the dimensions of a system and the data handed to it.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// A `Dimension` error is returned when data doesn't fit the shape of a system.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Dimension {
    /// A system needs at least one inequality.
    NoInequalities,
    /// A system needs at least one variable.
    NoVariables,
    /// A coefficient row has a different length than the other rows.
    Row {
        /// Index of the offending row.
        index: usize,
        /// Number of variables of the system.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// The number of constants differs from the number of coefficient rows.
    Constants {
        /// Number of inequalities of the system.
        expected: usize,
        /// Number of constants provided.
        found: usize,
    },
    /// A candidate vector has a different length than the number of variables.
    Vector {
        /// Number of variables of the system.
        expected: usize,
        /// Length of the candidate vector.
        found: usize,
    },
}

impl Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Dimension::NoInequalities => f.write_str("The number of inequalities must be positive"),
            Dimension::NoVariables => f.write_str("The number of variables must be positive"),
            Dimension::Row { index, expected, found } => write!(
                f, "Coefficient row {} has {} entries, but there are {} variables",
                index, found, expected,
            ),
            Dimension::Constants { expected, found } => write!(
                f, "There are {} constants for {} inequalities", found, expected,
            ),
            Dimension::Vector { expected, found } => write!(
                f, "The vector has {} values, but the system has {} variables", found, expected,
            ),
        }
    }
}

impl Error for Dimension {
}
