//! # Building blocks to describe inequality systems.
use std::fmt;
use std::io::Write;

use enum_map::Enum;

use crate::data::linear_program::error::Dimension;
use crate::data::linear_program::special::SpecialSystem;
use crate::data::linear_program::system::{LinearSystem, OrdinarySystem};
use crate::data::number_types::traits::Real;

/// Which implementation of the system operations is used.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Variant {
    /// Performs the operations without any further output.
    Ordinary,
    /// Announces the start and end of rendering and checking, and its own release.
    Special,
}

impl Variant {
    /// Number by which the variant is chosen in the console menu.
    #[must_use]
    pub fn menu_number(self) -> i64 {
        match self {
            Variant::Ordinary => 1,
            Variant::Special => 2,
        }
    }

    /// Create an empty system of this variant.
    ///
    /// # Arguments
    ///
    /// * `inequality_count`: Number of rows.
    /// * `variable_count`: Number of columns.
    /// * `announcements`: Where the special variant writes its announcements. Ignored by the
    ///   ordinary variant.
    ///
    /// # Errors
    ///
    /// If one of the dimensions is zero.
    pub fn build<'a, F: Real, W: Write + 'a>(
        self,
        inequality_count: usize,
        variable_count: usize,
        announcements: W,
    ) -> Result<Box<dyn LinearSystem<F> + 'a>, Dimension> {
        let system = OrdinarySystem::new(inequality_count, variable_count)?;

        let system: Box<dyn LinearSystem<F> + 'a> = match self {
            Variant::Ordinary => Box::new(system),
            Variant::Special => Box::new(SpecialSystem::new(system, announcements)),
        };

        Ok(system)
    }
}

impl TryFrom<i64> for Variant {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Variant::Ordinary),
            2 => Ok(Variant::Special),
            other => Err(other),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Ordinary => "ordinary",
            Variant::Special => "special",
        })
    }
}

/// Operations of a system that the special variant announces.
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    Render,
    Check,
}

/// Moment of an announcement relative to the operation.
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Stage {
    Before,
    After,
}
