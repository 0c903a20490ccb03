//! # A single interactive check
//!
//! Choose a variant, fill in a system, show it, read a candidate vector and report whether the
//! vector satisfies the system. The system is released before the closing message.
use std::error;
use std::fmt;
use std::fmt::Display;
use std::io;
use std::io::{BufRead, Write};

use tracing::info;

use crate::data::linear_program::elements::Variant;
use crate::data::linear_program::error::Dimension;
use crate::data::number_types::traits::Real;
use crate::io::console::Console;
use crate::io::error::Input;
use crate::io::number::Parse;

const CHOICE_PROMPT: &str = "Choose the kind of system (1 = ordinary, 2 = special): ";
const SATISFIED: &str = "The vector satisfies all inequalities.";
const NOT_SATISFIED: &str = "The vector does not satisfy all inequalities.";
const CLOSING: &str = "Done.";

/// Settings of a session that are known before it starts.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Configuration {
    /// If not set, the user is asked.
    pub variant: Option<Variant>,
    /// Number of inequalities, should be positive.
    pub inequality_count: usize,
    /// Number of variables, should be positive.
    pub variable_count: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self { variant: None, inequality_count: 2, variable_count: 2 }
    }
}

/// Why a session couldn't complete.
#[derive(Debug)]
pub enum Error {
    /// The console failed, or ran out of input.
    Input(Input),
    /// The configured dimensions are invalid.
    Dimension(Dimension),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Input(error) => error.fmt(f),
            Error::Dimension(error) => error.fmt(f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Input(error) => Some(error),
            Error::Dimension(error) => Some(error),
        }
    }
}

impl From<Input> for Error {
    fn from(error: Input) -> Self {
        Error::Input(error)
    }
}

impl From<Dimension> for Error {
    fn from(error: Dimension) -> Self {
        Error::Dimension(error)
    }
}

/// Run one session on a console.
///
/// # Arguments
///
/// * `console`: Prompts and results are written here, values are read from here.
/// * `announcements`: Where a special system writes its announcements.
/// * `configuration`: Dimensions and optionally the variant.
///
/// # Return value
///
/// Whether the candidate vector satisfies the system.
///
/// # Errors
///
/// If the console runs out of input or fails, or if the configured dimensions are zero.
pub fn run<F, R, W, A>(
    console: &mut Console<R, W>,
    announcements: A,
    configuration: &Configuration,
) -> Result<bool, Error>
where
    F: Real + Parse,
    R: BufRead,
    W: Write,
    A: Write,
{
    let variant = match configuration.variant {
        Some(variant) => variant,
        None => choose_variant(console)?,
    };
    let Configuration { inequality_count, variable_count, .. } = *configuration;
    info!(%variant, inequality_count, variable_count, "starting session");

    let satisfied = {
        let mut system = variant.build::<F, _>(inequality_count, variable_count, announcements)?;

        console.write_line(format_args!(
            "Enter the coefficients and constants of {} inequalities in {} variables.",
            inequality_count, variable_count,
        ))?;
        system.input_coefficients(console)?;

        console.write_line("The system:")?;
        console.write_line(system.render())?;

        console.write_line(format_args!("Enter a vector of {} values.", variable_count))?;
        let vector = read_vector::<F, _, _>(console, system.variable_count())?;

        let satisfied = system.check_vector(&vector)?;
        console.write_line(if satisfied { SATISFIED } else { NOT_SATISFIED })?;

        satisfied
    };
    info!(satisfied, "session complete");

    console.write_line(CLOSING)?;
    Ok(satisfied)
}

fn choose_variant<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Variant, Input> {
    let choice = console.read_integer_in_range(
        CHOICE_PROMPT,
        Variant::Ordinary.menu_number(),
        Variant::Special.menu_number(),
    )?;

    // The range above only contains menu numbers.
    Variant::try_from(choice).map_err(|choice| {
        Input::IO(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} is not a menu number", choice),
        ))
    })
}

fn read_vector<F: Parse, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    length: usize,
) -> Result<Vec<F>, Input> {
    (1..=length)
        .map(|j| console.read_real::<F>(&format!("x{} = ", j)))
        .collect()
}
