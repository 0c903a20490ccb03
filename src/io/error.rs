//! # Error reporting for reading values from the console
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::io;

/// An `Input` error is created when no value could be read at all.
///
/// It is the highest error in the io error hierarchy. Values that were read but couldn't be parsed
/// are not represented here: the console recovers from those by asking again.
#[derive(Debug)]
pub enum Input {
    /// The line source couldn't be read, or the prompt couldn't be written.
    IO(io::Error),
    /// The line source was exhausted before a valid value was read.
    EndOfInput,
}

impl Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Input::IO(error) => write!(f, "Console failure: {}", error),
            Input::EndOfInput => f.write_str("Input ended before a valid value was read"),
        }
    }
}

impl Error for Input {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Input::IO(error) => Some(error),
            Input::EndOfInput => None,
        }
    }
}

impl From<io::Error> for Input {
    fn from(error: io::Error) -> Self {
        Input::IO(error)
    }
}

/// A `Parse` error represents a single line of text that isn't an acceptable value.
///
/// It may hold the lower level error (typically from the standard library's number parsing) that
/// caused it.
#[derive(Debug)]
pub struct Parse {
    description: String,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// Result of parsing a single value.
pub type ParseResult<T> = Result<T, Parse>;

impl Parse {
    /// Create a new `Parse` error with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), source: None, }
    }

    /// Wrap a new `Parse` error around an error from elsewhere.
    ///
    /// # Arguments
    ///
    /// * `source`: What caused this error.
    /// * `description`: What's wrong at the moment of creation.
    pub fn wrap_other(
        source: impl Error + Send + Sync + 'static,
        description: impl Into<String>,
    ) -> Self {
        Self { description: description.into(), source: Some(Box::new(source)), }
    }

    /// Human readable description, without the cause.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{} ({})", self.description, source),
            None => f.write_str(&self.description),
        }
    }
}

impl Error for Parse {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|error| error as &(dyn Error + 'static))
    }
}
