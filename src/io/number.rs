//! # Number parsing
//!
//! Reading numbers from single lines of console input. Reals use `.` as the decimal separator
//! regardless of the user's locale.
use std::str::FromStr;

use num_traits::Float;

use crate::io::error::Parse as ParseError;
use crate::io::error::ParseResult;

/// Parsing a number typed on a single line.
pub trait Parse: Sized {
    /// Read a value from text that has already been stripped of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// When the number could not be parsed, or is not an acceptable value of this type, an error.
    fn parse(text: &str) -> ParseResult<Self>;
}

impl Parse for f64 {
    fn parse(text: &str) -> ParseResult<Self> {
        parse_finite(text)
    }
}

impl Parse for f32 {
    fn parse(text: &str) -> ParseResult<Self> {
        parse_finite(text)
    }
}

impl Parse for i64 {
    fn parse(text: &str) -> ParseResult<Self> {
        text.parse()
            .map_err(|error| ParseError::wrap_other(
                error,
                format!("Failed to parse \"{}\" as an integer", text),
            ))
    }
}

/// Parse a real and reject infinities and NaN.
///
/// A `,` is never accepted as decimal separator, the standard library's parser already refuses it.
fn parse_finite<F>(text: &str) -> ParseResult<F>
where
    F: Float + FromStr<Err = std::num::ParseFloatError>,
{
    let value: F = text.parse()
        .map_err(|error| ParseError::wrap_other(
            error,
            format!("Failed to parse \"{}\" as a real number", text),
        ))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::new(format!("Value \"{}\" is not a finite number", text)))
    }
}

/// Parse an integer and check that it lies in the inclusive range `[minimum, maximum]`.
///
/// # Errors
///
/// If the text is not an integer, or the integer is out of range.
pub fn parse_integer_in_range(text: &str, minimum: i64, maximum: i64) -> ParseResult<i64> {
    debug_assert!(minimum <= maximum);

    let value = i64::parse(text)?;
    if (minimum..=maximum).contains(&value) {
        Ok(value)
    } else {
        Err(ParseError::new(format!(
            "Value {} is outside of the range [{}, {}]", value, minimum, maximum,
        )))
    }
}
