//! # Traits
//!
//! The contracts that these traits define may not be kept precisely: floating point numbers only
//! approximate the reals. Row sums are computed in the order of the variables.
use std::fmt::{Debug, Display};

use num_traits::Float;

/// Values of the coefficients, constants and candidate vectors.
///
/// `Display` is used for rendering, it should be independent of the locale (as it is for the
/// primitive floats).
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Real: Float + Display + Debug + 'static {
}
impl<T: Float + Display + Debug + 'static> Real for T {
}
