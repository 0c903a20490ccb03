//! # Ordinary systems of linear inequalities
//!
//! Every row reads `a_i1 * x1 + ... + a_in * xn <= b_i`. The shape is fixed when the system is
//! created, only the values can be filled in afterwards.
use std::fmt;
use std::fmt::Display;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::data::linear_program::error::Dimension;
use crate::data::number_types::traits::Real;
use crate::io::console::ReadReal;
use crate::io::error::Input;

/// Operations shared by all variants of inequality systems.
///
/// Object safe, such that the variant can be chosen at runtime.
pub trait LinearSystem<F> {
    /// Number of inequalities, always positive.
    fn inequality_count(&self) -> usize;

    /// Number of variables, always positive.
    fn variable_count(&self) -> usize;

    /// Read all coefficients and constants.
    ///
    /// Row by row: first the coefficient of every variable, then the constant of that row.
    ///
    /// # Errors
    ///
    /// If the reader can't provide any more values. The values read before that are kept.
    fn input_coefficients(&mut self, reader: &mut dyn ReadReal<F>) -> Result<(), Input>;

    /// One line per inequality, in the form `c1*x1 - c2*x2 ≤ b`.
    fn render(&self) -> String;

    /// Whether the vector satisfies every inequality.
    ///
    /// An inequality is satisfied when its row sum is at most the constant, equality included.
    ///
    /// # Errors
    ///
    /// If the length of the vector differs from the number of variables.
    fn check_vector(&self, variables: &[F]) -> Result<bool, Dimension>;
}

/// A system of linear inequalities without any side effects beyond reading its values.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinarySystem<F> {
    /// Row major, `inequality_count` rows of `variable_count` values each.
    coefficients: Vec<Vec<F>>,
    /// Right-hand sides, one for each row.
    constants: Vec<F>,
    /// Kept separately so it's known even before any row is inspected.
    variable_count: usize,
}

impl<F: Real> OrdinarySystem<F> {
    /// Create a system with all coefficients and constants zero.
    ///
    /// # Errors
    ///
    /// If either dimension is zero.
    pub fn new(inequality_count: usize, variable_count: usize) -> Result<Self, Dimension> {
        if inequality_count == 0 {
            return Err(Dimension::NoInequalities);
        }
        if variable_count == 0 {
            return Err(Dimension::NoVariables);
        }

        debug!(inequality_count, variable_count, "created inequality system");
        Ok(Self {
            coefficients: vec![vec![F::zero(); variable_count]; inequality_count],
            constants: vec![F::zero(); inequality_count],
            variable_count,
        })
    }

    /// Create a system from known values.
    ///
    /// # Arguments
    ///
    /// * `coefficients`: Row major coefficient grid, all rows of equal, positive length.
    /// * `constants`: One constant per row.
    ///
    /// # Errors
    ///
    /// If the grid is empty or ragged, or the number of constants doesn't match.
    pub fn from_parts(coefficients: Vec<Vec<F>>, constants: Vec<F>) -> Result<Self, Dimension> {
        let variable_count = coefficients.first().ok_or(Dimension::NoInequalities)?.len();
        if variable_count == 0 {
            return Err(Dimension::NoVariables);
        }
        if let Some((index, row)) = coefficients.iter()
            .find_position(|row| row.len() != variable_count) {
            return Err(Dimension::Row { index, expected: variable_count, found: row.len() });
        }
        if constants.len() != coefficients.len() {
            return Err(Dimension::Constants {
                expected: coefficients.len(),
                found: constants.len(),
            });
        }

        debug!(inequality_count = coefficients.len(), variable_count, "created inequality system");
        Ok(Self { coefficients, constants, variable_count })
    }

    /// Coefficient grid, row major.
    #[must_use]
    pub fn coefficients(&self) -> &[Vec<F>] {
        &self.coefficients
    }

    /// Right-hand side constants.
    #[must_use]
    pub fn constants(&self) -> &[F] {
        &self.constants
    }

    fn inequalities(&self) -> impl Iterator<Item = Inequality<'_, F>> {
        self.coefficients.iter()
            .zip_eq(&self.constants)
            .map(|(coefficients, constant)| Inequality { coefficients, constant })
    }
}

impl<F: Real> LinearSystem<F> for OrdinarySystem<F> {
    fn inequality_count(&self) -> usize {
        self.constants.len()
    }

    fn variable_count(&self) -> usize {
        self.variable_count
    }

    fn input_coefficients(&mut self, reader: &mut dyn ReadReal<F>) -> Result<(), Input> {
        let rows = self.coefficients.iter_mut().zip_eq(self.constants.iter_mut());
        for (i, (row, constant)) in rows.enumerate() {
            for (j, coefficient) in row.iter_mut().enumerate() {
                *coefficient = reader.read_real(&format!("a[{}][{}] = ", i + 1, j + 1))?;
            }
            *constant = reader.read_real(&format!("b[{}] = ", i + 1))?;
            trace!(row = i, "read inequality");
        }

        Ok(())
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn check_vector(&self, variables: &[F]) -> Result<bool, Dimension> {
        if variables.len() != self.variable_count {
            return Err(Dimension::Vector { expected: self.variable_count, found: variables.len() });
        }

        let satisfied = self.inequalities().all(|inequality| inequality.is_satisfied_by(variables));
        debug!(satisfied, "checked vector");

        Ok(satisfied)
    }
}

impl<F: Real> Display for OrdinarySystem<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inequalities().format("\n"))
    }
}

impl<F> Drop for OrdinarySystem<F> {
    fn drop(&mut self) {
        debug!(inequality_count = self.constants.len(), "released inequality system");
    }
}

/// A single row of a system.
struct Inequality<'a, F> {
    coefficients: &'a [F],
    constant: &'a F,
}

impl<F: Real> Inequality<'_, F> {
    /// The row sum may not exceed the constant; equality is fine.
    ///
    /// Overflowing sums are never satisfied (`inf` and `NaN` compare false).
    fn is_satisfied_by(&self, variables: &[F]) -> bool {
        let total = self.coefficients.iter()
            .zip_eq(variables)
            .fold(F::zero(), |total, (&coefficient, &value)| total + coefficient * value);

        total <= *self.constant
    }
}

impl<F: Real> Display for Inequality<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (j, &coefficient) in self.coefficients.iter().enumerate() {
            let negative = coefficient < F::zero();
            match (j, negative) {
                (0, false) => {},
                (0, true) => f.write_str("-")?,
                (_, false) => f.write_str(" + ")?,
                (_, true) => f.write_str(" - ")?,
            }
            write!(f, "{}*x{}", coefficient.abs(), j + 1)?;
        }

        // -0 + 0 is 0
        write!(f, " ≤ {}", *self.constant + F::zero())
    }
}

#[cfg(test)]
mod test {
    use std::collections::VecDeque;

    use crate::data::linear_program::error::Dimension;
    use crate::data::linear_program::system::{LinearSystem, OrdinarySystem};
    use crate::io::console::ReadReal;
    use crate::io::error::Input;

    /// Hands out prepared values and remembers the prompts.
    struct Scripted {
        values: VecDeque<f64>,
        prompts: Vec<String>,
    }

    impl Scripted {
        fn new(values: &[f64]) -> Self {
            Self { values: values.iter().copied().collect(), prompts: Vec::new() }
        }
    }

    impl ReadReal<f64> for Scripted {
        fn read_real(&mut self, prompt: &str) -> Result<f64, Input> {
            self.prompts.push(prompt.to_string());
            self.values.pop_front().ok_or(Input::EndOfInput)
        }
    }

    fn example() -> OrdinarySystem<f64> {
        OrdinarySystem::from_parts(
            vec![vec![1_f64, 1_f64], vec![2_f64, -1_f64]],
            vec![10_f64, 4_f64],
        ).unwrap()
    }

    #[test]
    fn new() {
        let system = OrdinarySystem::<f64>::new(3, 2).unwrap();
        assert_eq!(system.inequality_count(), 3);
        assert_eq!(system.variable_count(), 2);
        assert!(system.coefficients().iter().flatten().all(|&value| value == 0_f64));
        assert_eq!(system.constants(), &[0_f64; 3]);

        assert_eq!(OrdinarySystem::<f64>::new(0, 2), Err(Dimension::NoInequalities));
        assert_eq!(OrdinarySystem::<f64>::new(2, 0), Err(Dimension::NoVariables));
    }

    #[test]
    fn from_parts() {
        assert_eq!(
            OrdinarySystem::<f64>::from_parts(vec![], vec![]),
            Err(Dimension::NoInequalities),
        );
        assert_eq!(
            OrdinarySystem::<f64>::from_parts(vec![vec![]], vec![1_f64]),
            Err(Dimension::NoVariables),
        );
        assert_eq!(
            OrdinarySystem::from_parts(vec![vec![1_f64, 2_f64], vec![3_f64]], vec![1_f64, 2_f64]),
            Err(Dimension::Row { index: 1, expected: 2, found: 1 }),
        );
        assert_eq!(
            OrdinarySystem::from_parts(vec![vec![1_f64]], vec![1_f64, 2_f64]),
            Err(Dimension::Constants { expected: 1, found: 2 }),
        );
    }

    #[test]
    fn input_coefficients() {
        let mut system = OrdinarySystem::new(2, 2).unwrap();
        let mut reader = Scripted::new(&[1_f64, 1_f64, 10_f64, 2_f64, -1_f64, 4_f64]);
        system.input_coefficients(&mut reader).unwrap();

        assert_eq!(system, example());
        assert_eq!(
            reader.prompts,
            ["a[1][1] = ", "a[1][2] = ", "b[1] = ", "a[2][1] = ", "a[2][2] = ", "b[2] = "],
        );
    }

    #[test]
    fn input_coefficients_exhausted() {
        let mut system = OrdinarySystem::new(2, 2).unwrap();
        let mut reader = Scripted::new(&[5_f64, 6_f64]);
        assert!(matches!(system.input_coefficients(&mut reader), Err(Input::EndOfInput)));
        assert_eq!(system.coefficients()[0], vec![5_f64, 6_f64]);
    }

    #[test]
    fn render() {
        assert_eq!(example().render(), "1*x1 + 1*x2 ≤ 10\n2*x1 - 1*x2 ≤ 4");

        let system = OrdinarySystem::from_parts(
            vec![vec![-1.5, 0_f64, -0.25]],
            vec![-3_f64],
        ).unwrap();
        assert_eq!(system.render(), "-1.5*x1 + 0*x2 - 0.25*x3 ≤ -3");
        assert_eq!(system.render(), system.to_string());
    }

    #[test]
    fn render_negative_zero() {
        let system = OrdinarySystem::from_parts(vec![vec![-0_f64, -0_f64]], vec![0_f64]).unwrap();
        assert_eq!(system.render(), "0*x1 + 0*x2 ≤ 0");

        let system = OrdinarySystem::from_parts(vec![vec![1_f64]], vec![-0_f64]).unwrap();
        assert_eq!(system.render(), "1*x1 ≤ 0");
    }

    #[test]
    fn check_vector() {
        let system = example();
        assert_eq!(system.check_vector(&[3_f64, 3_f64]), Ok(true));
        assert_eq!(system.check_vector(&[8_f64, 8_f64]), Ok(false));
        // second row only
        assert_eq!(system.check_vector(&[5_f64, 5_f64]), Ok(false));
        // equality on the first row
        assert_eq!(system.check_vector(&[4_f64, 6_f64]), Ok(true));
        // equality on the second row
        assert_eq!(system.check_vector(&[3_f64, 2_f64]), Ok(true));
    }

    #[test]
    fn check_vector_boundary() {
        let system = OrdinarySystem::from_parts(vec![vec![1_f64, 1_f64]], vec![2_f64]).unwrap();
        assert_eq!(system.check_vector(&[1_f64, 1_f64]), Ok(true));
        assert_eq!(system.check_vector(&[1_f64, 1.5]), Ok(false));
    }

    #[test]
    fn check_vector_overflow() {
        let system = OrdinarySystem::from_parts(vec![vec![f64::MAX, f64::MAX]], vec![f64::MAX])
            .unwrap();
        assert_eq!(system.check_vector(&[2_f64, 2_f64]), Ok(false));
        let system = OrdinarySystem::from_parts(vec![vec![f64::MAX, -f64::MAX]], vec![0_f64])
            .unwrap();
        assert_eq!(system.check_vector(&[2_f64, 2_f64]), Ok(false));
    }

    #[test]
    fn check_vector_length() {
        let system = example();
        assert_eq!(system.check_vector(&[1_f64]), Err(Dimension::Vector { expected: 2, found: 1 }));
        assert_eq!(
            system.check_vector(&[1_f64, 2_f64, 3_f64]),
            Err(Dimension::Vector { expected: 2, found: 3 }),
        );
        assert_eq!(system.check_vector(&[]), Err(Dimension::Vector { expected: 2, found: 0 }));
    }
}
