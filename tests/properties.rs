//! Property-based tests for inequality systems
//!
//! Coefficients and values are small integers, so that all row sums are exact in `f64` and can be
//! compared with a computation in `i64`.
use proptest::collection::vec;
use proptest::prelude::*;

use inequality_check::data::linear_program::error::Dimension;
use inequality_check::data::linear_program::special::SpecialSystem;
use inequality_check::data::linear_program::system::{LinearSystem, OrdinarySystem};

/// Coefficient grid, constants and a candidate vector of matching shapes.
fn system_and_vector() -> impl Strategy<Value = (Vec<Vec<i64>>, Vec<i64>, Vec<i64>)> {
    (1_usize..6, 1_usize..6).prop_flat_map(|(m, n)| (
        vec(vec(-10_i64..10, n), m),
        vec(-30_i64..30, m),
        vec(-10_i64..10, n),
    ))
}

fn to_system(coefficients: &[Vec<i64>], constants: &[i64]) -> OrdinarySystem<f64> {
    OrdinarySystem::from_parts(
        coefficients.iter()
            .map(|row| row.iter().map(|&value| value as f64).collect())
            .collect(),
        constants.iter().map(|&value| value as f64).collect(),
    ).unwrap()
}

fn to_vector(values: &[i64]) -> Vec<f64> {
    values.iter().map(|&value| value as f64).collect()
}

proptest! {
    #[test]
    fn render_shape((coefficients, constants, _) in system_and_vector()) {
        let system = to_system(&coefficients, &constants);
        let text = system.render();
        let lines = text.lines().collect::<Vec<_>>();

        prop_assert_eq!(lines.len(), coefficients.len());
        for line in lines {
            prop_assert_eq!(line.matches("*x").count(), coefficients[0].len());
            prop_assert_eq!(line.matches('≤').count(), 1);
        }
    }

    #[test]
    fn check_matches_row_sums((coefficients, constants, values) in system_and_vector()) {
        let system = to_system(&coefficients, &constants);
        let expected = coefficients.iter().zip(&constants).all(|(row, &constant)| {
            row.iter().zip(&values).map(|(a, x)| a * x).sum::<i64>() <= constant
        });

        prop_assert_eq!(system.check_vector(&to_vector(&values)), Ok(expected));
    }

    #[test]
    fn check_wrong_length(
        (coefficients, constants, _) in system_and_vector(),
        length in 0_usize..8,
    ) {
        let n = coefficients[0].len();
        prop_assume!(length != n);
        let system = to_system(&coefficients, &constants);

        prop_assert_eq!(
            system.check_vector(&vec![0_f64; length]),
            Err(Dimension::Vector { expected: n, found: length }),
        );
    }

    #[test]
    fn zero_vector((coefficients, constants, _) in system_and_vector()) {
        let system = to_system(&coefficients, &constants);
        let zero = vec![0_f64; coefficients[0].len()];

        prop_assert_eq!(
            system.check_vector(&zero),
            Ok(constants.iter().all(|&constant| constant >= 0)),
        );
    }

    #[test]
    fn special_behaves_the_same((coefficients, constants, values) in system_and_vector()) {
        let ordinary = to_system(&coefficients, &constants);
        let special = SpecialSystem::new(to_system(&coefficients, &constants), std::io::sink());
        let vector = to_vector(&values);

        prop_assert_eq!(special.render(), ordinary.render());
        prop_assert_eq!(special.check_vector(&vector), ordinary.check_vector(&vector));
    }
}
