use approx::assert_relative_eq;

use numer_core::ErrorKind;

use crate::linear::{ConfigError, Error, System};

use super::{EliminationConfig, Pivoting, RowOperation, gauss, gauss_jordan};

fn textbook() -> System {
    System::from_rows(&[[2.0, 1.0], [1.0, 3.0]], &[3.0, 5.0]).expect("valid system")
}

fn three_by_three() -> System {
    // Solution is x = [2, 3, −1].
    System::from_rows(
        &[[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]],
        &[8.0, -11.0, -3.0],
    )
    .expect("valid system")
}

fn assert_solution(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(a, e, epsilon = 1e-10);
    }
}

#[test]
fn gauss_solves_textbook_system() {
    let result = gauss(&textbook(), &EliminationConfig::default()).expect("non-singular");
    assert_solution(&result.solution, &[0.8, 1.4]);
}

#[test]
fn gauss_jordan_solves_textbook_system() {
    let result = gauss_jordan(&textbook(), &EliminationConfig::default()).expect("non-singular");
    assert_solution(&result.solution, &[0.8, 1.4]);
}

#[test]
fn both_methods_solve_three_by_three() {
    let system = three_by_three();
    for config in [EliminationConfig::default(), EliminationConfig::naive()] {
        let g = gauss(&system, &config).expect("non-singular");
        let gj = gauss_jordan(&system, &config).expect("non-singular");
        assert_solution(&g.solution, &[2.0, 3.0, -1.0]);
        assert_solution(&gj.solution, &[2.0, 3.0, -1.0]);
    }
}

#[test]
fn solution_reproduces_constants() {
    let system = three_by_three();
    let result = gauss(&system, &EliminationConfig::default()).expect("non-singular");

    let residual = system.residual(&result.solution).expect("matching length");
    for r in residual {
        assert_relative_eq!(r, 0.0, epsilon = 1e-10);
    }
}

#[test]
fn naive_pivot_fails_where_partial_succeeds() {
    let system = System::from_rows(&[[0.0, 1.0], [1.0, 1.0]], &[2.0, 3.0]).expect("valid system");

    let error = gauss_jordan(&system, &EliminationConfig::naive()).unwrap_err();
    assert_eq!(error, Error::SingularPivot {
        column: 0,
        pivot: 0.0
    });
    assert_eq!(error.kind(), ErrorKind::SingularSystem);

    let result = gauss_jordan(&system, &EliminationConfig::default()).expect("partial pivoting");
    assert_solution(&result.solution, &[1.0, 2.0]);
    assert_eq!(result.operations[0], RowOperation::Swap {
        first: 0,
        second: 1
    });
}

#[test]
fn partial_pivoting_rejects_singular_matrix() {
    let system = System::from_rows(&[[1.0, 2.0], [2.0, 4.0]], &[1.0, 2.0]).expect("valid system");

    let result = gauss(&system, &EliminationConfig::default());

    assert!(matches!(result, Err(Error::SingularPivot { column: 1, .. })));
}

#[test]
fn pivot_tolerance_follows_column_scale() {
    let system = System::from_rows(&[[4e-13, 1e-13], [1e-13, 4e-13]], &[5e-13, 5e-13])
        .expect("valid system");

    let result = gauss(&system, &EliminationConfig::default()).expect("well-posed at small scale");

    assert_solution(&result.solution, &[1.0, 1.0]);
}

#[test]
fn overflowing_naive_elimination_is_an_error() {
    let system =
        System::from_rows(&[[1e-300, 1e10], [1.0, 1.0]], &[1e10, 2.0]).expect("valid system");

    for result in [
        gauss(&system, &EliminationConfig::naive()),
        gauss_jordan(&system, &EliminationConfig::naive()),
    ] {
        let error = result.unwrap_err();
        assert!(matches!(error, Error::NonFiniteResult { .. }));
        assert_eq!(error.kind(), ErrorKind::NumericInstability);
    }

    let result = gauss(&system, &EliminationConfig::default()).expect("partial pivoting");
    assert_solution(&result.solution, &[1.0, 1.0]);
}

#[test]
fn gauss_jordan_trace_scales_then_eliminates() {
    let result = gauss_jordan(&textbook(), &EliminationConfig::naive()).expect("non-singular");

    let trace: Vec<String> = result.operations.iter().map(ToString::to_string).collect();
    assert_eq!(trace[0], "R1 = R1 / 2.000000");
    assert_eq!(trace[1], "R2 = R2 - (1.000000) * R1");
    assert_eq!(trace[2], "R2 = R2 / 2.500000");
    assert_eq!(trace[3], "R1 = R1 - (0.500000) * R2");
    assert_eq!(trace.len(), 4);
}

#[test]
fn gauss_trace_ends_with_back_substitution() {
    let result = gauss(&textbook(), &EliminationConfig::naive()).expect("non-singular");

    assert_eq!(result.operations.len(), 3);
    assert!(matches!(
        result.operations[1],
        RowOperation::BackSubstitute { row: 1, .. }
    ));
    assert_eq!(result.operations[2].to_string(), "x1 = 0.800000");
}

#[test]
fn reduced_matrix_is_identity_after_gauss_jordan() {
    let result = gauss_jordan(&three_by_three(), &EliminationConfig::default()).expect("solves");

    let reduced = &result.reduced;
    for i in 0..reduced.size() {
        for j in 0..reduced.size() {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_relative_eq!(reduced.row(i)[j], expected, epsilon = 1e-12);
        }
    }
}

#[test]
fn single_equation_system() {
    let system = System::from_rows(&[[4.0]], &[2.0]).expect("valid system");

    let result = gauss(&system, &EliminationConfig::default()).expect("non-singular");

    assert_solution(&result.solution, &[0.5]);
}

#[test]
fn config_rejects_negative_pivot_tolerance() {
    assert_eq!(
        EliminationConfig::new(Pivoting::Partial, -1.0),
        Err(ConfigError::PivotTolerance)
    );
    let config = EliminationConfig::new(Pivoting::Naive, 1e-8).expect("valid");
    assert_eq!(config.pivoting(), Pivoting::Naive);
}
