//! Agreement between independent methods on shared problems.

use approx::assert_relative_eq;

use numer_core::ErrorKind;
use numer_solvers::{
    Status,
    interpolate::{self, Points},
    linear::{self, EliminationConfig, IterativeConfig, System},
    quadrature,
    root::{self, Config},
};

#[test]
fn bracketing_methods_agree() {
    let f = |x: f64| x.powi(4) - 13.0;
    let config = Config::default();

    let bisection = root::bisection::solve_unobserved(&f, [1.5, 2.0], &config).expect("solves");
    let false_position =
        root::false_position::solve_unobserved(&f, [1.5, 2.0], &config).expect("solves");

    assert!(bisection.status.is_converged());
    assert!(false_position.status.is_converged());
    assert_relative_eq!(bisection.root, false_position.root, max_relative = 1e-6);
    assert!(false_position.iters() < bisection.iters());
}

#[test]
fn open_methods_agree_with_bisection() {
    let f = |x: f64| x.powi(3) - 2.0 * x - 5.0;
    let df = |x: f64| 3.0 * x * x - 2.0;
    let g = |x: f64| (2.0 * x + 5.0).cbrt();
    let config = Config::default();

    let reference = root::bisection::solve_unobserved(&f, [2.0, 3.0], &config).expect("solves");
    let newton = root::newton::solve_unobserved(&f, &df, 2.0, &config).expect("solves");
    let secant = root::secant::solve_unobserved(&f, [2.0, 3.0], &config).expect("solves");
    let one_point = root::one_point::solve_unobserved(&g, 2.0, &config).expect("solves");

    for solution in [&newton, &secant, &one_point] {
        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.root, reference.root, max_relative = 1e-6);
    }
}

fn dominant() -> System {
    System::from_rows(
        &[[10.0, -1.0, 2.0], [-1.0, 11.0, -1.0], [2.0, -1.0, 10.0]],
        &[6.0, 25.0, -11.0],
    )
    .expect("valid system")
}

#[test]
fn iterative_methods_agree_with_gauss_jordan() {
    let system = dominant();
    let exact = linear::gauss_jordan(&system, &EliminationConfig::default()).expect("solves");
    let config = IterativeConfig::new(1e-10, 200).expect("valid config");

    let jacobi = linear::jacobi_unobserved(&system, &[0.0; 3], &config).expect("runs");
    let seidel = linear::gauss_seidel_unobserved(&system, &[0.0; 3], &config).expect("runs");

    for solution in [&jacobi, &seidel] {
        assert_eq!(solution.status, Status::Converged);
        for (x, e) in solution.x.iter().zip(&exact.solution) {
            assert_relative_eq!(x, e, epsilon = 1e-8);
        }
    }
}

#[test]
fn direct_methods_solve_textbook_system() {
    let system = System::from_rows(&[[2.0, 1.0], [1.0, 3.0]], &[3.0, 5.0]).expect("valid");

    let cramer = linear::cramer(&system).expect("solves");
    let gauss = linear::gauss(&system, &EliminationConfig::default()).expect("solves");
    let jordan = linear::gauss_jordan(&system, &EliminationConfig::naive()).expect("solves");

    for solution in [&cramer.solution, &gauss.solution, &jordan.solution] {
        assert_relative_eq!(solution[0], 0.8, epsilon = 1e-12);
        assert_relative_eq!(solution[1], 1.4, epsilon = 1e-12);
    }
}

#[test]
fn direct_solutions_reproduce_constants() {
    let system = dominant();

    for solution in [
        linear::cramer(&system).expect("solves").solution,
        linear::gauss(&system, &EliminationConfig::default())
            .expect("solves")
            .solution,
    ] {
        for r in system.residual(&solution).expect("matching length") {
            assert_relative_eq!(r, 0.0, epsilon = 1e-10);
        }
    }
}

#[test]
fn single_equation_system() {
    let system = System::from_rows(&[[5.0]], &[10.0]).expect("valid");

    let cramer = linear::cramer(&system).expect("solves");
    let jordan = linear::gauss_jordan(&system, &EliminationConfig::default()).expect("solves");

    assert_relative_eq!(cramer.solution[0], 2.0);
    assert_relative_eq!(jordan.solution[0], 2.0);
}

#[test]
fn newton_and_lagrange_agree_inside_hull() {
    let points = Points::try_from(vec![
        (0.0, 1.0),
        (0.7, 2.3),
        (1.5, 0.4),
        (2.2, -1.1),
        (3.0, 0.9),
    ])
    .expect("valid points");

    for x in [0.1, 0.9, 1.7, 2.5, 2.95] {
        let newton = interpolate::newton_divided_difference(&points, x).expect("finite");
        let lagrange = interpolate::lagrange(&points, x).expect("finite");
        assert_relative_eq!(newton.value, lagrange.value, epsilon = 1e-10);
    }
}

#[test]
fn single_point_interpolation_is_a_domain_error() {
    let error = Points::try_from(vec![(1.0, 1.0)]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Domain);
}

#[test]
fn simpson_is_closer_than_trapezoid() {
    let f = |x: f64| x * x;
    let exact = 8.0 / 3.0;

    let trapezoid = quadrature::trapezoid(&f, [0.0, 2.0], 10).expect("valid");
    let simpson = quadrature::simpson(&f, [0.0, 2.0], 10).expect("valid");

    assert!((simpson.value - exact).abs() < (trapezoid.value - exact).abs());
}

#[test]
fn zero_width_quadrature_is_zero() {
    let f = |x: f64| x.sin();

    assert_relative_eq!(quadrature::trapezoid(&f, [2.0, 2.0], 6).expect("valid").value, 0.0);
    assert_relative_eq!(quadrature::simpson(&f, [2.0, 2.0], 6).expect("valid").value, 0.0);
}
