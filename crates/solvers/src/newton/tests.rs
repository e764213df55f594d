use approx::assert_relative_eq;
use nalgebra::{DMatrix, DVector, dmatrix, dvector};
use nlsolve_core::{EquationSystem, PoolError};

use crate::{
    ConfigError, Error, Execution, Executor,
    engine::{Config, Event, Method, Solver, Status},
};

use super::*;

/// `F(x) = A·x − b` with a non-symmetric `A`.
fn linear() -> EquationSystem {
    EquationSystem::new(vec![
        Box::new(|x: &[f64]| 4.0 * x[0] + 1.0 * x[1] - 1.0),
        Box::new(|x: &[f64]| 2.0 * x[0] + 3.0 * x[1] - 2.0),
    ])
}

/// Two parallel lines, so the Jacobian is singular everywhere.
fn degenerate() -> EquationSystem {
    EquationSystem::new(vec![
        Box::new(|x: &[f64]| x[0] + x[1]),
        Box::new(|x: &[f64]| 2.0 * x[0] + 2.0 * x[1] - 1.0),
    ])
}

fn executors() -> Vec<Executor> {
    let mut executors = vec![Executor::new(Execution::Sequential).expect("sequential")];
    for degree in [1, 2, 4] {
        executors.push(Executor::new(Execution::Parallel { degree }).expect("parallel"));
    }
    executors
}

#[test]
fn jacobian_of_linear_system_is_its_matrix() {
    let system = linear();
    let x = dvector![0.3, -0.7];
    let residuals = system.compute(&x).expect("sizes match");

    for executor in executors() {
        let jacobian = jacobian(&system, &x, &residuals, DEFAULT_STEP, &executor)
            .expect("sizes match");
        assert_relative_eq!(jacobian, dmatrix![4.0, 1.0; 2.0, 3.0], epsilon = 1e-9);
    }
}

#[test]
fn jacobian_columns_follow_variables() {
    // Each equation depends on one variable only, with a distinct slope.
    let system = EquationSystem::from_fn(4, |i| {
        let slope = (i + 1) as f64;
        Box::new(move |x: &[f64]| slope * x[(i + 1) % 4])
    });
    let x = DVector::zeros(4);
    let residuals = system.compute(&x).expect("sizes match");

    let sequential = jacobian(&system, &x, &residuals, 0.5, &Executor::Sequential)
        .expect("sizes match");

    let expected = DMatrix::from_fn(4, 4, |i, j| {
        if j == (i + 1) % 4 { (i + 1) as f64 } else { 0.0 }
    });
    assert_eq!(sequential, expected);

    for executor in executors() {
        let other = jacobian(&system, &x, &residuals, 0.5, &executor).expect("sizes match");
        assert_eq!(other, sequential);
    }
}

#[test]
fn jacobian_leaves_input_untouched() {
    let system = linear();
    let x = dvector![0.1, 0.2];
    let residuals = system.compute(&x).expect("sizes match");

    jacobian(&system, &x, &residuals, DEFAULT_STEP, &Executor::Sequential).expect("sizes match");

    assert_eq!(x, dvector![0.1, 0.2]);
}

#[test]
fn newton_step_is_matrix_vector_product() {
    let inverse = dmatrix![1.0, 2.0, 0.0; 0.0, -1.0, 3.0];
    let residuals = dvector![1.0, 0.5, 2.0];

    for executor in executors() {
        let step = newton_step(&inverse, &residuals, &executor);
        assert_eq!(step, dvector![2.0, 5.5]);
    }
}

#[test]
fn full_newton_solves_linear_system() {
    let mut solver = Solver::new(Newton::full(), Config::newton());

    let solution = solver
        .solve_unobserved(&linear(), DVector::zeros(2))
        .expect("should converge");

    // The first step lands on the root, the second confirms it.
    assert_eq!(solution.iters, 2);
    assert_relative_eq!(solution.x, dvector![0.1, 0.6], epsilon = 1e-9);
    assert_eq!(solver.status(), Status::Completed);
}

#[test]
fn modified_newton_solves_linear_system() {
    let mut solver = Solver::new(Newton::modified(), Config::newton());

    let solution = solver
        .solve_unobserved(&linear(), DVector::zeros(2))
        .expect("should converge");

    assert!(solution.iters < 20);
    assert_relative_eq!(solution.x, dvector![0.1, 0.6], epsilon = 1e-6);
}

#[test]
fn singular_jacobian_fails_iteration() {
    let mut solver = Solver::new(Newton::full(), Config::newton());

    let result = solver.solve_unobserved(&degenerate(), DVector::zeros(2));

    assert!(matches!(result, Err(Error::SingularJacobian { iter: 1 })));
    assert_eq!(solver.status(), Status::CompletedWithError);
    assert_eq!(solver.iters(), 0);
}

#[test]
fn singular_frozen_jacobian_fails_preparation() {
    let mut solver = Solver::new(Newton::modified(), Config::newton());

    let result = solver.solve_unobserved(&degenerate(), DVector::zeros(2));

    assert!(matches!(result, Err(Error::SingularJacobian { iter: 0 })));
}

#[test]
fn frozen_jacobian_must_be_prepared() {
    let method = Newton::modified();
    let cache = NewtonCache {
        executor: Executor::Sequential,
        jacobian: JacobianCache::Stale,
    };

    let result = method.advance(&linear(), &cache, &DVector::zeros(2), 1);

    assert!(matches!(result, Err(Error::MissingJacobian)));
}

#[test]
fn prepare_freezes_only_for_modified() {
    let system = linear();
    let x = DVector::zeros(2);

    let full = Newton::full().prepare(&system, &x).expect("prepares");
    assert_eq!(full.jacobian, JacobianCache::Stale);

    let modified = Newton::modified().prepare(&system, &x).expect("prepares");
    let JacobianCache::Inverted(inverse) = modified.jacobian else {
        panic!("expected a frozen inverse");
    };
    assert_relative_eq!(
        inverse,
        dmatrix![0.3, -0.1; -0.2, 0.4],
        epsilon = 1e-9
    );
}

#[test]
fn unset_degree_fails_before_iterating() {
    for newton in [Newton::full(), Newton::modified()] {
        let mut solver = Solver::new(newton.parallel(0), Config::newton());

        let mut calls = 0;
        let result = solver.solve(&linear(), DVector::zeros(2), |_: &Event<'_>| {
            calls += 1;
        });

        assert!(matches!(result, Err(Error::Pool(PoolError::ZeroDegree))));
        assert_eq!(calls, 0);
        assert_eq!(
            solver.error(),
            Some("degree of parallelism must be set to at least 1")
        );
    }
}

#[test]
fn step_must_be_positive() {
    assert_eq!(Newton::full().with_step(0.0), Err(ConfigError::Step));
    assert_eq!(Newton::full().with_step(-1e-3), Err(ConfigError::Step));
    assert_eq!(Newton::full().with_step(f64::NAN), Err(ConfigError::Step));

    let newton = Newton::modified().with_step(1e-6).expect("valid step");
    assert_relative_eq!(newton.step(), 1e-6);
    assert_eq!(newton.jacobian_update(), JacobianUpdate::Frozen);
}

#[test]
fn names_reflect_variant() {
    assert_eq!(Newton::full().name(), "newton");
    assert_eq!(Newton::full().parallel(2).name(), "parallel-newton");
    assert_eq!(Newton::modified().name(), "modified-newton");
    assert_eq!(
        Newton::modified().parallel(2).name(),
        "parallel-modified-newton"
    );
    assert_eq!(Newton::default(), Newton::full());
    assert_eq!(Newton::full().execution(), Execution::Sequential);
}
