#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use nalgebra::DVector;
use nlsolve_core::{Equation, EquationSystem};

/// The tridiagonal system
///
/// ```text
/// (3 + 2x₀)x₀ − 2x₁ − 3 = 0
/// (3 + 2xᵢ)xᵢ − xᵢ₋₁ − 2xᵢ₊₁ − 2 = 0
/// (3 + 2xₙ₋₁)xₙ₋₁ − 2xₙ₋₂ − 4 = 0
/// ```
///
/// `n` must be at least 2.
pub fn tridiagonal(n: usize) -> EquationSystem {
    EquationSystem::from_fn(n, |i| tridiagonal_equation(n, i))
}

/// [`tridiagonal`] with a counter of full system evaluations.
pub fn counted_tridiagonal(n: usize) -> (EquationSystem, Arc<AtomicUsize>) {
    let evaluations = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&evaluations);

    let system = EquationSystem::from_fn(n, |i| {
        let equation = tridiagonal_equation(n, i);
        if i == 0 {
            let counter = Arc::clone(&counter);
            Box::new(move |x: &[f64]| {
                counter.fetch_add(1, Ordering::Relaxed);
                equation(x)
            })
        } else {
            equation
        }
    });

    (system, evaluations)
}

fn tridiagonal_equation(n: usize, i: usize) -> Equation {
    let last = n - 1;
    if i == 0 {
        Box::new(|x: &[f64]| (3.0 + 2.0 * x[0]) * x[0] - 2.0 * x[1] - 3.0)
    } else if i == last {
        Box::new(move |x: &[f64]| (3.0 + 2.0 * x[last]) * x[last] - 2.0 * x[last - 1] - 4.0)
    } else {
        Box::new(move |x: &[f64]| (3.0 + 2.0 * x[i]) * x[i] - x[i - 1] - 2.0 * x[i + 1] - 2.0)
    }
}

/// The equivalent system
///
/// ```text
/// x₀ = 0.3 − 0.1x₀² − 0.2x₁²
/// x₁ = 0.7 − 0.2x₀² + 0.1x₁x₀
/// ```
pub fn contraction() -> EquationSystem {
    EquationSystem::fixed_point(vec![
        Box::new(|x: &[f64]| 0.3 - 0.1 * x[0] * x[0] - 0.2 * x[1] * x[1]),
        Box::new(|x: &[f64]| 0.7 - 0.2 * x[0] * x[0] + 0.1 * x[1] * x[0]),
    ])
}

/// Returns the vector of length `n` with every component set to `value`.
pub fn filled(n: usize, value: f64) -> DVector<f64> {
    DVector::from_element(n, value)
}
