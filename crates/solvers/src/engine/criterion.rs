use nalgebra::DVector;

/// Convergence test applied between successive iterates.
///
/// Both criteria compare the *norms* of `x_k` and `x_{k+1}`, not the norm of
/// their difference. Two iterates of equal magnitude pointing in different
/// directions therefore pass the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// `|‖x_{k+1}‖₂ − ‖x_k‖₂| ≤ error_rate`, used by the Newton family.
    Norm,

    /// `|norma(x_{k+1}) − norma(x_k)| < error_rate`, used by simple iteration.
    ///
    /// See [`norma`] for the exact formula.
    Norma,
}

impl Criterion {
    /// Measures `x` with the norm this criterion compares.
    #[must_use]
    pub fn measure(self, x: &DVector<f64>) -> f64 {
        match self {
            Self::Norm => x.norm(),
            Self::Norma => norma(x),
        }
    }

    /// Returns true if moving from norm `previous` to norm `next` converged.
    #[must_use]
    pub fn is_met(self, previous: f64, next: f64, error_rate: f64) -> bool {
        let delta = (next - previous).abs();
        match self {
            Self::Norm => delta <= error_rate,
            Self::Norma => delta < error_rate,
        }
    }
}

/// Square root of the sum of squares, accumulated left to right.
#[must_use]
pub fn norma(x: &DVector<f64>) -> f64 {
    x.iter().fold(0.0, |sum, value| sum + value * value).sqrt()
}
