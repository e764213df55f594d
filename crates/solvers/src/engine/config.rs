use crate::ConfigError;

/// Iteration limits shared by every method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    error_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self::newton()
    }
}

impl Config {
    /// Creates a new config with a validated error rate.
    ///
    /// # Errors
    ///
    /// Returns an error if `error_rate` is negative or non-finite.
    pub fn new(max_iters: usize, error_rate: f64) -> Result<Self, ConfigError> {
        if !error_rate.is_finite() || error_rate < 0.0 {
            return Err(ConfigError::ErrorRate);
        }

        Ok(Self {
            max_iters,
            error_rate,
        })
    }

    /// Default limits for the Newton family: 100 iterations, error rate `1e-8`.
    #[must_use]
    pub fn newton() -> Self {
        Self {
            max_iters: 100,
            error_rate: 1e-8,
        }
    }

    /// Default limits for simple iteration: 100 iterations, error rate `1e-5`.
    #[must_use]
    pub fn simple_iteration() -> Self {
        Self {
            max_iters: 100,
            error_rate: 1e-5,
        }
    }

    /// Returns a copy with a different iteration budget.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns a copy with a different error rate.
    ///
    /// # Errors
    ///
    /// Returns an error if `error_rate` is negative or non-finite.
    pub fn with_error_rate(self, error_rate: f64) -> Result<Self, ConfigError> {
        Self::new(self.max_iters, error_rate)
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance on the change in norm between iterates.
    #[must_use]
    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }
}
