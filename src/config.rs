//! Checker configuration for sealant

/// Options that change how the checkers decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Whether an `int` value satisfies a `float` constraint
    pub numeric_widening: bool,
    /// Stop collecting diagnostics after this many errors (`None` = unlimited)
    pub max_errors: Option<usize>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            numeric_widening: true,
            max_errors: None,
        }
    }
}

impl CheckConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable `int` <: `float`
    pub fn with_numeric_widening(mut self, enabled: bool) -> Self {
        self.numeric_widening = enabled;
        self
    }

    /// Cap the number of reported errors
    pub fn with_max_errors(mut self, max: Option<usize>) -> Self {
        self.max_errors = max;
        self
    }

    /// Return `true` once `count` errors have reached the configured cap.
    pub fn error_limit_reached(&self, count: usize) -> bool {
        self.max_errors.is_some_and(|max| count >= max)
    }
}
