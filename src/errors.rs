//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// A selected formula branch hit an undefined operation, or the inputs
/// could not resolve any branch at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Division by zero while evaluating the named expression.
    #[error("division by zero evaluating {0}")]
    DivisionByZero(&'static str),
    /// Logarithm of a value that is zero or negative.
    #[error("logarithm of non-positive value {value} in {context}")]
    NonPositiveLogarithm {
        /// Expression being evaluated.
        context: &'static str,
        /// Offending argument.
        value: Scalar,
    },
    /// Square root of a negative value.
    #[error("square root of negative value {value} in {context}")]
    NegativeRadicand {
        /// Expression being evaluated.
        context: &'static str,
        /// Offending radicand.
        value: Scalar,
    },
    /// A quantity that must be strictly positive (a resistor, a frequency) is not.
    #[error("{quantity} must be positive, got {value}")]
    NonPositiveValue {
        /// Name of the quantity.
        quantity: &'static str,
        /// Offending value.
        value: Scalar,
    },
    /// Evaluation overflowed or otherwise produced `inf`/`NaN`.
    #[error("non-finite result evaluating {0}")]
    NonFinite(&'static str),
    /// A sweep's samples stopped strictly increasing in frequency.
    #[error("sweep frequency {frequency} at index {index} does not exceed its predecessor")]
    NonIncreasingSweep {
        /// Index of the first offending sample.
        index: usize,
        /// Frequency of that sample.
        frequency: Scalar,
    },
    /// No inference branch applies to the supplied inputs.
    #[error("insufficient inputs: {0}")]
    InsufficientInputs(&'static str),
    /// Selector text did not name a known option.
    #[error("unknown {kind} `{value}`")]
    InvalidSelector {
        /// Selector family (`series`, `topology`).
        kind: &'static str,
        /// Text that failed to parse.
        value: String,
    },
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum CircuitCalcError {
    /// Wraps numeric domain failures raised by the solvers.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Raised when a sweep configuration is inconsistent.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
    /// Raised when exporting results fails.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results carrying [`CircuitCalcError`].
pub type Result<T> = std::result::Result<T, CircuitCalcError>;
