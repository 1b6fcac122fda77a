//! Shared numerical primitives with domain checks.
//!
//! Every solver formula goes through these helpers so undefined operations
//! surface as [`DomainError`] instead of leaking `inf` or `NaN` into a result.

use crate::errors::DomainError;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for transfer functions.
pub type CScalar = num_complex::Complex<Scalar>;

/// Rejects `inf` and `NaN`, labelling the failure with `context`.
pub fn finite(value: Scalar, context: &'static str) -> Result<Scalar, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite(context))
    }
}

/// Divides `numerator` by `denominator`, refusing a zero denominator.
pub fn checked_div(
    numerator: Scalar,
    denominator: Scalar,
    context: &'static str,
) -> Result<Scalar, DomainError> {
    if denominator == 0.0 {
        return Err(DomainError::DivisionByZero(context));
    }
    finite(numerator / denominator, context)
}

/// Square root that refuses negative radicands.
pub fn checked_sqrt(radicand: Scalar, context: &'static str) -> Result<Scalar, DomainError> {
    if radicand < 0.0 {
        return Err(DomainError::NegativeRadicand {
            context,
            value: radicand,
        });
    }
    finite(radicand.sqrt(), context)
}

/// Base-10 logarithm that refuses non-positive arguments.
pub fn checked_log10(value: Scalar, context: &'static str) -> Result<Scalar, DomainError> {
    if value.is_nan() || value <= 0.0 {
        return Err(DomainError::NonPositiveLogarithm { context, value });
    }
    finite(value.log10(), context)
}

/// Passes `value` through if it is finite and strictly positive.
pub fn require_positive(value: Scalar, quantity: &'static str) -> Result<Scalar, DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::NonPositiveValue { quantity, value })
    }
}

/// Converts a linear gain magnitude to decibels (`20·log10(|gain|)`).
pub fn gain_to_db(gain: Scalar) -> Result<Scalar, DomainError> {
    Ok(20.0 * checked_log10(gain, "gain in decibels")?)
}
