//! IEC 60063 preferred resistor values and nearest-value lookup.

use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;
use crate::math::{checked_log10, require_positive, Scalar};

/// E12 mantissas (±10 % tolerance), ascending.
pub static E12: &[Scalar] = &[1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2];

/// E24 mantissas (±5 % tolerance): E12 plus the interleaved intermediates, ascending.
pub static E24: &[Scalar] = &[
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1,
    5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
];

/// Preferred-value series a calculated resistor can be snapped to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StandardSeries {
    /// 12 values per decade.
    #[default]
    E12,
    /// 24 values per decade.
    E24,
}

impl StandardSeries {
    /// Normalized mantissas in [1.0, 10.0), ascending.
    #[must_use]
    pub fn mantissas(self) -> &'static [Scalar] {
        match self {
            Self::E12 => E12,
            Self::E24 => E24,
        }
    }

    /// Nominal tolerance of parts sold in this series, in percent.
    #[must_use]
    pub const fn tolerance_percent(self) -> Scalar {
        match self {
            Self::E12 => 10.0,
            Self::E24 => 5.0,
        }
    }
}

impl fmt::Display for StandardSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::E12 => f.write_str("E12"),
            Self::E24 => f.write_str("E24"),
        }
    }
}

impl FromStr for StandardSeries {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "E12" => Ok(Self::E12),
            "E24" => Ok(Self::E24),
            _ => Err(DomainError::InvalidSelector {
                kind: "series",
                value: s.to_owned(),
            }),
        }
    }
}

/// Snaps `raw` to the closest preferred value of `series` within its decade.
///
/// The mantissa table is scanned in ascending order and only a strictly
/// smaller distance replaces the current pick, so ties resolve to the lower
/// value. Values just below the next decade (e.g. 9.9 in E12) snap down to
/// the top of the table rather than up to the next decade's 1.0.
///
/// # Errors
///
/// Returns [`DomainError`] if `raw` is not a finite positive number.
pub fn nearest_standard_value(raw: Scalar, series: StandardSeries) -> Result<Scalar, DomainError> {
    let raw = require_positive(raw, "resistance to standardize")?;
    let exponent = checked_log10(raw, "resistance decade")?.floor();
    let mut decade = decade_scale(exponent);
    let mut mantissa = raw / decade;

    // log10 rounding can leave the mantissa a hair outside [1, 10).
    if mantissa >= 10.0 {
        decade *= 10.0;
        mantissa = raw / decade;
    } else if mantissa < 1.0 {
        decade /= 10.0;
        mantissa = raw / decade;
    }

    let table = series.mantissas();
    let mut closest = table[0];
    let mut min_diff = (mantissa - closest).abs();
    for &candidate in &table[1..] {
        let diff = (mantissa - candidate).abs();
        if diff < min_diff {
            min_diff = diff;
            closest = candidate;
        }
    }

    Ok(closest * decade)
}

fn decade_scale(exponent: Scalar) -> Scalar {
    // Exact powers of ten for the integer exponents resistors actually span.
    if exponent.abs() <= 300.0 {
        10f64.powi(exponent as i32)
    } else {
        10f64.powf(exponent)
    }
}
