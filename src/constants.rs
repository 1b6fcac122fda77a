//! Baseline constants and unit conversion helpers.
//!
//! All quantities in this crate use fixed SI base units: volts, amperes, ohms,
//! watts, farads and hertz. Nothing here scales between prefixes.

use std::f64::consts::PI;

/// Gain of a single-pole filter at its cutoff frequency, in decibels.
/// Exactly `20·log10(1/√2) = -10·log10(2)` ≈ −3.0103 dB.
pub const HALF_POWER_DB: f64 = -3.010_299_956_639_812;

/// Default number of points in a filter response sweep (both endpoints included).
pub const DEFAULT_SWEEP_POINTS: usize = 101;

/// Default sweep half-width in decades around the cutoff frequency.
pub const DEFAULT_SWEEP_DECADES: f64 = 2.0;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn angular_frequency_of_one_hertz_is_two_pi() {
        assert_relative_eq!(angular_frequency(1.0), 2.0 * PI, max_relative = 1.0e-15);
    }

    #[test]
    fn half_power_constant_matches_definition() {
        assert_relative_eq!(HALF_POWER_DB, -10.0 * 2f64.log10(), epsilon = 1.0e-15);
    }
}
