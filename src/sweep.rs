//! Frequency sweep builders, response curves and post-processing helpers.

use std::cmp::Ordering;
use std::io::Write;

use num_complex::Complex;

use crate::constants::{DEFAULT_SWEEP_DECADES, DEFAULT_SWEEP_POINTS};
use crate::errors::{CircuitCalcError, DomainError, Result};
use crate::math::{gain_to_db, require_positive, Scalar};

/// Smallest relative step between neighbouring samples that `validate` accepts.
const MIN_RELATIVE_STEP: Scalar = 1.0e-9;

/// Shape of a log-spaced sweep centred on a filter's cutoff frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// Number of samples, both endpoints included.
    pub points: usize,
    /// Decades covered on each side of the centre frequency.
    pub decades_each_side: Scalar,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            points: DEFAULT_SWEEP_POINTS,
            decades_each_side: DEFAULT_SWEEP_DECADES,
        }
    }
}

impl SweepConfig {
    /// Checks that the sweep describes a non-degenerate window.
    ///
    /// # Errors
    ///
    /// Returns [`CircuitCalcError::InvalidConfig`] for fewer than two points,
    /// a span that is not a finite positive number of decades, or so many
    /// points over so narrow a span that neighbours would collapse in `f64`.
    pub fn validate(&self) -> Result<()> {
        if self.points < 2 {
            return Err(CircuitCalcError::InvalidConfig(format!(
                "sweep needs at least 2 points, got {}",
                self.points
            )));
        }
        if !(self.decades_each_side.is_finite() && self.decades_each_side > 0.0) {
            return Err(CircuitCalcError::InvalidConfig(format!(
                "sweep span must be a positive number of decades, got {}",
                self.decades_each_side
            )));
        }
        let step = 2.0 * self.decades_each_side * std::f64::consts::LN_10
            / (self.points - 1) as Scalar;
        if step < MIN_RELATIVE_STEP {
            return Err(CircuitCalcError::InvalidConfig(format!(
                "{} points over ±{} decades are too dense to resolve",
                self.points, self.decades_each_side
            )));
        }
        Ok(())
    }

    /// Start and stop frequencies of the window around `centre_hz`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the centre or the span is not positive,
    /// since either would leave `start >= stop`.
    pub fn window(&self, centre_hz: Scalar) -> std::result::Result<(Scalar, Scalar), DomainError> {
        let centre = require_positive(centre_hz, "sweep centre frequency")?;
        require_positive(self.decades_each_side, "sweep span in decades")?;
        let half_span = Scalar::powf(10.0, self.decades_each_side);
        Ok((
            require_positive(centre / half_span, "sweep start frequency")?,
            require_positive(centre * half_span, "sweep stop frequency")?,
        ))
    }
}

/// Generates `n` geometrically spaced samples from `start_hz` to `stop_hz`,
/// with an equal ratio between neighbours: `start · (stop/start)^(i/(n−1))`.
///
/// # Errors
///
/// Returns [`DomainError`] unless both endpoints are finite and positive and
/// every sample is strictly above its predecessor, which rules out
/// `stop <= start` and spacings too fine for `f64` to resolve.
pub fn logspace_hz(
    start_hz: Scalar,
    stop_hz: Scalar,
    n: usize,
) -> std::result::Result<Vec<Scalar>, DomainError> {
    let start = require_positive(start_hz, "sweep start frequency")?;
    let stop = require_positive(stop_hz, "sweep stop frequency")?;
    let samples: Vec<Scalar> = match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let ratio = stop / start;
            let steps = (n - 1) as Scalar;
            (0..n)
                .map(|i| start * ratio.powf(i as Scalar / steps))
                .collect()
        }
    };
    if let Some(i) = samples.windows(2).position(|w| w[0] >= w[1]) {
        return Err(DomainError::NonIncreasingSweep {
            index: i + 1,
            frequency: samples[i + 1],
        });
    }
    Ok(samples)
}

/// Magnitude in dB (`20·log10(|h|)`).
///
/// # Errors
///
/// Returns [`DomainError`] when `|h|` is zero, where the level is undefined.
pub fn mag_db(h: Complex<Scalar>) -> std::result::Result<Scalar, DomainError> {
    gain_to_db(h.norm())
}

/// Phase of `h` in degrees.
#[must_use]
pub fn phase_deg(h: Complex<Scalar>) -> Scalar {
    h.arg().to_degrees()
}

/// One sample of a frequency response.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsePoint {
    /// Frequency in hertz.
    pub frequency: Scalar,
    /// Gain relative to unity, in decibels.
    pub magnitude_db: Scalar,
    /// Phase shift in degrees.
    pub phase_deg: Scalar,
}

/// Response samples ordered by strictly increasing frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<ResponsePoint>", into = "Vec<ResponsePoint>")
)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseCurve {
    points: Vec<ResponsePoint>,
}

impl ResponseCurve {
    pub(crate) fn from_points(points: Vec<ResponsePoint>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].frequency < w[1].frequency));
        Self { points }
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the curve holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Samples in frequency order.
    #[must_use]
    pub fn points(&self) -> &[ResponsePoint] {
        &self.points
    }

    /// Iterates samples in frequency order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResponsePoint> {
        self.points.iter()
    }

    /// Sample frequencies in hertz.
    #[must_use]
    pub fn frequencies(&self) -> Vec<Scalar> {
        self.points.iter().map(|p| p.frequency).collect()
    }

    /// Sample magnitudes in decibels.
    #[must_use]
    pub fn magnitudes_db(&self) -> Vec<Scalar> {
        self.points.iter().map(|p| p.magnitude_db).collect()
    }

    /// Sample phases in degrees.
    #[must_use]
    pub fn phases_deg(&self) -> Vec<Scalar> {
        self.points.iter().map(|p| p.phase_deg).collect()
    }

    /// Sample closest to `frequency_hz` on a logarithmic axis.
    #[must_use]
    pub fn nearest(&self, frequency_hz: Scalar) -> Option<&ResponsePoint> {
        if !(frequency_hz.is_finite() && frequency_hz > 0.0) {
            return None;
        }
        let target = frequency_hz.ln();
        self.points.iter().min_by(|a, b| {
            let da = (a.frequency.ln() - target).abs();
            let db = (b.frequency.ln() - target).abs();
            da.total_cmp(&db)
        })
    }
}

impl TryFrom<Vec<ResponsePoint>> for ResponseCurve {
    type Error = DomainError;

    fn try_from(points: Vec<ResponsePoint>) -> std::result::Result<Self, Self::Error> {
        if let Some(i) = points
            .windows(2)
            .position(|w| w[0].frequency.partial_cmp(&w[1].frequency) != Some(Ordering::Less))
        {
            return Err(DomainError::NonIncreasingSweep {
                index: i + 1,
                frequency: points[i + 1].frequency,
            });
        }
        Ok(Self { points })
    }
}

impl From<ResponseCurve> for Vec<ResponsePoint> {
    fn from(curve: ResponseCurve) -> Self {
        curve.points
    }
}

impl<'a> IntoIterator for &'a ResponseCurve {
    type Item = &'a ResponsePoint;
    type IntoIter = std::slice::Iter<'a, ResponsePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Writes a response curve as CSV with a `frequency,magnitude_db,phase_deg` header.
///
/// # Errors
///
/// Propagates write failures as [`CircuitCalcError::Io`].
pub fn write_response_curve_csv<W: Write>(mut w: W, curve: &ResponseCurve) -> Result<()> {
    writeln!(w, "frequency,magnitude_db,phase_deg")?;
    for p in curve {
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e}",
            p.frequency, p.magnitude_db, p.phase_deg
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn logspace_has_equal_ratios() {
        let v = logspace_hz(1.0, 1.0e4, 5).unwrap();
        assert_eq!(v.len(), 5);
        assert_relative_eq!(v[0], 1.0);
        assert_relative_eq!(v[4], 1.0e4, max_relative = 1.0e-12);
        for w in v.windows(2) {
            assert_relative_eq!(w[1] / w[0], 10.0, max_relative = 1.0e-12);
        }
    }

    #[test]
    fn logspace_rejects_non_positive_endpoints() {
        assert!(logspace_hz(0.0, 10.0, 3).is_err());
        assert!(logspace_hz(1.0, -10.0, 3).is_err());
        assert_eq!(logspace_hz(1.0, 10.0, 0).unwrap(), Vec::<Scalar>::new());
    }

    #[test]
    fn logspace_rejects_samples_that_do_not_increase() {
        let err = logspace_hz(100.0, 1.0, 3).unwrap_err();
        assert!(matches!(err, DomainError::NonIncreasingSweep { index: 1, .. }));
        assert!(logspace_hz(5.0, 5.0, 2).is_err());
        let err = logspace_hz(1.0, 1.0 + 1.0e-15, 1_000).unwrap_err();
        assert!(matches!(err, DomainError::NonIncreasingSweep { .. }));
    }

    #[test]
    fn window_rejects_negative_span() {
        let reversed = SweepConfig {
            points: 5,
            decades_each_side: -2.0,
        };
        assert!(matches!(
            reversed.window(1_000.0),
            Err(DomainError::NonPositiveValue { .. })
        ));
    }

    #[test]
    fn mag_phase_of_unit_phasors() {
        assert_relative_eq!(mag_db(Complex::new(1.0, 0.0)).unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(phase_deg(Complex::new(0.0, 1.0)), 90.0, epsilon = 1e-12);
        assert!(mag_db(Complex::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn default_config_spans_four_decades() {
        let config = SweepConfig::default();
        config.validate().unwrap();
        let (start, stop) = config.window(1_000.0).unwrap();
        assert_relative_eq!(start, 10.0, max_relative = 1.0e-12);
        assert_relative_eq!(stop, 100_000.0, max_relative = 1.0e-12);
        assert_eq!(config.points, 101);
    }

    #[test]
    fn degenerate_configs_are_rejected() {
        let too_few = SweepConfig {
            points: 1,
            ..SweepConfig::default()
        };
        assert!(matches!(too_few.validate(), Err(CircuitCalcError::InvalidConfig(_))));
        let no_span = SweepConfig {
            decades_each_side: 0.0,
            ..SweepConfig::default()
        };
        assert!(no_span.validate().is_err());
        let negative = SweepConfig {
            decades_each_side: -2.0,
            ..SweepConfig::default()
        };
        assert!(negative.validate().is_err());
        let too_dense = SweepConfig {
            points: 1_000_000,
            decades_each_side: 1.0e-13,
        };
        assert!(matches!(too_dense.validate(), Err(CircuitCalcError::InvalidConfig(_))));
        let dense_but_resolvable = SweepConfig {
            points: 10_001,
            decades_each_side: 2.0,
        };
        dense_but_resolvable.validate().unwrap();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_fills_missing_fields_from_defaults() {
        let config: SweepConfig = serde_json::from_str(r#"{"points": 11}"#).unwrap();
        assert_eq!(config.points, 11);
        assert_relative_eq!(config.decades_each_side, 2.0);
        let empty: SweepConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SweepConfig::default());
    }

    #[test]
    fn nearest_uses_log_distance() {
        let curve = ResponseCurve::from_points(
            [1.0, 10.0, 100.0]
                .into_iter()
                .map(|frequency| ResponsePoint {
                    frequency,
                    magnitude_db: 0.0,
                    phase_deg: 0.0,
                })
                .collect(),
        );
        // 40 Hz is closer to 100 Hz than to 10 Hz on a log axis.
        assert_relative_eq!(curve.nearest(40.0).unwrap().frequency, 100.0);
        assert_relative_eq!(curve.nearest(2.0).unwrap().frequency, 1.0);
        assert!(curve.nearest(0.0).is_none());
    }

    #[test]
    fn unordered_points_do_not_form_a_curve() {
        let point = |frequency| ResponsePoint {
            frequency,
            magnitude_db: 0.0,
            phase_deg: 0.0,
        };
        let err = ResponseCurve::try_from(vec![point(1.0), point(10.0), point(10.0)]).unwrap_err();
        assert_eq!(
            err,
            DomainError::NonIncreasingSweep {
                index: 2,
                frequency: 10.0
            }
        );
        assert!(ResponseCurve::try_from(vec![point(1.0), point(Scalar::NAN)]).is_err());
        assert_eq!(ResponseCurve::try_from(vec![point(1.0), point(2.0)]).unwrap().len(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn curve_serializes_as_a_plain_array() {
        let curve = ResponseCurve::try_from(vec![
            ResponsePoint {
                frequency: 10.0,
                magnitude_db: -0.5,
                phase_deg: -10.0,
            },
            ResponsePoint {
                frequency: 100.0,
                magnitude_db: -3.0,
                phase_deg: -45.0,
            },
        ])
        .unwrap();
        let json = serde_json::to_string(&curve).unwrap();
        assert!(json.starts_with(r#"[{"frequency":10.0,"#));
        let back: ResponseCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(back, curve);

        let reversed = r#"[{"frequency":100.0,"magnitude_db":0.0,"phase_deg":0.0},
                          {"frequency":10.0,"magnitude_db":0.0,"phase_deg":0.0}]"#;
        assert!(serde_json::from_str::<ResponseCurve>(reversed).is_err());
    }

    #[test]
    fn csv_has_header_and_one_row_per_point() {
        let curve = ResponseCurve::from_points(vec![
            ResponsePoint {
                frequency: 1.0,
                magnitude_db: -3.0,
                phase_deg: -45.0,
            },
            ResponsePoint {
                frequency: 2.0,
                magnitude_db: -6.0,
                phase_deg: -60.0,
            },
        ]);
        let mut buf = Vec::new();
        write_response_curve_csv(&mut buf, &curve).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "frequency,magnitude_db,phase_deg");
        assert!(lines[1].starts_with("1.0000000000000000e0,"));
    }
}
