//! Single-pole RC filter design and frequency response.
//!
//! Two of resistance, capacitance and cutoff frequency determine the third
//! through `fc = 1/(2πRC)`. The resolved network is then swept over a log
//! frequency window centred on `fc`.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use num_complex::Complex;

use crate::circuits::branch::{select, Branch, KnownInputs};
use crate::circuits::quantity::{Quantity, ResultRecord};
use crate::constants::angular_frequency;
use crate::errors::{DomainError, Result};
use crate::math::{checked_div, require_positive, CScalar, Scalar};
use crate::sweep::{logspace_hz, mag_db, phase_deg, ResponseCurve, ResponsePoint, SweepConfig};

/// Which side of the cutoff an RC section passes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterTopology {
    /// Series R, shunt C: output across the capacitor.
    #[default]
    LowPass,
    /// Series C, shunt R: output across the resistor.
    HighPass,
}

impl FilterTopology {
    /// Transfer function `H(jω)` at normalized frequency `x = ωRC`.
    #[must_use]
    pub fn transfer(self, x: Scalar) -> CScalar {
        let denominator = Complex::new(1.0, x);
        match self {
            Self::LowPass => Complex::new(1.0, 0.0) / denominator,
            Self::HighPass => Complex::new(0.0, x) / denominator,
        }
    }
}

impl fmt::Display for FilterTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowPass => f.write_str("lowpass"),
            Self::HighPass => f.write_str("highpass"),
        }
    }
}

impl FromStr for FilterTopology {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lowpass" | "low-pass" | "lp" => Ok(Self::LowPass),
            "highpass" | "high-pass" | "hp" => Ok(Self::HighPass),
            _ => Err(DomainError::InvalidSelector {
                kind: "topology",
                value: s.to_owned(),
            }),
        }
    }
}

/// Filter inputs. `None`, zero and non-finite values are treated as unknown.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterInputs {
    /// Resistance in ohms.
    pub resistance: Option<Scalar>,
    /// Capacitance in farads.
    pub capacitance: Option<Scalar>,
    /// Cutoff frequency in hertz.
    pub cutoff_frequency: Option<Scalar>,
}

impl FilterInputs {
    /// Inputs with known R and C.
    #[must_use]
    pub fn from_rc(resistance: Scalar, capacitance: Scalar) -> Self {
        Self {
            resistance: Some(resistance),
            capacitance: Some(capacitance),
            cutoff_frequency: None,
        }
    }
}

impl KnownInputs for FilterInputs {
    fn supplied(&self, quantity: Quantity) -> Option<Scalar> {
        match quantity {
            Quantity::Resistance => self.resistance,
            Quantity::Capacitance => self.capacitance,
            Quantity::CutoffFrequency => self.cutoff_frequency,
            _ => None,
        }
    }
}

/// A fully determined RC section.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcParameters {
    /// Resistance in ohms.
    pub resistance: Scalar,
    /// Capacitance in farads.
    pub capacitance: Scalar,
    /// Cutoff frequency in hertz.
    pub cutoff_frequency: Scalar,
    /// Which of the three was derived from the other two.
    pub derived: Quantity,
}

impl RcParameters {
    /// Time constant `τ = RC` in seconds.
    #[must_use]
    pub fn time_constant(&self) -> Scalar {
        self.resistance * self.capacitance
    }

    /// Record holding only the derived quantity.
    #[must_use]
    pub fn derived_record(&self) -> ResultRecord {
        let value = match self.derived {
            Quantity::Resistance => self.resistance,
            Quantity::Capacitance => self.capacitance,
            _ => self.cutoff_frequency,
        };
        ResultRecord::from_iter([(self.derived, value)])
    }

    fn checked(
        resistance: Scalar,
        capacitance: Scalar,
        cutoff_frequency: Scalar,
        derived: Quantity,
    ) -> std::result::Result<Self, DomainError> {
        Ok(Self {
            resistance: require_positive(resistance, "resistance")?,
            capacitance: require_positive(capacitance, "capacitance")?,
            cutoff_frequency: require_positive(cutoff_frequency, "cutoff frequency")?,
            derived,
        })
    }
}

/// Priority table for completing the R, C, fc triple.
pub static FILTER_BRANCHES: &[Branch<2, (), RcParameters>] = &[
    Branch {
        name: "R,C",
        requires: [Quantity::Resistance, Quantity::Capacitance],
        formula: cutoff_from_rc,
    },
    Branch {
        name: "fc,R",
        requires: [Quantity::CutoffFrequency, Quantity::Resistance],
        formula: capacitance_from_fc_r,
    },
    Branch {
        name: "fc,C",
        requires: [Quantity::CutoffFrequency, Quantity::Capacitance],
        formula: resistance_from_fc_c,
    },
];

fn cutoff_from_rc([r, c]: [Scalar; 2], (): ()) -> std::result::Result<RcParameters, DomainError> {
    let fc = checked_div(1.0, TAU * r * c, "fc = 1/(2πRC)")?;
    RcParameters::checked(r, c, fc, Quantity::CutoffFrequency)
}

fn capacitance_from_fc_r(
    [fc, r]: [Scalar; 2],
    (): (),
) -> std::result::Result<RcParameters, DomainError> {
    let c = checked_div(1.0, TAU * r * fc, "C = 1/(2πR·fc)")?;
    RcParameters::checked(r, c, fc, Quantity::Capacitance)
}

fn resistance_from_fc_c(
    [fc, c]: [Scalar; 2],
    (): (),
) -> std::result::Result<RcParameters, DomainError> {
    let r = checked_div(1.0, TAU * c * fc, "R = 1/(2πC·fc)")?;
    RcParameters::checked(r, c, fc, Quantity::Resistance)
}

/// Completes the R, C, fc triple from the first known pair.
///
/// # Errors
///
/// Returns [`DomainError::InsufficientInputs`] when no pair is known, and
/// other [`DomainError`] variants when the triple would not be positive.
pub fn resolve(inputs: &FilterInputs) -> std::result::Result<RcParameters, DomainError> {
    let (branch, values) = select(FILTER_BRANCHES, inputs).ok_or(
        DomainError::InsufficientInputs("need two of resistance, capacitance, cutoff frequency"),
    )?;
    tracing::debug!(branch = branch.name, "resolving RC triple");
    (branch.formula)(values, ())
}

/// Samples the magnitude and phase of `topology` built from `params`.
///
/// # Errors
///
/// Returns [`DomainError`] if the sweep window or a magnitude is undefined,
/// or if `config` is too narrow or too dense for the samples to strictly
/// increase in frequency.
pub fn response_curve(
    params: &RcParameters,
    topology: FilterTopology,
    config: &SweepConfig,
) -> std::result::Result<ResponseCurve, DomainError> {
    let (start, stop) = config.window(params.cutoff_frequency)?;
    let tau = params.time_constant();
    let points = logspace_hz(start, stop, config.points)?
        .into_iter()
        .map(|frequency| {
            let h = topology.transfer(angular_frequency(frequency) * tau);
            Ok(ResponsePoint {
                frequency,
                magnitude_db: mag_db(h)?,
                phase_deg: phase_deg(h),
            })
        })
        .collect::<std::result::Result<Vec<_>, DomainError>>()?;
    Ok(ResponseCurve::from_points(points))
}

/// Result of a filter solve: the derived quantity, the full triple and the sweep.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResponse {
    /// Record holding the derived quantity only.
    pub record: ResultRecord,
    /// Resolved R, C and fc.
    pub parameters: RcParameters,
    /// Magnitude/phase sweep around the cutoff.
    pub curve: ResponseCurve,
}

/// Resolves the RC triple and sweeps the default 101-point, four-decade window.
///
/// The default [`SweepConfig`] always validates, so every failure here is a
/// [`DomainError`] in the inputs. [`solve_with`] also has to report a bad
/// configuration and returns the wider crate [`Result`] for that reason.
///
/// # Errors
///
/// See [`resolve`] and [`response_curve`].
pub fn solve(
    inputs: &FilterInputs,
    topology: FilterTopology,
) -> std::result::Result<FilterResponse, DomainError> {
    sweep(inputs, topology, &SweepConfig::default())
}

/// Like [`solve`] with an explicit sweep configuration.
///
/// # Errors
///
/// Returns [`crate::errors::CircuitCalcError::InvalidConfig`] for a
/// degenerate `config`, otherwise the errors of [`solve`] wrapped in
/// [`crate::errors::CircuitCalcError::Domain`].
pub fn solve_with(
    inputs: &FilterInputs,
    topology: FilterTopology,
    config: &SweepConfig,
) -> Result<FilterResponse> {
    config.validate()?;
    Ok(sweep(inputs, topology, config)?)
}

fn sweep(
    inputs: &FilterInputs,
    topology: FilterTopology,
    config: &SweepConfig,
) -> std::result::Result<FilterResponse, DomainError> {
    let _span = tracing::debug_span!("filter_response", %topology, points = config.points).entered();
    let parameters = resolve(inputs)?;
    let curve = response_curve(&parameters, topology, config)?;
    Ok(FilterResponse {
        record: parameters.derived_record(),
        parameters,
        curve,
    })
}
