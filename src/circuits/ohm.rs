//! Ohm's law and resistor power relations.
//!
//! Given any two of voltage, current, resistance and power, derives the other
//! two. See [`OHM_LAW_BRANCHES`] for the priority applied when more than two
//! inputs are known.

use crate::circuits::branch::{evaluate_first, Branch, KnownInputs};
use crate::circuits::quantity::{Quantity, ResultRecord};
use crate::errors::DomainError;
use crate::math::{checked_div, checked_sqrt, finite, Scalar};

/// Snapshot of the four Ohm's law quantities. `None`, zero and non-finite
/// values are all treated as unknown.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OhmLawInputs {
    /// Voltage in volts.
    pub voltage: Option<Scalar>,
    /// Current in amperes.
    pub current: Option<Scalar>,
    /// Resistance in ohms.
    pub resistance: Option<Scalar>,
    /// Power in watts.
    pub power: Option<Scalar>,
}

impl OhmLawInputs {
    /// Sets the voltage.
    #[must_use]
    pub fn voltage(mut self, volts: Scalar) -> Self {
        self.voltage = Some(volts);
        self
    }

    /// Sets the current.
    #[must_use]
    pub fn current(mut self, amperes: Scalar) -> Self {
        self.current = Some(amperes);
        self
    }

    /// Sets the resistance.
    #[must_use]
    pub fn resistance(mut self, ohms: Scalar) -> Self {
        self.resistance = Some(ohms);
        self
    }

    /// Sets the power.
    #[must_use]
    pub fn power(mut self, watts: Scalar) -> Self {
        self.power = Some(watts);
        self
    }
}

impl KnownInputs for OhmLawInputs {
    fn supplied(&self, quantity: Quantity) -> Option<Scalar> {
        match quantity {
            Quantity::Voltage => self.voltage,
            Quantity::Current => self.current,
            Quantity::Resistance => self.resistance,
            Quantity::Power => self.power,
            _ => None,
        }
    }
}

/// Priority table: the first pair of known inputs decides the formulas.
pub static OHM_LAW_BRANCHES: &[Branch<2, (), ResultRecord>] = &[
    Branch {
        name: "V,I",
        requires: [Quantity::Voltage, Quantity::Current],
        formula: from_voltage_current,
    },
    Branch {
        name: "V,R",
        requires: [Quantity::Voltage, Quantity::Resistance],
        formula: from_voltage_resistance,
    },
    Branch {
        name: "I,R",
        requires: [Quantity::Current, Quantity::Resistance],
        formula: from_current_resistance,
    },
    Branch {
        name: "V,P",
        requires: [Quantity::Voltage, Quantity::Power],
        formula: from_voltage_power,
    },
    Branch {
        name: "I,P",
        requires: [Quantity::Current, Quantity::Power],
        formula: from_current_power,
    },
    Branch {
        name: "R,P",
        requires: [Quantity::Resistance, Quantity::Power],
        formula: from_resistance_power,
    },
];

/// Derives the unknown pair of quantities from the first known pair.
///
/// Returns an empty record when fewer than two inputs are known.
///
/// # Errors
///
/// Returns [`DomainError`] if the selected formula is undefined for the
/// inputs (negative radicand, overflow).
pub fn solve(inputs: &OhmLawInputs) -> Result<ResultRecord, DomainError> {
    let _span = tracing::debug_span!("ohms_law").entered();
    Ok(evaluate_first(OHM_LAW_BRANCHES, inputs, ())?.unwrap_or_default())
}

fn from_voltage_current([v, i]: [Scalar; 2], (): ()) -> Result<ResultRecord, DomainError> {
    Ok(ResultRecord::from_iter([
        (Quantity::Resistance, checked_div(v, i, "R = V/I")?),
        (Quantity::Power, finite(v * i, "P = V·I")?),
    ]))
}

fn from_voltage_resistance([v, r]: [Scalar; 2], (): ()) -> Result<ResultRecord, DomainError> {
    Ok(ResultRecord::from_iter([
        (Quantity::Current, checked_div(v, r, "I = V/R")?),
        (Quantity::Power, checked_div(v * v, r, "P = V²/R")?),
    ]))
}

fn from_current_resistance([i, r]: [Scalar; 2], (): ()) -> Result<ResultRecord, DomainError> {
    Ok(ResultRecord::from_iter([
        (Quantity::Voltage, finite(i * r, "V = I·R")?),
        (Quantity::Power, finite(i * i * r, "P = I²·R")?),
    ]))
}

fn from_voltage_power([v, p]: [Scalar; 2], (): ()) -> Result<ResultRecord, DomainError> {
    Ok(ResultRecord::from_iter([
        (Quantity::Current, checked_div(p, v, "I = P/V")?),
        (Quantity::Resistance, checked_div(v * v, p, "R = V²/P")?),
    ]))
}

fn from_current_power([i, p]: [Scalar; 2], (): ()) -> Result<ResultRecord, DomainError> {
    Ok(ResultRecord::from_iter([
        (Quantity::Voltage, checked_div(p, i, "V = P/I")?),
        (Quantity::Resistance, checked_div(p, i * i, "R = P/I²")?),
    ]))
}

fn from_resistance_power([r, p]: [Scalar; 2], (): ()) -> Result<ResultRecord, DomainError> {
    Ok(ResultRecord::from_iter([
        (Quantity::Voltage, checked_sqrt(p * r, "V = √(P·R)")?),
        (
            Quantity::Current,
            checked_sqrt(checked_div(p, r, "I = √(P/R)")?, "I = √(P/R)")?,
        ),
    ]))
}
