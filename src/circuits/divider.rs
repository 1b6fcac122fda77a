//! Two-resistor voltage divider analysis and design.
//!
//! With both resistors known the divider is analysed; with only R1 and a
//! target output voltage the lower resistor is designed and snapped to a
//! preferred value.

use crate::circuits::branch::{evaluate_first, Branch, KnownInputs};
use crate::circuits::quantity::{Quantity, ResultRecord};
use crate::circuits::standard_values::{nearest_standard_value, StandardSeries};
use crate::errors::DomainError;
use crate::math::{checked_div, finite, require_positive, Scalar};

/// Divider inputs. `None`, zero and non-finite values are treated as unknown.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DividerInputs {
    /// Supply voltage across the chain, in volts.
    pub input_voltage: Option<Scalar>,
    /// Upper resistor (supply side), in ohms.
    pub r1: Option<Scalar>,
    /// Lower resistor (ground side), in ohms.
    pub r2: Option<Scalar>,
    /// Target output voltage across R2, in volts.
    pub desired_output: Option<Scalar>,
}

impl DividerInputs {
    /// Inputs for analysing an existing divider.
    #[must_use]
    pub fn analyse(input_voltage: Scalar, r1: Scalar, r2: Scalar) -> Self {
        Self {
            input_voltage: Some(input_voltage),
            r1: Some(r1),
            r2: Some(r2),
            desired_output: None,
        }
    }

    /// Inputs for designing R2 to hit `desired_output`.
    #[must_use]
    pub fn design(input_voltage: Scalar, r1: Scalar, desired_output: Scalar) -> Self {
        Self {
            input_voltage: Some(input_voltage),
            r1: Some(r1),
            r2: None,
            desired_output: Some(desired_output),
        }
    }
}

impl KnownInputs for DividerInputs {
    fn supplied(&self, quantity: Quantity) -> Option<Scalar> {
        match quantity {
            Quantity::InputVoltage => self.input_voltage,
            Quantity::R1 => self.r1,
            Quantity::R2 => self.r2,
            Quantity::DesiredOutput => self.desired_output,
            _ => None,
        }
    }
}

/// Priority table: analysis with a known R2 is preferred over design.
pub static DIVIDER_BRANCHES: &[Branch<3, StandardSeries, ResultRecord>] = &[
    Branch {
        name: "Vin,R1,R2",
        requires: [Quantity::InputVoltage, Quantity::R1, Quantity::R2],
        formula: analyse,
    },
    Branch {
        name: "Vin,R1,Vdesired",
        requires: [Quantity::InputVoltage, Quantity::R1, Quantity::DesiredOutput],
        formula: design_r2,
    },
];

/// Analyses or designs a divider from the known inputs.
///
/// `series` only matters when R2 is being designed. Returns an empty record
/// when neither branch has its inputs.
///
/// # Errors
///
/// Returns [`DomainError`] if `R1 + R2` is zero, if the desired output is
/// not below the input voltage, or if the implied R2 is not positive.
pub fn solve(inputs: &DividerInputs, series: StandardSeries) -> Result<ResultRecord, DomainError> {
    let _span = tracing::debug_span!("voltage_divider", %series).entered();
    Ok(evaluate_first(DIVIDER_BRANCHES, inputs, series)?.unwrap_or_default())
}

fn analyse([vin, r1, r2]: [Scalar; 3], _: StandardSeries) -> Result<ResultRecord, DomainError> {
    let total = r1 + r2;
    let current = checked_div(vin, total, "I = Vin/(R1+R2)")?;
    Ok(ResultRecord::from_iter([
        (Quantity::OutputVoltage, finite(vin * checked_div(r2, total, "R2/(R1+R2)")?, "Vout")?),
        (Quantity::Current, current),
        (Quantity::PowerR1, finite(current * current * r1, "P(R1) = I²·R1")?),
        (Quantity::PowerR2, finite(current * current * r2, "P(R2) = I²·R2")?),
    ]))
}

fn design_r2(
    [vin, r1, desired]: [Scalar; 3],
    series: StandardSeries,
) -> Result<ResultRecord, DomainError> {
    let headroom = vin - desired;
    if headroom <= 0.0 {
        return Err(DomainError::NonPositiveValue {
            quantity: "input voltage minus desired output",
            value: headroom,
        });
    }
    let r2_calculated = require_positive(
        checked_div(desired * r1, headroom, "R2 = Vdesired·R1/(Vin − Vdesired)")?,
        "calculated R2",
    )?;
    let r2_standard = nearest_standard_value(r2_calculated, series)?;
    let total = r1 + r2_standard;
    tracing::debug!(r2_calculated, r2_standard, "snapped R2 to standard value");

    Ok(ResultRecord::from_iter([
        (Quantity::Current, checked_div(vin, total, "I = Vin/(R1+R2std)")?),
        (Quantity::R2Calculated, r2_calculated),
        (Quantity::R2Standard, r2_standard),
        (
            Quantity::ActualOutput,
            finite(vin * checked_div(r2_standard, total, "R2std/(R1+R2std)")?, "actual output")?,
        ),
    ]))
}
