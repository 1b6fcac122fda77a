//! Named circuit quantities and the result records the solvers return.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use crate::math::Scalar;
use crate::units::Unit;

/// Every quantity a solver reads or derives.
///
/// Declaration order is the iteration order of a [`ResultRecord`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quantity {
    /// Voltage across a resistor.
    Voltage,
    /// Current through a resistor or divider chain.
    Current,
    /// Resistance of a single element.
    Resistance,
    /// Dissipated power.
    Power,
    /// Divider supply voltage.
    InputVoltage,
    /// Upper divider resistor.
    R1,
    /// Lower divider resistor.
    R2,
    /// Output voltage the divider should produce.
    DesiredOutput,
    /// Divider output voltage for the given resistors.
    OutputVoltage,
    /// Power dissipated in R1.
    PowerR1,
    /// Power dissipated in R2.
    PowerR2,
    /// Exact R2 needed for the desired output.
    R2Calculated,
    /// R2 snapped to the selected standard series.
    R2Standard,
    /// Divider output voltage with the standard R2 fitted.
    ActualOutput,
    /// −3 dB frequency of an RC filter.
    CutoffFrequency,
    /// Filter capacitance.
    Capacitance,
}

impl Quantity {
    /// Stable camel-case name, as used by presentation layers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Voltage => "voltage",
            Self::Current => "current",
            Self::Resistance => "resistance",
            Self::Power => "power",
            Self::InputVoltage => "inputVoltage",
            Self::R1 => "r1",
            Self::R2 => "r2",
            Self::DesiredOutput => "desiredOutput",
            Self::OutputVoltage => "outputVoltage",
            Self::PowerR1 => "powerR1",
            Self::PowerR2 => "powerR2",
            Self::R2Calculated => "r2Calculated",
            Self::R2Standard => "r2Standard",
            Self::ActualOutput => "actualOutput",
            Self::CutoffFrequency => "cutoffFrequency",
            Self::Capacitance => "capacitance",
        }
    }

    /// Base unit the quantity is expressed in.
    #[must_use]
    pub const fn unit(self) -> Unit {
        match self {
            Self::Voltage
            | Self::InputVoltage
            | Self::DesiredOutput
            | Self::OutputVoltage
            | Self::ActualOutput => Unit::Volt,
            Self::Current => Unit::Ampere,
            Self::Resistance | Self::R1 | Self::R2 | Self::R2Calculated | Self::R2Standard => {
                Unit::Ohm
            }
            Self::Power | Self::PowerR1 | Self::PowerR2 => Unit::Watt,
            Self::CutoffFrequency => Unit::Hertz,
            Self::Capacitance => Unit::Farad,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Quantities derived by one solve call.
///
/// Only the quantities the selected branch computes are present; an empty
/// record means no branch had enough known inputs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRecord {
    values: BTreeMap<Quantity, Scalar>,
}

impl ResultRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `quantity`, if the branch that fired derived it.
    #[must_use]
    pub fn get(&self, quantity: Quantity) -> Option<Scalar> {
        self.values.get(&quantity).copied()
    }

    /// Returns true if `quantity` was derived.
    #[must_use]
    pub fn contains(&self, quantity: Quantity) -> bool {
        self.values.contains_key(&quantity)
    }

    /// Number of derived quantities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if nothing was derived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates entries in [`Quantity`] declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Quantity, Scalar)> + '_ {
        self.values.iter().map(|(&q, &v)| (q, v))
    }
}

impl FromIterator<(Quantity, Scalar)> for ResultRecord {
    fn from_iter<T: IntoIterator<Item = (Quantity, Scalar)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultRecord {
    type Item = (&'a Quantity, &'a Scalar);
    type IntoIter = btree_map::Iter<'a, Quantity, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (quantity, value)) in self.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{quantity} = {value} {}", quantity.unit())?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn record_is_a_map_keyed_by_camel_case_names() {
        let record: ResultRecord = [
            (Quantity::R2Standard, 3_300.0),
            (Quantity::ActualOutput, 3.3),
            (Quantity::PowerR1, 0.125),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"powerR1":0.125,"r2Standard":3300.0,"actualOutput":3.3}"#);
        let back: ResultRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn unknown_quantity_names_are_rejected() {
        assert!(serde_json::from_str::<ResultRecord>(r#"{"inductance":1.0}"#).is_err());
        let empty: ResultRecord = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }
}
