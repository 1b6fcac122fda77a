//! Circuit parameter solvers and the tables they share.

/// Ordered formula-branch tables and input lookup.
pub mod branch;
/// Two-resistor voltage divider analysis and design.
pub mod divider;
/// Single-pole RC filter design and frequency response.
pub mod filter;
/// Ohm's law and resistor power relations.
pub mod ohm;
/// Named quantities and result records.
pub mod quantity;
/// E12/E24 preferred values.
pub mod standard_values;

pub use branch::{is_known, Branch, KnownInputs};
pub use divider::{DividerInputs, DIVIDER_BRANCHES};
pub use filter::{FilterInputs, FilterResponse, FilterTopology, RcParameters, FILTER_BRANCHES};
pub use ohm::{OhmLawInputs, OHM_LAW_BRANCHES};
pub use quantity::{Quantity, ResultRecord};
pub use standard_values::{nearest_standard_value, StandardSeries};
