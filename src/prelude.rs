//! Convenience re-exports for solving circuit design problems.

pub use crate::circuits::divider::solve as solve_divider;
pub use crate::circuits::filter::{
    resolve as resolve_rc, response_curve, solve as solve_filter, solve_with as solve_filter_with,
};
pub use crate::circuits::ohm::solve as solve_ohms_law;
pub use crate::circuits::{
    nearest_standard_value, DividerInputs, FilterInputs, FilterResponse, FilterTopology,
    OhmLawInputs, Quantity, RcParameters, ResultRecord, StandardSeries,
};
pub use crate::constants::{angular_frequency, HALF_POWER_DB};
pub use crate::errors::{CircuitCalcError, DomainError};
pub use crate::math::Scalar;
pub use crate::sweep::{
    logspace_hz, write_response_curve_csv, ResponseCurve, ResponsePoint, SweepConfig,
};
pub use crate::units::Unit;
