#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Base units and sweep defaults used throughout the library.
pub mod constants;
/// Base SI unit symbols.
pub mod units;
/// Scalar aliases and domain-checked arithmetic.
pub mod math;
/// Ohm's law, divider and RC filter solvers.
pub mod circuits;
/// Frequency sweep builders, response curves and CSV export.
pub mod sweep;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
