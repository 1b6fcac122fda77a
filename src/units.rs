//! Base SI units handled by the solvers.

use std::fmt;

/// The fixed base units every quantity is expressed in.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Electric potential (V).
    Volt,
    /// Electric current (A).
    Ampere,
    /// Resistance (Ω).
    Ohm,
    /// Power (W).
    Watt,
    /// Capacitance (F).
    Farad,
    /// Frequency (Hz).
    Hertz,
}

impl Unit {
    /// Conventional symbol for the unit.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Volt => "V",
            Self::Ampere => "A",
            Self::Ohm => "Ω",
            Self::Watt => "W",
            Self::Farad => "F",
            Self::Hertz => "Hz",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ohm_prints_omega() {
        assert_eq!(Unit::Ohm.to_string(), "Ω");
        assert_eq!(format!("{}", Unit::Hertz), "Hz");
    }
}
