//! Ordered formula tables shared by the solvers.
//!
//! Each solver owns a static slice of [`Branch`] entries. A branch names the
//! inputs it needs and the formula that runs when they are all known; the
//! first entry whose inputs are known wins. Keeping the priority in data
//! rather than in an `if`/`else` ladder lets callers inspect and test it.

use std::fmt;

use crate::circuits::quantity::Quantity;
use crate::errors::DomainError;
use crate::math::Scalar;

/// Returns true if `value` counts as a supplied input.
///
/// Zero, `NaN` and infinities are all treated as "not provided".
#[inline]
#[must_use]
pub fn is_known(value: Scalar) -> bool {
    value.is_finite() && value != 0.0
}

/// Input snapshot a solver can query by quantity.
pub trait KnownInputs {
    /// Raw value supplied for `quantity`, if any.
    fn supplied(&self, quantity: Quantity) -> Option<Scalar>;

    /// Value for `quantity` if it was supplied and is usable.
    fn known(&self, quantity: Quantity) -> Option<Scalar> {
        self.supplied(quantity).filter(|v| is_known(*v))
    }
}

/// Formula evaluated when every required input of a branch is known.
pub type Formula<const N: usize, C, O> = fn([Scalar; N], C) -> Result<O, DomainError>;

/// One entry of a solver's priority table.
pub struct Branch<const N: usize, C, O> {
    /// Short label used in logs and tests (e.g. `"V,I"`).
    pub name: &'static str,
    /// Inputs that must all be known, in the order the formula receives them.
    pub requires: [Quantity; N],
    /// Formula producing the branch output.
    pub formula: Formula<N, C, O>,
}

impl<const N: usize, C, O> Branch<N, C, O> {
    /// Collects the required inputs, or `None` if any is unknown.
    pub fn bind<I: KnownInputs + ?Sized>(&self, inputs: &I) -> Option<[Scalar; N]> {
        let mut values = [0.0; N];
        for (slot, &quantity) in values.iter_mut().zip(self.requires.iter()) {
            *slot = inputs.known(quantity)?;
        }
        Some(values)
    }

    /// Returns true if this branch's inputs are all known.
    pub fn applies<I: KnownInputs + ?Sized>(&self, inputs: &I) -> bool {
        self.bind(inputs).is_some()
    }
}

impl<const N: usize, C, O> fmt::Debug for Branch<N, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branch")
            .field("name", &self.name)
            .field("requires", &self.requires)
            .finish_non_exhaustive()
    }
}

/// Finds the first branch in `table` whose inputs are all known.
pub fn select<'t, const N: usize, C, O, I>(
    table: &'t [Branch<N, C, O>],
    inputs: &I,
) -> Option<(&'t Branch<N, C, O>, [Scalar; N])>
where
    I: KnownInputs + ?Sized,
{
    table
        .iter()
        .find_map(|branch| branch.bind(inputs).map(|values| (branch, values)))
}

/// Runs the first applicable branch, or returns `Ok(None)` if none applies.
pub fn evaluate_first<const N: usize, C, O, I>(
    table: &[Branch<N, C, O>],
    inputs: &I,
    context: C,
) -> Result<Option<O>, DomainError>
where
    I: KnownInputs + ?Sized,
{
    match select(table, inputs) {
        Some((branch, values)) => {
            tracing::debug!(branch = branch.name, "formula branch selected");
            (branch.formula)(values, context).map(Some)
        }
        None => {
            tracing::debug!("no formula branch has enough known inputs");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct Snapshot(HashMap<Quantity, Scalar>);

    impl KnownInputs for Snapshot {
        fn supplied(&self, quantity: Quantity) -> Option<Scalar> {
            self.0.get(&quantity).copied()
        }
    }

    fn sum(values: [Scalar; 2], _: ()) -> Result<Scalar, DomainError> {
        Ok(values[0] + values[1])
    }

    fn product(values: [Scalar; 2], _: ()) -> Result<Scalar, DomainError> {
        Ok(values[0] * values[1])
    }

    static TABLE: &[Branch<2, (), Scalar>] = &[
        Branch {
            name: "V,I",
            requires: [Quantity::Voltage, Quantity::Current],
            formula: sum,
        },
        Branch {
            name: "V,R",
            requires: [Quantity::Voltage, Quantity::Resistance],
            formula: product,
        },
    ];

    #[test]
    fn zero_nan_and_infinity_are_unknown() {
        assert!(!is_known(0.0));
        assert!(!is_known(-0.0));
        assert!(!is_known(Scalar::NAN));
        assert!(!is_known(Scalar::INFINITY));
        assert!(is_known(-3.0));
    }

    #[test]
    fn first_applicable_branch_wins() {
        let inputs = Snapshot(HashMap::from([
            (Quantity::Voltage, 2.0),
            (Quantity::Current, 3.0),
            (Quantity::Resistance, 4.0),
        ]));
        let (branch, values) = select(TABLE, &inputs).expect("branch applies");
        assert_eq!(branch.name, "V,I");
        assert_eq!(values, [2.0, 3.0]);
        assert_eq!(evaluate_first(TABLE, &inputs, ()), Ok(Some(5.0)));
    }

    #[test]
    fn zero_input_falls_through_to_next_branch() {
        let inputs = Snapshot(HashMap::from([
            (Quantity::Voltage, 2.0),
            (Quantity::Current, 0.0),
            (Quantity::Resistance, 4.0),
        ]));
        assert!(!TABLE[0].applies(&inputs));
        assert_eq!(evaluate_first(TABLE, &inputs, ()), Ok(Some(8.0)));
    }

    #[test]
    fn no_branch_yields_none() {
        let inputs = Snapshot(HashMap::new());
        assert!(select(TABLE, &inputs).is_none());
        assert_eq!(evaluate_first(TABLE, &inputs, ()), Ok(None));
    }
}
