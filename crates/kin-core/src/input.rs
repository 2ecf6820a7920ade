//! Input sets: the known/unknown variable bindings for one problem.

use std::collections::BTreeMap;

use crate::quantity::Quantity;

/// An ordered mapping from quantity to optional value, scoped to one formula
/// family. An absent value marks an unknown, the solve-for target.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSet {
    values: Vec<(Quantity, Option<f64>)>,
}

impl InputSet {
    /// Build an input set over `quantities`, all unknown.
    #[must_use]
    pub fn new(quantities: &[Quantity]) -> Self {
        Self {
            values: quantities.iter().map(|&quantity| (quantity, None)).collect(),
        }
    }

    /// Bind `quantity` to `value`. Quantities outside this set are ignored.
    pub fn set(&mut self, quantity: Quantity, value: Option<f64>) {
        if let Some(slot) = self.values.iter_mut().find(|(q, _)| *q == quantity) {
            slot.1 = value;
        }
    }

    /// The value bound to `quantity`, if known.
    #[must_use]
    pub fn value(&self, quantity: Quantity) -> Option<f64> {
        self.values
            .iter()
            .find(|(q, _)| *q == quantity)
            .and_then(|(_, value)| *value)
    }

    /// Number of quantities still unknown.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.values.iter().filter(|(_, value)| value.is_none()).count()
    }

    /// Iterate the bindings in prompt order.
    pub fn iter(&self) -> impl Iterator<Item = (Quantity, Option<f64>)> + '_ {
        self.values.iter().copied()
    }

    /// Snapshot as a name → value-or-null map for history records.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, Option<f64>> {
        self.values
            .iter()
            .map(|(quantity, value)| (quantity.as_str().to_string(), *value))
            .collect()
    }
}
