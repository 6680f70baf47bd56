use crate::model::IngredientId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ingredient quantities required by a set of order items.
///
/// Entries are kept sorted by ingredient id, so checks walk them in a stable order and
/// report the same failing ingredient every time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Demand(BTreeMap<IngredientId, f64>);

impl Demand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` to the running total for `ingredient`.
    pub fn add(&mut self, ingredient: IngredientId, quantity: f64) {
        *self.0.entry(ingredient).or_insert(0.0) += quantity;
    }

    pub fn get(&self, ingredient: &IngredientId) -> Option<f64> {
        self.0.get(ingredient).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&IngredientId, f64)> {
        self.0.iter().map(|(id, qty)| (id, *qty))
    }
}

impl<I: Into<IngredientId>> FromIterator<(I, f64)> for Demand {
    fn from_iter<T: IntoIterator<Item = (I, f64)>>(iter: T) -> Self {
        let mut demand = Demand::new();
        for (ingredient, quantity) in iter {
            demand.add(ingredient.into(), quantity);
        }
        demand
    }
}
