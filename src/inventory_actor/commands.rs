//! Stock operations over the whole inventory.
//!
//! Each command runs inside one inventory actor turn against a staged copy of the rows.
//! A command that fails leaves the stored rows untouched, which makes `Reserve` and
//! `Rebalance` all-or-nothing.

use super::InventoryError;
use crate::model::{Demand, InventoryItem};
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum InventoryCommand {
    /// Read-only: fails on the first ingredient that is unknown or short.
    CheckSufficient(Demand),
    /// Subtracts without checking. Callers are expected to have checked first.
    Deduct(Demand),
    /// Adds quantities back.
    Restore(Demand),
    /// Check then deduct, as one step.
    Reserve(Demand),
    /// Restore `release`, then reserve `reserve` against the result, as one step.
    Rebalance { release: Demand, reserve: Demand },
}

impl InventoryCommand {
    pub fn is_read_only(&self) -> bool {
        matches!(self, InventoryCommand::CheckSufficient(_))
    }
}

pub(crate) fn apply(
    items: &mut [InventoryItem],
    command: InventoryCommand,
) -> Result<(), InventoryError> {
    match command {
        InventoryCommand::CheckSufficient(demand) => check(items, &demand),
        InventoryCommand::Deduct(demand) => {
            deduct(items, &demand);
            Ok(())
        }
        InventoryCommand::Restore(demand) => {
            restore(items, &demand);
            Ok(())
        }
        InventoryCommand::Reserve(demand) => {
            check(items, &demand)?;
            deduct(items, &demand);
            Ok(())
        }
        InventoryCommand::Rebalance { release, reserve } => {
            restore(items, &release);
            check(items, &reserve)?;
            deduct(items, &reserve);
            Ok(())
        }
    }
}

pub(crate) fn check(items: &[InventoryItem], demand: &Demand) -> Result<(), InventoryError> {
    for (ingredient, demanded) in demand.iter() {
        let row = items
            .iter()
            .find(|item| &item.ingredient_id == ingredient)
            .ok_or_else(|| InventoryError::UnknownIngredient(ingredient.clone()))?;

        if demanded > row.quantity {
            return Err(InventoryError::InsufficientStock {
                ingredient: ingredient.clone(),
                demanded,
                available: row.quantity,
            });
        }
    }
    Ok(())
}

fn deduct(items: &mut [InventoryItem], demand: &Demand) {
    adjust(items, demand, -1.0);
}

fn restore(items: &mut [InventoryItem], demand: &Demand) {
    adjust(items, demand, 1.0);
}

fn adjust(items: &mut [InventoryItem], demand: &Demand, sign: f64) {
    for (ingredient, quantity) in demand.iter() {
        match items.iter_mut().find(|item| &item.ingredient_id == ingredient) {
            Some(row) => row.quantity += sign * quantity,
            None => warn!(%ingredient, quantity, "Skipping stock adjustment for unknown ingredient"),
        }
    }
}
