//! Stock-level operations over any repository of stocked items.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockroomError};
use crate::model::{EntityId, Stocked};
use crate::store::Repository;

/// Add `amount` (possibly negative) to the stored quantity of `id`.
///
/// Goes through `Repository::update_quantity`, so a result below zero is
/// rejected with `InvalidValue` and the stored value is kept.
pub fn restock<T: Stocked + Clone>(
    repo: &mut Repository<T>,
    id: EntityId,
    amount: i32,
) -> Result<CmdResult<T>> {
    let item = repo.get_by_id(id)?;
    let new_quantity = item.quantity().checked_add(amount).ok_or_else(|| {
        StockroomError::InvalidValue(format!(
            "Quantity overflow: {} + {}",
            item.quantity(),
            amount
        ))
    })?;
    repo.update_quantity(id, new_quantity)?;

    let updated = repo.get_by_id(id)?;
    let mut result = CmdResult::default();
    let direction = if amount < 0 { "decreased" } else { "increased" };
    result.add_message(CmdMessage::success(format!(
        "Stock {} for {}. New quantity: {}",
        direction,
        updated.name(),
        updated.quantity()
    )));
    Ok(result.with_affected_items(vec![updated]))
}

pub fn remove<T: Stocked + Clone>(repo: &mut Repository<T>, id: EntityId) -> Result<CmdResult<T>> {
    let removed = repo.remove(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item with ID {} removed successfully.",
        id
    )));
    Ok(result.with_affected_items(vec![removed]))
}
