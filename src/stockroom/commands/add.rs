use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{EntityId, InventoryItem, Stocked};
use crate::store::PersistentLog;
use chrono::{DateTime, Utc};

pub fn run(
    log: &mut PersistentLog<InventoryItem>,
    id: EntityId,
    name: String,
    quantity: i32,
    date_added: DateTime<Utc>,
) -> Result<CmdResult> {
    let item = InventoryItem::new(id, name, quantity, date_added)?;
    log.add(item.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item added ({}): {}",
        id,
        item.name()
    )));
    Ok(result.with_affected_items(vec![item]))
}
