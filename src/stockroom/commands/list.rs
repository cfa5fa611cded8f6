use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::InventoryItem;
use crate::store::PersistentLog;

pub fn run(log: &PersistentLog<InventoryItem>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_items(log.get_all()))
}
