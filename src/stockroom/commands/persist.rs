use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::InventoryItem;
use crate::store::{LoadOutcome, PersistentLog};

pub fn save(log: &PersistentLog<InventoryItem>) -> Result<CmdResult> {
    log.save_to_file()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Data saved to {}",
        log.path().display()
    )));
    Ok(result)
}

pub fn load(log: &mut PersistentLog<InventoryItem>) -> Result<CmdResult> {
    let outcome = log.load_from_file()?;
    let message = match outcome {
        LoadOutcome::Loaded(_) => {
            CmdMessage::info(format!("Data loaded from {}", log.path().display()))
        }
        LoadOutcome::Missing => CmdMessage::info(format!(
            "File {} not found, starting with empty log.",
            log.path().display()
        )),
        LoadOutcome::Empty => {
            CmdMessage::warning(format!("File {} is empty.", log.path().display()))
        }
    };

    let mut result = CmdResult::default().with_load_outcome(outcome);
    result.add_message(message);
    Ok(result)
}
