use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::InventoryItem;
use crate::store::PersistentLog;
use chrono::{DateTime, Duration, Utc};

const SAMPLE_ITEMS: &[(i32, &str, i32, i64)] = &[
    (1, "Laptop stand", 10, 10),
    (2, "RAM Chips", 25, 5),
    (3, "Monitor", 10, 2),
    (4, "Laptop cover", 8, 1),
    (5, "Keyboard", 12, 0),
];

/// Append the sample catalogue, dated `days_ago` relative to `now`.
pub fn run(log: &mut PersistentLog<InventoryItem>, now: DateTime<Utc>) -> Result<CmdResult> {
    let mut seeded = Vec::with_capacity(SAMPLE_ITEMS.len());
    for &(id, name, quantity, days_ago) in SAMPLE_ITEMS {
        seeded.push(InventoryItem::new(
            id,
            name,
            quantity,
            now - Duration::days(days_ago),
        )?);
    }

    for item in &seeded {
        log.add(item.clone());
    }

    let mut result = CmdResult::default().with_affected_items(seeded);
    result.add_message(CmdMessage::success("Sample data seeded."));
    Ok(result)
}
