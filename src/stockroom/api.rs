//! # API Facade
//!
//! `InventoryApi` is the single entry point for UI clients. It owns the
//! persisted inventory log and the in-memory warehouse and dispatches to
//! `commands/*.rs`.
//!
//! The facade does no business logic and no I/O of its own beyond what the
//! commands do. Errors come back as typed [`StockroomError`] variants so a
//! client can tell, say, a duplicate id from a missing one without parsing
//! text.
//!
//! [`StockroomError`]: crate::error::StockroomError

use crate::commands;
use crate::config::StockroomConfig;
use crate::error::Result;
use crate::model::{EntityId, InventoryItem, Section, StockItem};
use crate::store::PersistentLog;
use crate::warehouse::WarehouseManager;
use chrono::Utc;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, StockroomPaths};

pub struct InventoryApi {
    log: PersistentLog<InventoryItem>,
    warehouse: WarehouseManager,
    paths: commands::StockroomPaths,
}

impl InventoryApi {
    pub fn new(paths: commands::StockroomPaths, config: &StockroomConfig) -> Result<Self> {
        let log = PersistentLog::new(paths.data_file(config))?;
        Ok(Self {
            log,
            warehouse: WarehouseManager::new(),
            paths,
        })
    }

    pub fn seed_inventory(&mut self) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.log, Utc::now())
    }

    pub fn add_item(
        &mut self,
        id: EntityId,
        name: String,
        quantity: i32,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.log, id, name, quantity, Utc::now())
    }

    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.log)
    }

    pub fn save(&self) -> Result<commands::CmdResult> {
        commands::persist::save(&self.log)
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        commands::persist::load(&mut self.log)
    }

    pub fn seed_warehouse(&mut self) -> Result<()> {
        self.warehouse.seed_data(Utc::now())
    }

    pub fn warehouse_items(&self, section: Section) -> commands::CmdResult<StockItem> {
        commands::CmdResult::default().with_listed_items(self.warehouse.section_items(section))
    }

    pub fn restock(
        &mut self,
        section: Section,
        id: EntityId,
        amount: i32,
    ) -> Result<commands::CmdResult<StockItem>> {
        match section {
            Section::Electronics => {
                commands::stock::restock(self.warehouse.electronics_mut(), id, amount)
                    .map(|r| r.map_items(StockItem::from))
            }
            Section::Groceries => {
                commands::stock::restock(self.warehouse.groceries_mut(), id, amount)
                    .map(|r| r.map_items(StockItem::from))
            }
        }
    }

    pub fn remove_stock(
        &mut self,
        section: Section,
        id: EntityId,
    ) -> Result<commands::CmdResult<StockItem>> {
        match section {
            Section::Electronics => commands::stock::remove(self.warehouse.electronics_mut(), id)
                .map(|r| r.map_items(StockItem::from)),
            Section::Groceries => commands::stock::remove(self.warehouse.groceries_mut(), id)
                .map(|r| r.map_items(StockItem::from)),
        }
    }

    pub fn warehouse(&self) -> &WarehouseManager {
        &self.warehouse
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}
