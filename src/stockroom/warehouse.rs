//! In-memory warehouse: one [`Repository`] per stock section.
//!
//! Nothing here is persisted. The manager lives as long as the process that
//! owns it.

use crate::error::Result;
use crate::model::{ElectronicItem, GroceryItem, Section, StockItem};
use crate::store::Repository;
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Default)]
pub struct WarehouseManager {
    electronics: Repository<ElectronicItem>,
    groceries: Repository<GroceryItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock both sections with the sample catalogue.
    ///
    /// Grocery expiry dates are computed relative to `now`.
    pub fn seed_data(&mut self, now: DateTime<Utc>) -> Result<()> {
        self.electronics
            .add(ElectronicItem::new(1, "iPad", 10, "Apple", 35)?)?;
        self.electronics
            .add(ElectronicItem::new(2, "Microwave", 15, "Akai", 12)?)?;
        self.electronics
            .add(ElectronicItem::new(3, "Headphones", 20, "Oraimo", 6)?)?;

        self.groceries.add(GroceryItem::new(
            1,
            "Margarine",
            50,
            now + Duration::days(120),
        )?)?;
        self.groceries.add(GroceryItem::new(
            2,
            "Bread Spread",
            30,
            now + Duration::days(7),
        )?)?;
        self.groceries.add(GroceryItem::new(
            3,
            "Tomatoes",
            100,
            now + Duration::days(14),
        )?)?;
        Ok(())
    }

    pub fn electronics(&self) -> &Repository<ElectronicItem> {
        &self.electronics
    }

    pub fn electronics_mut(&mut self) -> &mut Repository<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries(&self) -> &Repository<GroceryItem> {
        &self.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut Repository<GroceryItem> {
        &mut self.groceries
    }

    /// Snapshot of one section, as uniform stock items.
    pub fn section_items(&self, section: Section) -> Vec<StockItem> {
        match section {
            Section::Electronics => self
                .electronics
                .get_all()
                .into_iter()
                .map(StockItem::from)
                .collect(),
            Section::Groceries => self
                .groceries
                .get_all()
                .into_iter()
                .map(StockItem::from)
                .collect(),
        }
    }
}
